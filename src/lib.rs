//! # Kirchhoff
//!
//! Steady-state branch currents for resistive DC networks.
//!
//! This library provides:
//! - A line-oriented text format for describing edges (resistance + optional EMF)
//! - Partitioning of arbitrary, possibly disconnected, edge sets into
//!   independent connected components
//! - Per-component equation assembly from Kirchhoff's current and voltage laws
//! - A dense Gaussian-elimination core with tolerance-aware singularity detection
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the edge list format
//! - [`circuit`] - Edges, connected components and the composite circuit
//! - [`solver`] - Dense matrix, tolerance comparator and elimination
//! - [`report`] - Text output of solved currents
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! printf '1 -- 2, 4;\n2 -- 3, 6; 12V\n3 -- 1, 2;\n' | currents
//! ```
//!
//! ### Library
//!
//! ```
//! use kirchhoff::Circuit;
//!
//! let circuit: Circuit = "1 -- 2, 1;\n1 -- 3, 1;\n2 -- 3, 1; 3V\n".parse()?;
//! let solution = circuit.solve()?;
//! assert_eq!(solution.len(), 3);
//! # Ok::<(), kirchhoff::CircuitError>(())
//! ```
//!
//! ## Solving Method
//!
//! For each connected component with `N` nodes and `E` edges the solver
//! builds a square system of size `N + E` over the branch currents and node
//! potentials:
//!
//! 1. `N - 1` current-law equations taken from the incidence matrix
//! 2. One equation fixing the reference node's potential to zero
//! 3. `E` branch equations `R * I - φ(node1) + φ(node2) = emf`
//!
//! The system is solved by Gaussian elimination with partial pivoting. A
//! singular component fails the whole solve.

pub mod circuit;
pub mod dsl;
pub mod error;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Circuit, Edge, EdgeId, NodeId, Solution};
pub use error::{CircuitError, Result};
pub use solver::{SolverConfig, DEFAULT_EPSILON};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;
