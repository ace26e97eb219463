//! Circuit representation, partitioning and per-component solving.
//!
//! A [`Circuit`] owns an arbitrary edge list. On construction it splits the
//! edges into electrically independent [`ConnectedCircuit`]s; solving runs
//! each component on its own and merges the currents back into a
//! [`Solution`] ordered by each edge's stable index.

mod connected;
mod graph;
pub mod partition;
mod solution;
mod types;
mod validate;

pub use connected::{ComponentSolution, ConnectedCircuit};
pub use graph::Circuit;
pub use solution::{BranchCurrent, Solution};
pub use types::*;
pub use validate::{validate_edge, validate_edges};
