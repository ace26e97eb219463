//! WASM bindings for Kirchhoff.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'kirchhoff';
//!
//! await init();
//!
//! const circuit = new WasmCircuit(`
//!   1 -- 2, 1;
//!   1 -- 3, 1;
//!   2 -- 3, 1; 3V
//! `);
//!
//! const currents = circuit.solve(); // Float64Array [1, -1, 1]
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::Circuit;
use crate::report;
use crate::solver::SolverConfig;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible circuit.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
    config: SolverConfig,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Parse an edge list and build the circuit.
    ///
    /// # Returns
    /// A new `WasmCircuit` or an error message if the input is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(edge_list: &str) -> Result<WasmCircuit, JsValue> {
        Self::with_epsilon(edge_list, crate::DEFAULT_EPSILON)
    }

    /// Parse an edge list with a custom singularity tolerance.
    #[wasm_bindgen]
    pub fn with_epsilon(edge_list: &str, epsilon: f64) -> Result<WasmCircuit, JsValue> {
        let circuit: Circuit = edge_list.parse().map_err(|e: crate::CircuitError| JsValue::from_str(&e.to_string()))?;
        Ok(WasmCircuit {
            circuit,
            config: SolverConfig::new().with_epsilon(epsilon),
        })
    }

    /// Solve and return the currents in edge order.
    #[wasm_bindgen]
    pub fn solve(&self) -> Result<Vec<f64>, JsValue> {
        self.circuit
            .solve_with(&self.config)
            .map(|solution| solution.currents())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Solve and return the formatted report, one line per edge.
    #[wasm_bindgen]
    pub fn solve_report(&self) -> Result<String, JsValue> {
        self.circuit
            .solve_with(&self.config)
            .map(|solution| report::format_solution(&solution, None))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of edges.
    #[wasm_bindgen(getter)]
    pub fn edge_count(&self) -> usize {
        self.circuit.number_of_edges()
    }

    /// Number of connected components.
    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> usize {
        self.circuit.number_of_components()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
