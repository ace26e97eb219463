//! Dense linear-system solver.
//!
//! This module provides the numerical engine for circuit solving.
//!
//! ## Gaussian Elimination
//!
//! Each connected component of a circuit yields a square system `Ax = b`,
//! stored as the augmented matrix `[A | b]`:
//!
//! ```text
//! [ a00 a01 .. a0n | b0 ]        [ 1  0 .. 0 | x0 ]
//! [ a10 a11 .. a1n | b1 ]  --->  [ 0  1 .. 0 | x1 ]
//! [  :   :      :  |  : ]        [ :  :    : |  : ]
//! ```
//!
//! 1. Forward elimination with partial pivoting brings `A` to upper
//!    triangular form and yields the product of pivots
//! 2. Back substitution reduces to `[I | x]`
//!
//! A pivot that is zero under the [`Tolerance`] comparator means the system
//! has no unique solution, and solving fails as a whole.

mod gauss;
mod matrix;
mod tolerance;

pub use gauss::LinearSystem;
pub use matrix::Matrix;
pub use tolerance::{RelativeTolerance, Tolerance};

/// Default relative tolerance for pivot and equality tests.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Configuration for solving a circuit.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Relative tolerance used to detect singular systems.
    pub epsilon: f64,
    /// Solve connected components on the rayon thread pool.
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            parallel: false,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative tolerance.
    ///
    /// Larger values flag nearly-singular systems as singular sooner.
    /// - 1e-8 (default): only rejects systems that are singular up to rounding
    /// - 1e-6: also rejects badly conditioned networks
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Enable or disable parallel component solving.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The comparator described by this configuration.
    pub fn tolerance(&self) -> RelativeTolerance {
        RelativeTolerance::new(self.epsilon)
    }
}
