//! Composite circuit: partitioning, dispatch and merge.

use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::{debug, warn};

use super::connected::{ComponentSolution, ConnectedCircuit};
use super::partition::connected_components;
use super::validate::validate_edges;
use super::{BranchCurrent, Edge, EdgeId, NodeId, Solution};
use crate::error::{CircuitError, Result};
use crate::solver::{RelativeTolerance, SolverConfig};

/// A complete, possibly disconnected, resistive network.
///
/// Owns the full edge list and one [`ConnectedCircuit`] per electrically
/// independent group. Components hold their own copies of their edges.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// All edges, sorted by stable index
    edges: Vec<Edge>,
    components: Vec<ConnectedCircuit>,
}

impl Circuit {
    /// Build a circuit from validated edges.
    ///
    /// Edge indices must be unique and cover `0..edges.len()`; every edge is
    /// validated again so that no invalid edge reaches the solver.
    pub fn new(mut edges: Vec<Edge>) -> Result<Self> {
        validate_edges(&edges)?;
        edges.sort_by_key(|edge| edge.id);

        let components = connected_components(&edges)
            .into_iter()
            .map(|group| ConnectedCircuit::new(group.iter().map(|id| edges[id.0]).collect()))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            edges = edges.len(),
            components = components.len(),
            "built circuit"
        );

        Ok(Self { edges, components })
    }

    /// Build a circuit from `(node1, node2, resistance, emf)` tuples with
    /// 1-based node numbers. Edge indices follow iteration order.
    pub fn from_numbered<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64, f64)>,
    {
        let edges = edges
            .into_iter()
            .enumerate()
            .map(|(i, (n1, n2, resistance, emf))| {
                let id = EdgeId(i);
                let node = |number| {
                    NodeId::from_external(number).ok_or(CircuitError::InvalidNode { edge: id, number })
                };
                Edge::new(id, node(n1)?, node(n2)?, resistance, emf)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(edges)
    }

    /// All edges in original order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// The connected components, ordered by their lowest node id.
    pub fn components(&self) -> &[ConnectedCircuit] {
        &self.components
    }

    pub fn number_of_components(&self) -> usize {
        self.components.len()
    }

    /// Solve with the default configuration.
    pub fn solve(&self) -> Result<Solution> {
        self.solve_with(&SolverConfig::default())
    }

    /// Solve every component and merge the results in original edge order.
    ///
    /// All or nothing: if any component is singular the whole solve fails
    /// with [`CircuitError::SingularComponent`] and no currents are returned.
    pub fn solve_with(&self, config: &SolverConfig) -> Result<Solution> {
        let results = self.solve_components(config.tolerance(), config.parallel);

        let mut slots: Vec<Option<BranchCurrent>> = vec![None; self.edges.len()];
        let mut potentials = BTreeMap::new();

        for (component, result) in results.into_iter().enumerate() {
            let solved = result.map_err(|err| self.component_error(component, err))?;
            for branch in solved.branches {
                slots[branch.edge.id.0] = Some(branch);
            }
            potentials.extend(solved.potentials);
        }

        // Every edge belongs to exactly one component
        let branches: Vec<BranchCurrent> = slots.into_iter().flatten().collect();
        debug_assert_eq!(branches.len(), self.edges.len());

        Ok(Solution::new(branches, potentials))
    }

    fn component_error(&self, component: usize, err: CircuitError) -> CircuitError {
        match err {
            CircuitError::SingularMatrix => {
                let edges = self.components[component].number_of_edges();
                warn!(component, edges, "singular connected component");
                CircuitError::SingularComponent { component, edges }
            }
            other => other,
        }
    }

    #[cfg(feature = "parallel")]
    fn solve_components(
        &self,
        cmp: RelativeTolerance,
        parallel: bool,
    ) -> Vec<Result<ComponentSolution>> {
        use rayon::prelude::*;

        if parallel {
            debug!(components = self.components.len(), "solving components in parallel");
            return self.components.par_iter().map(|c| c.solve(cmp)).collect();
        }
        self.components.iter().map(|c| c.solve(cmp)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_components(
        &self,
        cmp: RelativeTolerance,
        _parallel: bool,
    ) -> Vec<Result<ComponentSolution>> {
        self.components.iter().map(|c| c.solve(cmp)).collect()
    }
}

impl FromStr for Circuit {
    type Err = CircuitError;

    /// Parse an edge list and build the circuit.
    fn from_str(input: &str) -> Result<Self> {
        Self::new(crate::dsl::parse(input)?)
    }
}
