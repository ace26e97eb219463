//! Solver for a single connected component.
//!
//! ## Equation layout
//!
//! For a component with `N` nodes and `E` edges the unknowns are
//! `[I_0 .. I_{E-1}, φ_0 .. φ_{N-1}]` and the `N + E` equations are:
//!
//! ```text
//! rows 0 .. N-2    KCL:    Σ sign(node, edge) * I_edge = 0
//! row  N-1         ground: φ_0 = 0
//! rows N .. N+E-1  branch: R_i * I_i - φ(node1) + φ(node2) = emf_i
//! ```
//!
//! The KCL equation of the last node is dropped since it is the negated sum
//! of the others; the ground row takes its place.

use std::collections::HashMap;

use tracing::trace;

use super::{BranchCurrent, Connection, Edge, NodeId};
use crate::error::{CircuitError, Result};
use crate::solver::{LinearSystem, Matrix, Tolerance};

/// Currents and potentials of one solved component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSolution {
    /// One entry per edge, in component-local edge order
    pub branches: Vec<BranchCurrent>,
    /// Potential of every node, relative to the component's reference node
    pub potentials: Vec<(NodeId, f64)>,
}

/// One electrically connected group of edges.
///
/// The edges are expected to form a single connected graph; a disconnected
/// edge set leaves potentials undetermined and solves as singular.
#[derive(Debug, Clone)]
pub struct ConnectedCircuit {
    edges: Vec<Edge>,
    /// `N x E`: FlowOut at the row of node1, FlowIn at the row of node2
    incidence: Matrix<Connection>,
    node_indices: HashMap<NodeId, usize>,
    /// Local index -> node id
    nodes: Vec<NodeId>,
}

impl ConnectedCircuit {
    /// Build the node map and incidence matrix in one pass. `O(E)`.
    pub fn new(edges: Vec<Edge>) -> Result<Self> {
        if edges.is_empty() {
            return Err(CircuitError::EmptyComponent);
        }

        let mut node_indices = HashMap::new();
        let mut nodes = Vec::new();
        for edge in &edges {
            for node in [edge.node1, edge.node2] {
                node_indices.entry(node).or_insert_with(|| {
                    nodes.push(node);
                    nodes.len() - 1
                });
            }
        }

        let mut incidence = Matrix::new(nodes.len(), edges.len());
        for (i, edge) in edges.iter().enumerate() {
            incidence[(node_indices[&edge.node1], i)] = Connection::FlowOut;
            incidence[(node_indices[&edge.node2], i)] = Connection::FlowIn;
        }

        Ok(Self {
            edges,
            incidence,
            node_indices,
            nodes,
        })
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes in local index order. The first one is the reference node.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn incidence_matrix(&self) -> &Matrix<Connection> {
        &self.incidence
    }

    /// Dense local index of a node, if it belongs to this component.
    pub fn local_index(&self, node: NodeId) -> Option<usize> {
        self.node_indices.get(&node).copied()
    }

    fn index(&self, node: NodeId) -> usize {
        self.node_indices[&node]
    }

    /// Assemble the `(N + E)` augmented system.
    pub fn make_system<C: Tolerance<f64>>(&self, cmp: C) -> LinearSystem<f64, C> {
        let n = self.number_of_nodes();
        let e = self.number_of_edges();
        let mut system = LinearSystem::zeros(n + e, cmp);

        self.add_current_law_equations(&mut system);
        self.add_branch_equations(&mut system);

        system
    }

    // N - 1 rows copied from the incidence matrix
    fn add_current_law_equations<C: Tolerance<f64>>(&self, system: &mut LinearSystem<f64, C>) {
        for node in 0..self.number_of_nodes() - 1 {
            let row = system.row_mut(node);
            for (coef, connection) in row.iter_mut().zip(self.incidence.row(node)) {
                *coef = connection.value();
            }
        }
    }

    // Ground row plus E branch rows
    fn add_branch_equations<C: Tolerance<f64>>(&self, system: &mut LinearSystem<f64, C>) {
        let n = self.number_of_nodes();
        let e = self.number_of_edges();

        system.set(n - 1, e, 1.0);

        for (i, edge) in self.edges.iter().enumerate() {
            let row = n + i;
            system.set(row, i, edge.resistance);
            system.set(row, e + self.index(edge.node1), -1.0);
            system.set(row, e + self.index(edge.node2), 1.0);
            system.set_rhs(row, edge.emf);
        }
    }

    /// Solve the component.
    ///
    /// Fails with [`CircuitError::SingularMatrix`] for the whole component if
    /// the system has no unique solution. `O((N + E)^3)`.
    pub fn solve<C: Tolerance<f64> + Clone>(&self, cmp: C) -> Result<ComponentSolution> {
        let e = self.number_of_edges();
        let x = self.make_system(cmp).solve()?;
        let (currents, potentials) = x.split_at(e);

        trace!(
            nodes = self.number_of_nodes(),
            edges = e,
            "solved connected component"
        );

        Ok(ComponentSolution {
            branches: self
                .edges
                .iter()
                .zip(currents)
                .map(|(&edge, &current)| BranchCurrent { edge, current })
                .collect(),
            potentials: self.nodes.iter().copied().zip(potentials.iter().copied()).collect(),
        })
    }
}
