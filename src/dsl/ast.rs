//! Parsed edge definitions.

use crate::circuit::{Edge, EdgeId, NodeId};
use crate::error::{CircuitError, Result};

/// One edge as written in the input, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDef {
    /// First node number (1-based)
    pub node1: usize,
    /// Second node number (1-based)
    pub node2: usize,
    /// Resistance in ohms
    pub resistance: f64,
    /// EMF in volts (0 when absent)
    pub emf: f64,
    /// Source line number for error reporting
    pub line: usize,
}

impl EdgeDef {
    /// Convert to a validated [`Edge`] with the given stable index.
    ///
    /// Validation errors are tagged with the source line.
    pub fn to_edge(&self, id: EdgeId) -> Result<Edge> {
        let node = |number| {
            NodeId::from_external(number).ok_or(CircuitError::InvalidNode { edge: id, number })
        };
        let build = || Edge::new(id, node(self.node1)?, node(self.node2)?, self.resistance, self.emf);
        build().map_err(|err| err.at_line(self.line))
    }
}

/// Convert parsed definitions to edges indexed by input position.
pub fn to_edges(defs: &[EdgeDef]) -> Result<Vec<Edge>> {
    defs.iter()
        .enumerate()
        .map(|(i, def)| def.to_edge(EdgeId(i)))
        .collect()
}
