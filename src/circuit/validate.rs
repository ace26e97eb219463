//! Edge and edge-list validation.

use std::collections::HashSet;

use crate::error::{CircuitError, Result};

use super::Edge;

/// Validate a single edge.
///
/// Checks:
/// - Both ends are different nodes
/// - Resistance is finite and non-negative
/// - EMF is finite
pub fn validate_edge(edge: &Edge) -> Result<()> {
    if edge.node1 == edge.node2 {
        return Err(CircuitError::SelfLoop {
            edge: edge.id,
            node: edge.node1,
        });
    }

    if !edge.resistance.is_finite() || edge.resistance < 0.0 {
        return Err(CircuitError::InvalidResistance {
            edge: edge.id,
            value: edge.resistance,
        });
    }

    if !edge.emf.is_finite() {
        return Err(CircuitError::InvalidEmf {
            edge: edge.id,
            value: edge.emf,
        });
    }

    Ok(())
}

/// Validate a whole edge list before it is partitioned.
///
/// Every edge must be valid on its own and the stable indices must be unique
/// and dense, since they are used as write positions when merging results.
pub fn validate_edges(edges: &[Edge]) -> Result<()> {
    let mut seen = HashSet::with_capacity(edges.len());
    for edge in edges {
        validate_edge(edge)?;
        if edge.id.0 >= edges.len() || !seen.insert(edge.id) {
            return Err(CircuitError::DuplicateEdge { edge: edge.id });
        }
    }
    Ok(())
}
