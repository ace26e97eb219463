//! Solved branch currents.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use super::{Edge, EdgeId, NodeId};

/// The solved current through one edge.
///
/// Positive current flows from `edge.node1` to `edge.node2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchCurrent {
    pub edge: Edge,
    pub current: f64,
}

impl BranchCurrent {
    /// Voltage drop across the resistance, `R * I`.
    pub fn resistor_voltage(&self) -> f64 {
        self.edge.resistance * self.current
    }
}

impl fmt::Display for BranchCurrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing "-0"
        let current = if self.current == 0.0 { 0.0 } else { self.current };
        match f.precision() {
            Some(p) => write!(f, "{}: {:.*} A", self.edge, p, current),
            None => write!(f, "{}: {} A", self.edge, current),
        }
    }
}

/// Currents for every edge of a circuit, in original edge order.
///
/// Node potentials are relative to the reference node of their own
/// connected component, which is held at 0 V.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    branches: Vec<BranchCurrent>,
    potentials: BTreeMap<NodeId, f64>,
}

impl Solution {
    pub(crate) fn new(branches: Vec<BranchCurrent>, potentials: BTreeMap<NodeId, f64>) -> Self {
        debug_assert!(branches.iter().enumerate().all(|(i, b)| b.edge.id == EdgeId(i)));
        Self {
            branches,
            potentials,
        }
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Iterate in original edge order.
    pub fn iter(&self) -> std::slice::Iter<'_, BranchCurrent> {
        self.branches.iter()
    }

    /// The branch with the given stable index.
    pub fn get(&self, id: EdgeId) -> Option<&BranchCurrent> {
        self.branches.get(id.0)
    }

    /// The current through the edge with the given stable index.
    pub fn current(&self, id: EdgeId) -> Option<f64> {
        self.get(id).map(|b| b.current)
    }

    /// All currents in original edge order.
    pub fn currents(&self) -> Vec<f64> {
        self.branches.iter().map(|b| b.current).collect()
    }

    /// Potential of a node relative to its component's reference node.
    pub fn potential(&self, node: NodeId) -> Option<f64> {
        self.potentials.get(&node).copied()
    }

    /// All node potentials, ordered by node id.
    pub fn potentials(&self) -> &BTreeMap<NodeId, f64> {
        &self.potentials
    }
}

impl Index<EdgeId> for Solution {
    type Output = BranchCurrent;

    fn index(&self, id: EdgeId) -> &BranchCurrent {
        &self.branches[id.0]
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a BranchCurrent;
    type IntoIter = std::slice::Iter<'a, BranchCurrent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for branch in &self.branches {
            match f.precision() {
                Some(p) => writeln!(f, "{:.*}", p, branch)?,
                None => writeln!(f, "{}", branch)?,
            }
        }
        Ok(())
    }
}
