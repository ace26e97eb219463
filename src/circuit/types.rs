//! Core types for circuit representation.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;

use super::validate::validate_edge;

/// A node identifier as used inside the solver.
///
/// Identifiers are 0-based internally; [`Display`](fmt::Display) prints them
/// 1-based, matching the numbering of the edge list format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Build a node id from its 1-based external number.
    /// Returns `None` for 0.
    pub fn from_external(number: usize) -> Option<Self> {
        number.checked_sub(1).map(NodeId)
    }

    /// The 1-based number of this node in the edge list format.
    pub fn external(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.external())
    }
}

/// The stable position of an edge in the original input.
///
/// Used to restore the global ordering after component decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0 + 1)
    }
}

/// One resistive branch with an optional EMF source.
///
/// Positive current flows from `node1` to `node2`. The EMF drives current in
/// the same direction, so that `resistance * current = emf + φ(node1) - φ(node2)`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub id: EdgeId,
    pub node1: NodeId,
    pub node2: NodeId,
    pub resistance: f64,
    pub emf: f64,
}

impl Edge {
    /// Create a validated edge.
    ///
    /// Fails on self-loops, negative or non-finite resistance, and
    /// non-finite EMF.
    pub fn new(id: EdgeId, node1: NodeId, node2: NodeId, resistance: f64, emf: f64) -> Result<Self> {
        let edge = Self {
            id,
            node1,
            node2,
            resistance,
            emf,
        };
        validate_edge(&edge)?;
        Ok(edge)
    }

    /// Create an edge without EMF.
    pub fn resistor(id: EdgeId, node1: NodeId, node2: NodeId, resistance: f64) -> Result<Self> {
        Self::new(id, node1, node2, resistance, 0.0)
    }

    /// The node at the other end of the edge, if `node` is one of its ends.
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.node1 {
            Some(self.node2)
        } else if node == self.node2 {
            Some(self.node1)
        } else {
            None
        }
    }

    /// Direction of this edge relative to `node`.
    pub fn connection(&self, node: NodeId) -> Connection {
        if node == self.node1 {
            Connection::FlowOut
        } else if node == self.node2 {
            Connection::FlowIn
        } else {
            Connection::NotConnected
        }
    }
}

// Identity always includes the stable index so that parallel edges between
// the same pair of nodes stay distinct. Values compare bitwise to keep `Eq`
// reflexive for any field contents.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.node1 == other.node1
            && self.node2 == other.node2
            && self.resistance.to_bits() == other.resistance.to_bits()
            && self.emf.to_bits() == other.emf.to_bits()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.node1.hash(state);
        self.node2.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.node1, self.node2)
    }
}

/// How an edge touches a node in the incidence matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connection {
    /// Current leaves the node through this edge (the edge's `node1`)
    FlowOut,
    /// Current enters the node through this edge (the edge's `node2`)
    FlowIn,
    /// The edge does not touch the node
    #[default]
    NotConnected,
}

impl Connection {
    /// The signed KCL coefficient: -1, +1 or 0.
    pub fn sign(&self) -> i8 {
        match self {
            Connection::FlowOut => -1,
            Connection::FlowIn => 1,
            Connection::NotConnected => 0,
        }
    }

    /// The coefficient as a float for equation assembly.
    pub fn value<T: num_traits::Float>(&self) -> T {
        match self {
            Connection::FlowOut => -T::one(),
            Connection::FlowIn => T::one(),
            Connection::NotConnected => T::zero(),
        }
    }
}
