//! Error types for the circuit solver.
//!
//! This module provides a unified error type [`CircuitError`] that covers
//! all error conditions that can occur during edge-list parsing, circuit
//! validation, and solving.

use thiserror::Error;

use crate::circuit::{EdgeId, NodeId};

/// Result type alias using [`CircuitError`].
pub type Result<T> = std::result::Result<T, CircuitError>;

/// Unified error type for all circuit operations.
#[derive(Error, Debug)]
pub enum CircuitError {
    // ============ Edge List Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// A syntactically valid line describes an invalid edge
    #[error("Invalid edge at line {line}: {source}")]
    InvalidEdge {
        line: usize,
        #[source]
        source: Box<CircuitError>,
    },

    // ============ Circuit Validation Errors ============
    /// Both ends of an edge are the same node
    #[error("Edge {edge} is a self-loop on node {node}")]
    SelfLoop { edge: EdgeId, node: NodeId },

    /// Resistance is negative, NaN or infinite
    #[error("Edge {edge} has invalid resistance {value}")]
    InvalidResistance { edge: EdgeId, value: f64 },

    /// EMF is NaN or infinite
    #[error("Edge {edge} has invalid EMF {value}")]
    InvalidEmf { edge: EdgeId, value: f64 },

    /// Node numbers in the edge list format start at 1
    #[error("Edge {edge} refers to node {number}; nodes are numbered from 1")]
    InvalidNode { edge: EdgeId, number: usize },

    /// Two edges share the same stable index
    #[error("Duplicate edge index {edge}")]
    DuplicateEdge { edge: EdgeId },

    /// A connected component was built without edges
    #[error("Connected component has no edges")]
    EmptyComponent,

    // ============ Solver Errors ============
    /// Matrix is not shaped as an augmented `N x (N+1)` system
    #[error("Matrix of size {rows}x{cols} is not an augmented linear system")]
    NotAugmented { rows: usize, cols: usize },

    /// Rows of different length passed to a matrix constructor
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Matrix is singular and cannot be solved
    #[error("Singular matrix - system has no unique solution")]
    SingularMatrix,

    /// One connected component of the circuit has no unique solution
    #[error(
        "Connected component {component} ({edges} edges) is singular - \
         check for zero-resistance loops with conflicting EMF"
    )]
    SingularComponent { component: usize, edges: usize },

    // ============ I/O Errors ============
    /// Error reading the edge file
    #[error("Failed to read edge file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading edges from a stream
    #[error("Failed to read input: {source}")]
    InputError {
        #[source]
        source: std::io::Error,
    },

    /// Error writing the solution
    #[error("Failed to write output: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },
}

impl CircuitError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Attach an input line number to an edge validation error
    pub fn at_line(self, line: usize) -> Self {
        Self::InvalidEdge {
            line,
            source: Box::new(self),
        }
    }

    /// Whether this error came from an ill-posed (singular) system.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            Self::SingularMatrix | Self::SingularComponent { .. }
        )
    }
}
