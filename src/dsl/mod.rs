//! Parser for the line-oriented edge list format.
//!
//! Each non-empty line describes one edge:
//!
//! ```text
//! <node1> <node2> <resistance> [emf]
//! ```
//!
//! Fields are separated by whitespace and/or punctuation (`--`, `->`, `,`,
//! `;`, `:`). A sign is only read where it does not touch a preceding
//! value, so `1-2` names two nodes. Node numbers start at 1. Values accept
//! SI suffixes (`4.7k`) and may be followed by a unit word (`V`, `Ohm`),
//! which is ignored. The EMF defaults to 0. `#` starts a comment.
//!
//! # Grammar Overview
//!
//! ```text
//! input     = { line }
//! line      = [ edge ] [ comment ] newline
//! edge      = node sep node sep value [ unit ] [ sep value [ unit ] ]
//! sep       = { '-' | '>' | ',' | ';' | ':' | whitespace }
//! node      = digit+
//! value     = ['-' | '+'] digit* ['.' digit+] [('e'|'E') ['-'|'+'] digit+] [suffix]
//! suffix    = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! unit      = "V" | "Ohm" | "Ω" | "R"
//! comment   = '#' { any_char }
//! ```
//!
//! # Example
//!
//! ```text
//! # Wheatstone-style bridge
//! 1 -- 2, 4;
//! 1 -- 3, 10;
//! 1 -- 4, 2; -12V
//! 2 -- 3, 60;
//! 2 -- 4, 22;
//! 3 -- 4, 5;
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::{to_edges, EdgeDef};
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use std::io::Read;

use crate::circuit::Edge;
use crate::error::{CircuitError, Result};

/// Parse an edge list string into raw definitions.
pub fn parse_defs(input: &str) -> Result<Vec<EdgeDef>> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse an edge list string into validated edges indexed by line order.
pub fn parse(input: &str) -> Result<Vec<Edge>> {
    to_edges(&parse_defs(input)?)
}

/// Read an entire stream and parse it.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<Edge>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| CircuitError::InputError { source })?;
    parse(&content)
}

/// Parse an edge list file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Vec<Edge>> {
    let content = std::fs::read_to_string(path).map_err(|e| CircuitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
