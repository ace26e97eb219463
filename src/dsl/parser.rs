//! Parser for the edge list format.

use super::ast::EdgeDef;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{CircuitError, Result};

/// Unit words that may follow a value and are ignored.
const UNIT_WORDS: &[&str] = &["v", "ohm", "ohms", "ω", "r"];

/// Parser for edge lists.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire edge list.
    pub fn parse(&mut self) -> Result<Vec<EdgeDef>> {
        let mut edges = Vec::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            edges.push(self.parse_edge()?);

            // Consume newline or EOF
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
            }
        }

        Ok(edges)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// `<node1> <node2> <resistance> [emf]` up to the end of the line.
    fn parse_edge(&mut self) -> Result<EdgeDef> {
        let line = self.current.line;
        let mut values: Vec<Token> = Vec::with_capacity(4);

        while self.current.kind != TokenKind::Newline && self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Number => values.push(self.current.clone()),
                TokenKind::Identifier if !is_unit(&self.current.text) => {
                    return Err(CircuitError::parse(
                        line,
                        format!("unexpected word '{}'", self.current.text),
                    ));
                }
                _ => {}
            }
            self.advance()?;
        }

        if values.len() < 3 || values.len() > 4 {
            return Err(CircuitError::parse(
                line,
                format!(
                    "expected '<node1> <node2> <resistance> [emf]', got {} values",
                    values.len()
                ),
            ));
        }

        Ok(EdgeDef {
            node1: node_number(&values[0])?,
            node2: node_number(&values[1])?,
            resistance: value(&values[2])?,
            emf: values.get(3).map(value).transpose()?.unwrap_or(0.0),
            line,
        })
    }
}

fn is_unit(word: &str) -> bool {
    UNIT_WORDS.contains(&word.to_lowercase().as_str())
}

fn node_number(token: &Token) -> Result<usize> {
    token
        .text
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            CircuitError::parse(
                token.line,
                format!("invalid node number '{}' (nodes are numbered from 1)", token.text),
            )
        })
}

fn value(token: &Token) -> Result<f64> {
    parse_value(&token.text)
        .ok_or_else(|| CircuitError::parse(token.line, format!("invalid number: {}", token.text)))
}
