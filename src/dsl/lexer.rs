//! Lexer (tokenizer) for the edge list format.

use crate::error::{CircuitError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the edge list format.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A number (integer or floating point, possibly with SI suffix)
    Number,
    /// A word such as a unit name (`V`, `Ohm`)
    Identifier,
    /// A dash run between node numbers: `--`, `-`, `->`
    Link,
    /// Punctuation between fields: `,` `;` `:`
    Separator,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing edge list input.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
    /// Last consumed character
    prev: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            line: 1,
            column: 1,
            prev: None,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let (pos, ch) = match self.chars.peek().copied() {
            Some(next) => next,
            None => return Ok(self.token(TokenKind::Eof, String::new(), self.line, self.column)),
        };

        let start_line = self.line;
        let start_column = self.column;
        let following = self.input[pos + ch.len_utf8()..].chars().next();
        let starts_number = |c: Option<char>| matches!(c, Some('0'..='9' | '.'));
        // `1-2` is a link; a sign needs a gap or punctuation before it
        let glued = matches!(self.prev, Some(c) if c.is_alphanumeric() || c == '.');

        let (kind, text) = match ch {
            '\n' => {
                self.advance();
                (TokenKind::Newline, "\n".to_string())
            }
            '-' | '+' if starts_number(following) && !glued => (TokenKind::Number, self.read_number()),
            '0'..='9' => (TokenKind::Number, self.read_number()),
            '.' if starts_number(following) => (TokenKind::Number, self.read_number()),
            '-' => (TokenKind::Link, self.read_link()),
            ',' | ';' | ':' => {
                self.advance();
                (TokenKind::Separator, ch.to_string())
            }
            _ if ch.is_alphabetic() || ch == '_' => (TokenKind::Identifier, self.read_identifier()),
            _ => {
                return Err(CircuitError::lexer(
                    start_line,
                    start_column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(self.token(kind, text, start_line, start_column))
    }

    fn token(&self, kind: TokenKind, text: String, line: usize, column: usize) -> Token {
        Token {
            kind,
            text,
            line,
            column,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;
        self.prev = Some(ch);
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&(_, c)) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, text: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if !pred(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        self.read_while(&mut text, |ch| ch.is_alphanumeric() || ch == '_');
        text
    }

    fn read_link(&mut self) -> String {
        let mut text = String::new();
        self.read_while(&mut text, |ch| ch == '-');
        if let Some(&(_, '>')) = self.chars.peek() {
            text.push('>');
            self.advance();
        }
        text
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();

        // Optional sign
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == '-' || ch == '+' {
                text.push(ch);
                self.advance();
            }
        }

        // Integer part
        self.read_while(&mut text, |ch| ch.is_ascii_digit());

        // Decimal part
        if let Some(&(_, '.')) = self.chars.peek() {
            text.push('.');
            self.advance();
            self.read_while(&mut text, |ch| ch.is_ascii_digit());
        }

        // Exponent part, only when digits follow
        if let Some(&(pos, ch)) = self.chars.peek() {
            if ch == 'e' || ch == 'E' {
                let rest = &self.input[pos + 1..];
                let digits = rest.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(rest);
                if digits.starts_with(|c: char| c.is_ascii_digit()) {
                    text.push(ch);
                    self.advance();
                    if let Some(&(_, sign)) = self.chars.peek() {
                        if sign == '-' || sign == '+' {
                            text.push(sign);
                            self.advance();
                        }
                    }
                    self.read_while(&mut text, |ch| ch.is_ascii_digit());
                }
            }
        }

        // Unit suffix (p, n, u, m, k, M, G)
        if let Some(&(_, ch)) = self.chars.peek() {
            if matches!(ch, 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G') {
                text.push(ch);
                self.advance();
            }
        }

        text
    }
}

/// Parse a number string with optional unit suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => 1.0,
    };
    let num_str = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            out.push((tok.kind, tok.text));
        }
        out
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("4.7k"), Some(4_700.0)));
        assert!(approx_eq(parse_value("-12"), Some(-12.0)));
        assert!(approx_eq(parse_value("12m"), Some(0.012)));
        assert!(approx_eq(parse_value("1e-9"), Some(1e-9)));
        assert!(approx_eq(parse_value(""), None));
        assert!(approx_eq(parse_value("abc"), None));
    }

    #[test]
    fn test_lexer_edge_line() {
        use TokenKind::*;
        assert_eq!(
            kinds("1 -- 2, 4.0; -12V\n"),
            vec![
                (Number, "1".to_string()),
                (Link, "--".to_string()),
                (Number, "2".to_string()),
                (Separator, ",".to_string()),
                (Number, "4.0".to_string()),
                (Separator, ";".to_string()),
                (Number, "-12".to_string()),
                (Identifier, "V".to_string()),
                (Newline, "\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_lexer_glued_link_is_not_a_sign() {
        let tokens = kinds("1--2,3");
        assert_eq!(tokens[1], (TokenKind::Link, "--".to_string()));
        assert_eq!(tokens[2], (TokenKind::Number, "2".to_string()));
    }

    #[test]
    fn test_lexer_dash_after_value_is_a_link() {
        use TokenKind::*;
        assert_eq!(
            kinds("1-2,3;-4"),
            vec![
                (Number, "1".to_string()),
                (Link, "-".to_string()),
                (Number, "2".to_string()),
                (Separator, ",".to_string()),
                (Number, "3".to_string()),
                (Separator, ";".to_string()),
                (Number, "-4".to_string()),
            ]
        );
    }

    #[test]
    fn test_lexer_exponent_needs_digits() {
        let tokens = kinds("2e-3 5eV");
        assert_eq!(tokens[0].1, "2e-3");
        assert_eq!(tokens[1].1, "5");
        assert_eq!(tokens[2], (TokenKind::Identifier, "eV".to_string()));
    }

    #[test]
    fn test_lexer_comment_and_position() {
        let mut lexer = Lexer::new("# header\n  7");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
        let tok = lexer.next_token().unwrap();
        assert_eq!((tok.line, tok.column), (2, 3));
    }

    #[test]
    fn test_lexer_rejects_unknown_character() {
        let mut lexer = Lexer::new("1 -- 2 @");
        for _ in 0..3 {
            lexer.next_token().unwrap();
        }
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, CircuitError::LexerError { line: 1, column: 8, .. }));
    }
}
