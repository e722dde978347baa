use logos::Logos;

use crate::error::ParseError;

/// Maximum length of a symbol name, in bytes.
pub const SYMBOL_MAX_LEN: usize = 31;

/// Why the lexer rejected a piece of input.
///
/// Attached to the [`Token`] state machine as its error type; the
/// [`tokenize`] wrapper turns it into a positional [`ParseError`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character no rule matches.
    #[default]
    UnexpectedCharacter,
    /// A `.` or digit that does not begin a valid numeric literal.
    IllegalNumber,
    /// A symbol name longer than [`SYMBOL_MAX_LEN`] bytes.
    SymbolTooLong,
}

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the calculator.
///
/// The `Display` implementation renders the kind name used in syntax error
/// messages (`VALUE`, `SYMBOL`, `PLUS`, ..., `(end)`).
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_value)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_value)]
    Value(f64),
    /// Symbol tokens; variable names such as `x` or `rate`, at most
    /// [`SYMBOL_MAX_LEN`] bytes long.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", parse_symbol)]
    Symbol(String),
    /// `=`
    #[token("=")]
    Equal,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `^`
    #[token("^")]
    Power,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// End-of-input marker, appended once by [`tokenize`]; the lexer itself
    /// never produces it.
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Value(_) => "VALUE",
            Self::Symbol(_) => "SYMBOL",
            Self::Equal => "EQUAL",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Power => "POWER",
            Self::OpenParen => "OPEN_PAREN",
            Self::CloseParen => "CLOSE_PAREN",
            Self::End => "(end)",
        };
        write!(f, "{kind}")
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value if the slice is a valid literal.
/// - `Err(LexErrorKind::IllegalNumber)`: If the slice does not parse.
fn parse_value(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IllegalNumber)
}

/// Parses a symbol name from the current token slice, enforcing the length
/// bound.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(String)`: The name if it is at most [`SYMBOL_MAX_LEN`] bytes.
/// - `Err(LexErrorKind::SymbolTooLong)`: Otherwise.
fn parse_symbol(lex: &logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    if slice.len() > SYMBOL_MAX_LEN {
        return Err(LexErrorKind::SymbolTooLong);
    }
    Ok(slice.to_owned())
}

/// Tokenizes one input line.
///
/// Scans left to right, skipping whitespace, and produces the token
/// sequence terminated by exactly one [`Token::End`]. On a lexical error
/// the partial sequence is discarded and the error cites the 1-based byte
/// position of the offending input.
///
/// An empty (or all-whitespace) line yields a sequence containing only the
/// end marker; the caller treats that as a no-op, not an error.
///
/// # Errors
/// Returns a [`ParseError`] for a malformed numeric literal, an oversized
/// symbol name, or an unrecognized character.
///
/// # Examples
/// ```
/// use exprwhizz::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x + 1").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Symbol("x".to_owned()),
///                 Token::Plus,
///                 Token::Value(1.0),
///                 Token::End]);
///
/// let err = tokenize("2 ? 2").unwrap_err();
/// assert_eq!(err.to_string(), "Position 3: unexpected character ?");
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => tokens.push(token),
            Err(kind) => {
                let position = lexer.span().start + 1;
                return Err(match kind {
                    LexErrorKind::IllegalNumber => ParseError::IllegalNumber { position },
                    LexErrorKind::SymbolTooLong => ParseError::SymbolTooLong { position },
                    LexErrorKind::UnexpectedCharacter => {
                        let character = lexer.slice().chars().next().unwrap_or('\0');
                        // A stray '.' starts a numeric literal that never
                        // materializes; report it the way a malformed
                        // number is reported.
                        if character == '.' {
                            ParseError::IllegalNumber { position }
                        } else {
                            ParseError::UnexpectedCharacter { character, position }
                        }
                    },
                });
            },
        }
    }

    tokens.push(Token::End);
    Ok(tokens)
}
