#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Lexical errors carry the 1-based byte position of the offending input;
/// syntax errors carry the kind name of the offending token.
pub enum ParseError {
    /// A `.` or digit failed to form a valid numeric literal.
    IllegalNumber {
        /// The 1-based byte position where the literal starts.
        position: usize,
    },
    /// A symbol name exceeded the maximum length.
    SymbolTooLong {
        /// The 1-based byte position where the name starts.
        position: usize,
    },
    /// Found a character the tokenizer does not recognize.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// The 1-based byte position of the character.
        position:  usize,
    },
    /// Found an unexpected token while parsing a primary expression.
    UnexpectedToken {
        /// The kind name of the token encountered.
        token: String,
    },
    /// Found extra tokens after a complete expression.
    TrailingToken {
        /// The kind name of the first extra token.
        token: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalNumber { position } => {
                write!(f, "Position {position}: Illegal numeric value")
            },

            Self::SymbolTooLong { position } => write!(f,
                                                       "Position {position}: Symbol length exceeds maximum of 31 characters"),

            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Position {position}: unexpected character {character}")
            },

            Self::UnexpectedToken { token } => write!(f, "Unexpected token {token}"),

            Self::TrailingToken { token } => write!(f, "Syntax error on token {token}"),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}
