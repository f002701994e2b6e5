use crate::interpreter::lexer::Position;

#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A string literal was never closed before the end of its line or the
    /// end of input.
    UnterminatedString {
        /// The source position of the opening quote.
        pos: Position,
    },
    /// Found a character no token can start with.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source position where it occurred.
        pos:       Position,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The source position of the literal.
        pos: Position,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { pos } => write!(f,
                                                       "Error at {pos}: Unterminated string. Add a closing quote on the same line."),

            Self::InvalidCharacter { character, pos } => {
                write!(f, "Error at {pos}: Invalid character '{character}'.")
            },

            Self::LiteralTooLarge { pos } => {
                write!(f, "Error at {pos}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
