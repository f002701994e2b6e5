use crate::interpreter::lexer::Position;

#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered and what was expected.
        token: String,
        /// The source position where the error occurred.
        pos:   Position,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source position of the last consumed token.
        pos: Position,
    },
    /// A brace-delimited block was never closed.
    UnterminatedBlock {
        /// The source position where the block started.
        pos: Position,
    },
    /// A method definition is missing its parenthesized parameter list.
    MissingParameterList {
        /// The name of the method being defined.
        name: String,
        /// The source position of the method name.
        pos:  Position,
    },
    /// A `given` block contains more than one `default` clause.
    DuplicateDefault {
        /// The source position of the second `default`.
        pos: Position,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at {pos}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { pos } => {
                write!(f, "Error at {pos}: Unexpected end of input.")
            },

            Self::UnterminatedBlock { pos } => write!(f,
                                                      "Error at {pos}: Block is never closed. Add a matching '}}'."),

            Self::MissingParameterList { name, pos } => write!(f,
                                                               "Error at {pos}: Method '{name}' is missing its parameter list. Example: method {name}(x) {{ x }}"),

            Self::DuplicateDefault { pos } => write!(f,
                                                     "Error at {pos}: A 'given' block may contain only one 'default' clause."),
        }
    }
}

impl std::error::Error for ParseError {}
