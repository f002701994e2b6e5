/// Lexing errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens: unterminated strings, characters no token can start with, and
/// numeric literals that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST from the
/// token stream: unexpected tokens, unterminated blocks, malformed method
/// definitions, and duplicate `default` clauses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// names, bad calls, kind mismatches, unmatched `given` expressions, and
/// arithmetic failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Umbrella error for hosts driving the whole pipeline.
///
/// The three phase errors stay distinct types; this enum only exists so
/// `parse`, `evaluate` and `run` compose with one `?`-able error.
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream could not be parsed into a program.
    Parse(ParseError),
    /// The program failed during evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
