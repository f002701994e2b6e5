use crate::interpreter::lexer::Position;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a name with no binding in scope. Also raised when `it`
    /// is referenced outside a `when` clause.
    UnboundName {
        /// The name that failed to resolve.
        name: String,
        /// The source position of the reference.
        pos:  Position,
    },
    /// Called a name that is bound to a non-method value.
    NotCallable {
        /// The name that was called.
        name: String,
        /// The source position of the call.
        pos:  Position,
    },
    /// The wrong number of arguments was supplied to a method.
    ArityMismatch {
        /// The name of the called method.
        name:     String,
        /// The number of parameters the method declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source position of the call.
        pos:      Position,
    },
    /// An operation was applied to values of incompatible kinds.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source position of the operation.
        pos:     Position,
    },
    /// A `given` expression had no matching `when` clause and no `default`.
    NoMatchingClause {
        /// The source position of the `given` keyword.
        pos: Position,
    },
    /// Method calls recursed past the interpreter's depth budget.
    StackOverflow {
        /// The source position of the call that exceeded the budget.
        pos: Position,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source position of the division.
        pos: Position,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source position of the operation.
        pos: Position,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundName { name, pos } => {
                write!(f, "Error at {pos}: Unbound name '{name}'.")
            },

            Self::NotCallable { name, pos } => {
                write!(f, "Error at {pos}: '{name}' is not a method and cannot be called.")
            },

            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  pos, } => write!(f,
                                                   "Error at {pos}: Method '{name}' takes {expected} argument(s), but {found} were supplied."),

            Self::TypeMismatch { details, pos } => {
                write!(f, "Error at {pos}: Type mismatch: {details}.")
            },

            Self::NoMatchingClause { pos } => write!(f,
                                                     "Error at {pos}: No 'when' clause matched and no 'default' clause is present."),

            Self::StackOverflow { pos } => {
                write!(f, "Error at {pos}: Call depth limit exceeded.")
            },

            Self::DivisionByZero { pos } => write!(f, "Error at {pos}: Division by zero."),

            Self::Overflow { pos } => write!(f,
                                             "Error at {pos}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
