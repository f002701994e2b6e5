use std::rc::Rc;

use crate::{
    ast::{Expr, LiteralValue},
    interpreter::{env::ScopeId, evaluator::call::BuiltinDef},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a quando expression can produce. Values
/// are immutable once constructed; arithmetic and comparison produce new
/// values rather than mutating operands.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and required as the result of
    /// every `when` predicate.
    Bool(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absence of a value; produced by an empty method body.
    Nil,
    /// A user-defined method together with its captured environment.
    Method(Rc<MethodValue>),
    /// A built-in method such as `print`.
    Builtin(&'static BuiltinDef),
}

/// A user-defined method value: the parameter list and body from its
/// definition, plus a handle to the environment it was defined in. Free
/// names in the body resolve through that environment at call time.
#[derive(Debug)]
pub struct MethodValue {
    /// The method's name, kept for diagnostics and display.
    pub name:   String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// Body statements; the last one's value is the return value.
    pub body:   Vec<Expr>,
    /// The defining environment.
    pub env:    ScopeId,
}

impl Value {
    /// Names the value's kind for diagnostics.
    ///
    /// # Example
    /// ```
    /// use quando::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Int(3).kind_name(), "integer");
    /// assert_eq!(Value::Nil.kind_name(), "nil");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(..) => "integer",
            Self::Float(..) => "float",
            Self::Bool(..) => "boolean",
            Self::Str(..) => "string",
            Self::Nil => "nil",
            Self::Method(..) => "method",
            Self::Builtin(..) => "builtin method",
        }
    }
}

/// Structural equality across all value kinds.
///
/// Values of different kinds are never equal; in particular `Int` and
/// `Float` do not compare equal even when numerically close, since the
/// language performs no numeric coercion. Methods compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Method(a), Self::Method(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Int(n) => (*n).into(),
            LiteralValue::Float(r) => (*r).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Nil => write!(f, "nil"),
            Self::Method(m) => write!(f, "<method {}/{}>", m.name, m.params.len()),
            Self::Builtin(b) => write!(f, "<builtin {}>", b.name),
        }
    }
}
