/// Core evaluation logic.
///
/// Defines the evaluation `Context`, the expression dispatcher, and the
/// two-pass top-level program runner.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic and comparison over runtime values with strict
/// kind matching.
pub mod binary;

/// Call evaluation.
///
/// Resolves callee names, checks arity, runs user-defined method bodies in
/// fresh scopes, and hosts the builtin method table (`print`).
pub mod call;

/// `given` expression evaluation.
///
/// Implements ordered guarded-clause matching with the short-lived `it`
/// binding.
pub mod given;
