/// Core expression parsing.
///
/// Contains the expression entry point and the `given`/`when`/`default`
/// grammar, the only compound expression form the language has.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels for comparisons,
/// additive and multiplicative operators.
pub mod binary;

/// Unary, primary and postfix parsing.
///
/// Handles prefix negation, atomic expressions, and the postfix dotted-call
/// chains that desugar `a.f(b)` into ordinary calls.
pub mod unary;

/// Statement parsing.
///
/// Implements logic for parsing top-level statements: method definitions
/// and expression statements, plus method bodies.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists and identifier parsing,
/// shared by parameter lists and call arguments.
pub mod utils;
