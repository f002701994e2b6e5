//! # quando
//!
//! quando is an interpreter for a small expression language where values
//! flow left to right through dot-chained method calls and branching is
//! written as `given`/`when`/`default` matching with an implicit subject
//! binding (`it`). Identifiers may contain `-` and end in `?` or `!`, so
//! names like `calculate-factorial` and `valid?` are ordinary methods.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::statement::parse_program, value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Records the desugared call form shared by dotted and plain calls.
pub mod ast;
/// Provides the error types for every phase.
///
/// This module defines the three non-overlapping error kinds (lexing,
/// parsing, and runtime) plus the umbrella [`error::Error`] hosts use.
/// Every error carries a human-readable message and, where applicable, a
/// source position.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the environment arena to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a source unit into a [`Program`].
///
/// Lexes and parses the given text without evaluating anything. The
/// returned program can be evaluated any number of times with
/// [`evaluate`].
///
/// # Errors
/// Returns an error if the text cannot be tokenized or parsed.
///
/// # Example
/// ```
/// use quando::parse;
///
/// let program = parse("method double(n) { n * 2 } 21.double").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse("method broken(").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    Ok(parse_program(&mut iter)?)
}

/// Evaluates a parsed program against a fresh global environment.
///
/// All top-level method definitions are bound before any expression runs,
/// so forward references and self-recursion resolve regardless of
/// definition order. `print` output is appended to `output`, one
/// newline-terminated rendering per call.
///
/// # Errors
/// Returns the first `RuntimeError` raised during evaluation.
///
/// # Returns
/// The values of the top-level expression statements, in order.
pub fn evaluate(program: &Program, output: &mut dyn io::Write) -> Result<Vec<Value>, Error> {
    let mut context = Context::new(output);
    Ok(context.run(program)?)
}

/// Parses and evaluates a source unit in one step.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Example
/// ```
/// use quando::{interpreter::value::Value, run};
///
/// let source = r#"
///     method calculate-factorial(n) {
///         given n {
///             when it < 2 => 1,
///             default => n * calculate-factorial(n - 1)
///         }
///     }
///
///     10.calculate-factorial.print
/// "#;
///
/// let mut output = Vec::new();
/// let values = run(source, &mut output).unwrap();
///
/// assert_eq!(values, vec![Value::Int(3_628_800)]);
/// assert_eq!(String::from_utf8(output).unwrap(), "3628800\n");
/// ```
pub fn run(source: &str, output: &mut dyn io::Write) -> Result<Vec<Value>, Error> {
    let program = parse(source)?;
    evaluate(&program, output)
}
