/// The environment module stores the scope chain.
///
/// Scopes live in an arena and refer to their parents by handle, so the
/// global scope and the method values it holds can reference each other
/// without ownership cycles. Name lookup walks child-to-parent and
/// returns the first binding found.
///
/// # Responsibilities
/// - Owns every scope created during one evaluation.
/// - Resolves names through the lexical parent chain.
/// - Reclaims call-local scopes when a call returns.
pub mod env;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic and comparison, dispatches calls, runs `given` matching, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Binds top-level methods before evaluation so forward references and
///   self-recursion resolve.
/// - Reports runtime errors such as unbound names or kind mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source
///   positions.
/// - Handles numeric and string literals, punctuation-extended
///   identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// program. Dotted method calls are desugared here, so the rest of the
/// pipeline sees a single call form.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with source
///   positions.
/// - Desugars `receiver.name(args)` into `name(receiver, args)`.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// integers, floats, booleans, strings, nil, and methods (user-defined and
/// builtin). Values are immutable once constructed.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements structural equality and display rendering.
/// - Names value kinds for diagnostics.
pub mod value;
