use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation), which is
/// right-associative: `--x` parses as `-(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any dotted-call chain via
/// `parse_postfix`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression possibly followed by
/// dotted calls.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    if let Some((Token::Minus, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           pos })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, float, boolean and string literals
/// - the implicit subject `it`
/// - identifiers and calls with explicit arguments
/// - parenthesized expressions
///
/// This function does not handle unary operators or dotted-call chains.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "it"
///              | identifier
///              | identifier "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { pos: Position::default() })?;

    match peeked {
        (Token::Int(..) | Token::Float(..) | Token::Bool(..) | Token::Str(..), _) => {
            parse_literal(tokens)
        },
        (Token::It, _) => parse_implicit_subject(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens),
        (tok, pos) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                        pos:   *pos, }),
    }
}

/// Parses dotted-call chains applied to an expression.
///
/// This function is called after parsing a primary expression and folds
/// any number of left-associative dotted calls into plain [`Expr::Call`]
/// nodes, inserting the receiver as the first argument:
///
/// - `x.f` becomes `Call("f", [x])`
/// - `x.f(y, z)` becomes `Call("f", [x, y, z])`
/// - `a.b.c` becomes `Call("c", [Call("b", [a])])`
///
/// Dispatch therefore has no notion of a receiver type; `f` is resolved
/// as a name in scope at call time.
///
/// Grammar:
/// ```text
///     postfix := primary ("." identifier ("(" arguments ")")?)*
/// ```
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `node`: The expression the chain starts from.
///
/// # Returns
/// An updated [`Expr`] with all dotted calls folded in.
///
/// # Errors
/// Returns a `ParseError` if a `.` is not followed by a method name or an
/// argument list is malformed.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    while let Some((Token::Dot, _)) = tokens.peek() {
        tokens.next();

        let (name, pos) = match tokens.next() {
            Some((Token::Identifier(n), pos)) => (n.clone(), *pos),
            Some((tok, pos)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected a method name after '.', found {tok:?}"),
                                                         pos:   *pos, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { pos: node.position() }),
        };

        let mut arguments = vec![node];
        if let Some((Token::LParen, _)) = tokens.peek() {
            tokens.next();
            arguments.extend(parse_comma_separated(tokens, parse_expression, &Token::RParen)?);
        }

        node = Expr::Call { name, arguments, pos };
    }

    Ok(node)
}

/// Parses a literal token into a literal expression.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Int(n), pos)) => Ok(Expr::Literal { value: LiteralValue::Int(*n),
                                                         pos:   *pos, }),
        Some((Token::Float(r), pos)) => Ok(Expr::Literal { value: LiteralValue::Float(*r),
                                                           pos:   *pos, }),
        Some((Token::Bool(b), pos)) => Ok(Expr::Literal { value: LiteralValue::Bool(*b),
                                                          pos:   *pos, }),
        Some((Token::Str(s), pos)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                         pos:   *pos, }),
        _ => unreachable!(),
    }
}

/// Parses the implicit subject keyword `it`.
///
/// Whether an `it` reference is actually legal is a scoping question the
/// evaluator answers; the parser accepts it anywhere an expression may
/// appear.
fn parse_implicit_subject<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (_, pos) = *tokens.next().unwrap();
    Ok(Expr::ImplicitSubject { pos })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The inner expression is returned as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (_, pos) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, pos)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected ')' to close the group, found {tok:?}"),
                                              pos:   *pos, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { pos }),
    }
}

/// Parses an identifier or a call with explicit arguments.
///
/// Supported forms:
///
/// - `identifier`
/// - `identifier(arg1, arg2, ...)`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Identifier`] otherwise.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (name, pos) = match tokens.next() {
        Some((Token::Identifier(n), pos)) => (n.clone(), *pos),
        Some((tok, pos)) => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     pos:   *pos, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { pos: Position::default() }),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::Call { name, arguments, pos })
        },
        _ => Ok(Expr::Identifier { name, pos }),
    }
}
