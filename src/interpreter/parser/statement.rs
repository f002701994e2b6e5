use std::iter::Peekable;

use crate::{
    ast::{Expr, MethodDef, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a whole program from the token stream.
///
/// A program is a sequence of top-level statements, method definitions
/// and expression statements, in source order. Semicolons between
/// statements are accepted and ignored; they are never required, since a
/// statement ends wherever the expression grammar can no longer extend it.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed [`Program`], or the first `ParseError` encountered.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut statements = Vec::new();

    loop {
        while let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(Program { statements })
}

/// Parses a single top-level statement.
///
/// A statement is either:
/// - a method definition, recognized by the `method` keyword, or
/// - an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    if let Some((Token::Method, _)) = tokens.peek() {
        return Ok(Statement::Method(parse_method_definition(tokens)?));
    }

    let pos = tokens.peek().map_or_else(Position::default, |(_, pos)| *pos);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, pos })
}

/// Parses a method definition.
///
/// Syntax:
/// ```text
///     method <name>(<param>, ...) {
///         <statement>
///         ...
///     }
/// ```
/// The body is a sequence of expression statements; its last statement's
/// value is the method's return value, and an empty body returns nil.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `method` keyword.
///
/// # Returns
/// The parsed [`MethodDef`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - the method name is missing,
/// - the parameter list is missing (`MissingParameterList`),
/// - the body brace is missing or never closed,
/// - a body expression fails to parse.
fn parse_method_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<MethodDef>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let method_pos = match tokens.next() {
        Some((Token::Method, pos)) => *pos,
        Some((tok, pos)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected 'method', found {tok:?}"),
                                                     pos:   *pos, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { pos: Position::default() }),
    };

    let (name, name_pos) = match tokens.next() {
        Some((Token::Identifier(n), pos)) => (n.clone(), *pos),
        Some((tok, pos)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected a method name after 'method', found {tok:?}"),
                                                     pos:   *pos, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { pos: method_pos }),
    };

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some(_) | None => {
            return Err(ParseError::MissingParameterList { name,
                                                          pos: name_pos });
        },
    }

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let brace_pos = match tokens.next() {
        Some((Token::LBrace, pos)) => *pos,
        Some((tok, pos)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '{{' to open the body of '{name}', found {tok:?}"),
                                                     pos:   *pos, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { pos: name_pos }),
    };

    let body = parse_body(tokens, brace_pos)?;

    Ok(MethodDef { name,
                   params,
                   body,
                   pos: method_pos })
}

/// Parses the statements of a method body up to the closing brace.
fn parse_body<'a, I>(tokens: &mut Peekable<I>, open_pos: Position) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut body = Vec::new();

    loop {
        while let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => body.push(parse_expression(tokens)?),
            None => return Err(ParseError::UnterminatedBlock { pos: open_pos }),
        }
    }

    Ok(body)
}
