use quando::{
    ast::{Expr, LiteralValue, Statement},
    error::{Error, LexError, ParseError},
    interpreter::lexer::{Token, tokenize},
    parse,
};

/// Lexes a snippet and returns its tokens without positions.
fn tokens_of(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}\n{src}"))
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

/// Parses a snippet that must consist of one expression statement.
fn only_expression(src: &str) -> Expr {
    let program = parse(src).unwrap_or_else(|e| panic!("Parsing failed: {e}\n{src}"));
    let mut statements = program.statements.into_iter();
    match (statements.next(), statements.next()) {
        (Some(Statement::Expression { expr, .. }), None) => expr,
        other => panic!("Expected a single expression statement, got {other:?}"),
    }
}

/// Destructures a call expression into its name and arguments.
fn call_parts(expr: Expr) -> (String, Vec<Expr>) {
    match expr {
        Expr::Call { name, arguments, .. } => (name, arguments),
        other => panic!("Expected a call, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Err(Error::Parse(e)) => e,
        Err(other) => panic!("Expected a parse error, got: {other}\n{src}"),
        Ok(program) => panic!("Expected a parse error, got {program:?}\n{src}"),
    }
}

#[test]
fn dashed_names_lex_as_single_identifiers() {
    assert_eq!(tokens_of("calculate-factorial"),
               vec![Token::Identifier("calculate-factorial".to_string())]);
    assert_eq!(tokens_of("red-black-tree?"),
               vec![Token::Identifier("red-black-tree?".to_string())]);
}

#[test]
fn minus_before_whitespace_or_digits_is_an_operator() {
    let expected = vec![Token::Identifier("n".to_string()), Token::Minus, Token::Int(1)];

    assert_eq!(tokens_of("n - 1"), expected);
    assert_eq!(tokens_of("n-1"), expected);
    assert_eq!(tokens_of("n- 1"), expected);
}

#[test]
fn question_and_bang_suffixes_belong_to_the_identifier() {
    assert_eq!(tokens_of("valid?"),
               vec![Token::Identifier("valid?".to_string())]);
    assert_eq!(tokens_of("valid!"),
               vec![Token::Identifier("valid!".to_string())]);
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(tokens_of("given when default it method"),
               vec![Token::Given, Token::When, Token::Default, Token::It, Token::Method]);
    // A longer name that merely starts with a keyword stays an identifier.
    assert_eq!(tokens_of("whenever"),
               vec![Token::Identifier("whenever".to_string())]);
}

#[test]
fn numeric_literals_accept_digit_separators() {
    assert_eq!(tokens_of("1_000_000"), vec![Token::Int(1_000_000)]);
    assert_eq!(tokens_of("1_000.5"), vec![Token::Float(1000.5)]);
}

#[test]
fn integer_dot_method_is_not_a_float() {
    assert_eq!(tokens_of("10.print"),
               vec![Token::Int(10), Token::Dot, Token::Identifier("print".to_string())]);
    assert_eq!(tokens_of("10.5.print"),
               vec![Token::Float(10.5), Token::Dot, Token::Identifier("print".to_string())]);
}

#[test]
fn comparison_operators_lex_greedily() {
    assert_eq!(tokens_of("< <= > >= == /= =>"),
               vec![Token::Less,
                    Token::LessEqual,
                    Token::Greater,
                    Token::GreaterEqual,
                    Token::EqualEqual,
                    Token::SlashEqual,
                    Token::FatArrow]);
}

#[test]
fn unterminated_strings_fail_to_lex() {
    assert!(matches!(tokenize(r#""abc"#), Err(LexError::UnterminatedString { .. })));
    assert!(matches!(tokenize("'abc\n'"), Err(LexError::UnterminatedString { .. })));
}

#[test]
fn invalid_characters_fail_to_lex() {
    assert!(matches!(tokenize("λ"), Err(LexError::InvalidCharacter { .. })));
}

#[test]
fn oversized_integer_literals_fail_to_lex() {
    assert!(matches!(tokenize("99999999999999999999999999"),
                     Err(LexError::LiteralTooLarge { .. })));
}

#[test]
fn stray_operators_are_rejected_by_the_parser() {
    // `=` lexes as a token the grammar never accepts, per the lexer
    // contract, so the error is a parse error with a position rather
    // than a lex failure.
    assert!(matches!(tokenize("x = 1").unwrap()[1].0, Token::Unknown('=')));
    assert!(matches!(parse_error("x = 1"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn dotted_call_desugars_to_plain_call() {
    let (dotted_name, dotted_args) = call_parts(only_expression("10.f"));
    let (plain_name, plain_args) = call_parts(only_expression("f(10)"));

    assert_eq!(dotted_name, plain_name);
    // Positions differ between the two spellings; the shapes must not.
    assert_eq!(dotted_args.len(), 1);
    assert_eq!(plain_args.len(), 1);
    assert!(matches!(dotted_args[0],
                     Expr::Literal { value: LiteralValue::Int(10), .. }));
    assert!(matches!(plain_args[0],
                     Expr::Literal { value: LiteralValue::Int(10), .. }));
}

#[test]
fn dotted_chains_nest_left_to_right() {
    // 10.f.g parses as Call("g", [Call("f", [10])]).
    let (outer_name, outer_args) = call_parts(only_expression("10.f.g"));
    assert_eq!(outer_name, "g");
    assert_eq!(outer_args.len(), 1);

    let (inner_name, inner_args) = call_parts(outer_args.into_iter().next().unwrap());
    assert_eq!(inner_name, "f");
    assert!(matches!(inner_args[..],
                     [Expr::Literal { value: LiteralValue::Int(10), .. }]));
}

#[test]
fn dotted_call_arguments_follow_the_receiver() {
    // a.f(b, c) parses as Call("f", [a, b, c]).
    let (name, args) = call_parts(only_expression("1.f(2, 3)"));
    assert_eq!(name, "f");
    assert!(matches!(args[..],
                     [Expr::Literal { value: LiteralValue::Int(1), .. },
                      Expr::Literal { value: LiteralValue::Int(2), .. },
                      Expr::Literal { value: LiteralValue::Int(3), .. }]));
}

#[test]
fn comparison_binds_looser_than_additive() {
    // 1 + 2 < 4 parses as (1 + 2) < 4.
    let expr = only_expression("1 + 2 < 4");
    match expr {
        Expr::BinaryOp { op, left, .. } => {
            assert_eq!(op, quando::ast::BinaryOperator::Less);
            assert!(matches!(*left, Expr::BinaryOp { op: quando::ast::BinaryOperator::Add, .. }));
        },
        other => panic!("Expected a comparison, got {other:?}"),
    }
}

#[test]
fn given_parses_clauses_in_order() {
    let expr = only_expression("given 1 { when it < 2 => 1, default => 2 }");
    match expr {
        Expr::Given { clauses, default, .. } => {
            assert_eq!(clauses.len(), 1);
            assert!(default.is_some());
        },
        other => panic!("Expected a given expression, got {other:?}"),
    }
}

#[test]
fn given_clause_commas_are_optional() {
    let expr = only_expression("given 1 { when it < 2 => 1 default => 2 }");
    assert!(matches!(expr, Expr::Given { .. }));

    let trailing = only_expression("given 1 { when it < 2 => 1, default => 2, }");
    assert!(matches!(trailing, Expr::Given { .. }));
}

#[test]
fn duplicate_default_is_a_parse_error() {
    assert!(matches!(parse_error("given 1 { default => 1, default => 2 }"),
                     ParseError::DuplicateDefault { .. }));
}

#[test]
fn unterminated_blocks_are_parse_errors() {
    assert!(matches!(parse_error("given 1 { when it < 2 => 1"),
                     ParseError::UnterminatedBlock { .. }));
    assert!(matches!(parse_error("method f(n) { n"),
                     ParseError::UnterminatedBlock { .. }));
}

#[test]
fn missing_parameter_list_is_a_parse_error() {
    assert!(matches!(parse_error("method f { 1 }"),
                     ParseError::MissingParameterList { .. }));
}

#[test]
fn given_is_not_an_operand() {
    // Per the precedence rules a given expression sits below comparisons,
    // so using one as a bare operand requires parentheses.
    assert!(matches!(parse_error("1 + given 2 { default => 3 }"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn error_positions_point_at_the_offending_token() {
    match parse_error("given 1 {\n    nonsense => 2\n}") {
        ParseError::UnexpectedToken { pos, .. } => {
            assert_eq!(pos.line, 2);
            assert_eq!(pos.column, 5);
        },
        other => panic!("Expected an unexpected-token error, got {other:?}"),
    }
}
