use quando::{
    error::{Error, RuntimeError},
    interpreter::value::Value,
    run,
};

/// Runs a script and returns its top-level values plus everything printed.
fn run_script(src: &str) -> (Vec<Value>, String) {
    let mut output = Vec::new();
    let values = run(src, &mut output).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"));
    (values, String::from_utf8(output).expect("print output is valid UTF-8"))
}

/// Runs a script and returns the value of its last top-level expression.
fn last_value(src: &str) -> Value {
    let (values, _) = run_script(src);
    values.last()
          .cloned()
          .unwrap_or_else(|| panic!("Script produced no value:\n{src}"))
}

/// Runs a script and returns everything it printed.
fn output_of(src: &str) -> String {
    run_script(src).1
}

/// Runs a script that is expected to fail and returns the error.
fn run_error(src: &str) -> Error {
    let mut output = Vec::new();
    match run(src, &mut output) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

#[test]
fn integer_literals() {
    assert_eq!(last_value("42"), Value::Int(42));
    assert_eq!(last_value("0"), Value::Int(0));
    assert_eq!(last_value("-7"), Value::Int(-7));
    assert_eq!(last_value("1_000_000"), Value::Int(1_000_000));
}

#[test]
fn float_string_and_bool_literals() {
    assert_eq!(last_value("3.5"), Value::Float(3.5));
    assert_eq!(last_value("1_000.25"), Value::Float(1000.25));
    assert_eq!(last_value(r#""hello""#), Value::from("hello"));
    assert_eq!(last_value("'hello'"), Value::from("hello"));
    assert_eq!(last_value("true"), Value::Bool(true));
    assert_eq!(last_value("false"), Value::Bool(false));
}

#[test]
fn string_escapes() {
    assert_eq!(output_of(r#""a\nb".print"#), "a\nb\n");
    assert_eq!(last_value(r#""say \"hi\"""#), Value::from("say \"hi\""));
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(last_value("1 + 2 * 3"), Value::Int(7));
    assert_eq!(last_value("(1 + 2) * 3"), Value::Int(9));
    assert_eq!(last_value("10 / 2"), Value::Int(5));
    assert_eq!(last_value("7 - 9"), Value::Int(-2));
    assert_eq!(last_value("1.5 + 2.25"), Value::Float(3.75));
    assert_eq!(last_value("2.0 * 3.5"), Value::Float(7.0));
}

#[test]
fn comparisons() {
    assert_eq!(last_value("2 < 3"), Value::Bool(true));
    assert_eq!(last_value("3 > 2"), Value::Bool(true));
    assert_eq!(last_value("2 <= 2"), Value::Bool(true));
    assert_eq!(last_value("2 >= 3"), Value::Bool(false));
    assert_eq!(last_value("2 == 2"), Value::Bool(true));
    assert_eq!(last_value("2 /= 3"), Value::Bool(true));
    assert_eq!(last_value("1.5 < 2.5"), Value::Bool(true));
}

#[test]
fn structural_equality_across_kinds() {
    assert_eq!(last_value(r#""a" == "a""#), Value::Bool(true));
    assert_eq!(last_value(r#"'a' == "a""#), Value::Bool(true));
    assert_eq!(last_value(r#""a" /= "a""#), Value::Bool(false));
    // No numeric coercion: an integer is never equal to a float.
    assert_eq!(last_value("1 == 1.0"), Value::Bool(false));
    assert_eq!(last_value("true == 1"), Value::Bool(false));
}

#[test]
fn method_definition_and_call() {
    assert_eq!(last_value("method double(n) { n * 2 } double(21)"),
               Value::Int(42));
    assert_eq!(last_value("method add(a, b) { a + b } add(2, 5)"),
               Value::Int(7));
    assert_eq!(last_value("method constant?() { true } constant?()"),
               Value::Bool(true));
}

#[test]
fn empty_body_returns_nil() {
    assert_eq!(last_value("method nothing() { } nothing()"), Value::Nil);
}

#[test]
fn body_returns_last_statement_value() {
    assert_eq!(last_value("method f(n) { n + 1; n + 2; n + 3 } f(0)"),
               Value::Int(3));
}

#[test]
fn dotted_calls_desugar_to_plain_calls() {
    assert_eq!(last_value("method double(n) { n * 2 } 10.double"),
               Value::Int(20));
    assert_eq!(last_value("method double(n) { n * 2 } 10.double.double"),
               Value::Int(40));
    assert_eq!(last_value("method add(a, b) { a + b } 1.add(2)"),
               Value::Int(3));
    assert_eq!(last_value("method add(a, b) { a + b } 10.add(5).add(1)"),
               Value::Int(16));
}

#[test]
fn given_returns_first_matching_clause() {
    let classify = "method classify(n) {
                        given n {
                            when it < 2 => 1,
                            default => n * 2
                        }
                    }";

    assert_eq!(last_value(&format!("{classify} classify(1)")), Value::Int(1));
    assert_eq!(last_value(&format!("{classify} classify(5)")), Value::Int(10));
}

#[test]
fn given_clauses_are_tried_in_source_order() {
    let src = "given 1 {
                   when it < 10 => 'small',
                   when it < 2 => 'tiny',
                   default => 'large'
               }";
    assert_eq!(last_value(src), Value::from("small"));
}

#[test]
fn given_subject_is_evaluated_once() {
    let src = "given 1.print {
                   when it == 2 => 'two',
                   when it == 1 => 'one',
                   default => 'other'
               }";
    let (values, printed) = run_script(src);
    assert_eq!(values, vec![Value::from("one")]);
    assert_eq!(printed, "1\n");
}

#[test]
fn given_result_sees_the_subject_binding() {
    assert_eq!(last_value("given 21 { when it > 0 => it * 2 }"),
               Value::Int(42));
}

#[test]
fn given_without_default_and_no_match_fails() {
    let error = run_error("given 5 { when it < 2 => 1 }");
    assert!(matches!(error, Error::Runtime(RuntimeError::NoMatchingClause { .. })),
            "unexpected error: {error}");
}

#[test]
fn given_predicate_must_be_boolean() {
    let error = run_error("given 1 { when it + 1 => 2 }");
    assert!(matches!(error, Error::Runtime(RuntimeError::TypeMismatch { .. })),
            "unexpected error: {error}");
}

#[test]
fn it_is_unbound_outside_when_clauses() {
    let error = run_error("it");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnboundName { ref name, .. }) if name == "it"),
            "unexpected error: {error}");

    // The binding does not leak out of the given expression.
    let error = run_error("given 1 { when it == 1 => 1 } it");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnboundName { ref name, .. }) if name == "it"),
            "unexpected error: {error}");

    // Nor into the default clause.
    let error = run_error("given 1 { when it == 2 => 2, default => it }");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnboundName { ref name, .. }) if name == "it"),
            "unexpected error: {error}");
}

#[test]
fn canonical_factorial_example() {
    let src = "method calculate-factorial(n) {
                   given n {
                       when it < 2 => 1,
                       default => n * calculate-factorial(n - 1)
                   }
               }

               10.calculate-factorial.print";

    let (values, printed) = run_script(src);
    assert_eq!(values, vec![Value::Int(3_628_800)]);
    assert_eq!(printed, "3628800\n");
}

#[test]
fn print_returns_its_argument() {
    let (values, printed) = run_script("1.print + 2");
    assert_eq!(values, vec![Value::Int(3)]);
    assert_eq!(printed, "1\n");
}

#[test]
fn side_effects_happen_left_to_right() {
    assert_eq!(output_of("print(1) + print(2)"), "1\n2\n");
    assert_eq!(output_of("method first(a, b) { a } first(1.print, 2.print)"),
               "1\n2\n");
}

#[test]
fn print_renders_every_value_kind() {
    assert_eq!(output_of("'text'.print"), "text\n");
    assert_eq!(output_of("true.print"), "true\n");
    assert_eq!(output_of("2.5.print"), "2.5\n");
    assert_eq!(output_of("method nothing() { } nothing().print"), "nil\n");
}

#[test]
fn methods_may_shadow_builtins() {
    let (values, printed) = run_script("method print(x) { 42 } 1.print");
    assert_eq!(values, vec![Value::Int(42)]);
    assert_eq!(printed, "");
}

#[test]
fn forward_references_resolve() {
    assert_eq!(last_value("method a(n) { b(n) } method b(n) { n + 1 } a(1)"),
               Value::Int(2));
}

#[test]
fn parameters_shadow_globals_without_leaking() {
    let src = "method double(n) { n * 2 }
               method trick(double) { double + 1 }
               trick(10); 3.double";
    let (values, _) = run_script(src);
    assert_eq!(values, vec![Value::Int(11), Value::Int(6)]);
}

#[test]
fn punctuation_identifiers_work_end_to_end() {
    assert_eq!(last_value("method valid?(n) { n == 0 } 0.valid?"),
               Value::Bool(true));
    assert_eq!(output_of("method shout!(s) { s.print } 'hey'.shout!"),
               "hey\n");
}

#[test]
fn comments_and_semicolons_are_ignored() {
    assert_eq!(last_value("# a comment\n1 + 1 # trailing"), Value::Int(2));

    let (values, _) = run_script("1; 2; 3");
    assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn arity_mismatch_is_reported() {
    let error = run_error("method one(n) { n } one(1, 2)");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArityMismatch { expected: 1, found: 2, .. })),
            "unexpected error: {error}");

    let error = run_error("print(1, 2)");
    assert!(matches!(error, Error::Runtime(RuntimeError::ArityMismatch { .. })),
            "unexpected error: {error}");
}

#[test]
fn type_mismatches_are_reported() {
    for src in ["1 + \"a\"", "1 + 1.0", "1 < 1.0", "\"a\" < \"b\"", "-'x'", "true + true"] {
        let error = run_error(src);
        assert!(matches!(error, Error::Runtime(RuntimeError::TypeMismatch { .. })),
                "{src}: unexpected error: {error}");
    }
}

#[test]
fn unbound_names_are_reported() {
    let error = run_error("missing-method(1)");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnboundName { .. })),
            "unexpected error: {error}");

    let error = run_error("missing-name");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnboundName { .. })),
            "unexpected error: {error}");
}

#[test]
fn calling_a_non_method_is_reported() {
    let error = run_error("method f(n) { n(1) } f(2)");
    assert!(matches!(error, Error::Runtime(RuntimeError::NotCallable { ref name, .. }) if name == "n"),
            "unexpected error: {error}");
}

#[test]
fn unbounded_recursion_is_cut_off() {
    let error = run_error("method loop-forever(n) { loop-forever(n) } loop-forever(0)");
    assert!(matches!(error, Error::Runtime(RuntimeError::StackOverflow { .. })),
            "unexpected error: {error}");
}

#[test]
fn integer_overflow_is_reported() {
    let error = run_error("9223372036854775807 + 1");
    assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { .. })),
            "unexpected error: {error}");
}

#[test]
fn division_by_zero_is_reported() {
    for src in ["1 / 0", "1.0 / 0.0"] {
        let error = run_error(src);
        assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero { .. })),
                "{src}: unexpected error: {error}");
    }
}

#[test]
fn given_composes_with_dotted_calls() {
    let (values, printed) = run_script("(given 1 { when it == 1 => 10 }).print");
    assert_eq!(values, vec![Value::Int(10)]);
    assert_eq!(printed, "10\n");
}

#[test]
fn nested_given_expressions() {
    let src = "method sign-name(n) {
                   given n {
                       when it < 0 => 'negative',
                       default => given n {
                           when it == 0 => 'zero',
                           default => 'positive'
                       }
                   }
               }
               sign-name(0 - 3); sign-name(0); sign-name(9)";

    let (values, _) = run_script(src);
    assert_eq!(values,
               vec![Value::from("negative"), Value::from("zero"), Value::from("positive")]);
}
