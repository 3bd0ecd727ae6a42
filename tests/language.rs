use lioliosh::{evaluate_source, interpreter::value::core::Value, run_line};

fn assert_output(src: &str, expected: &str) {
    match run_line(src) {
        Ok(output) => assert_eq!(output, expected, "unexpected result for {src:?}"),
        Err(e) => panic!("Script failed to parse: {src:?}\nError: {e}"),
    }
}

fn assert_error(src: &str, message: &str) {
    assert_output(src, &format!("Error: {message}"));
}

fn assert_parse_failure(src: &str) {
    if let Ok(output) = run_line(src) {
        panic!("{src:?} parsed and printed {output:?} but was expected to fail")
    }
}

#[test]
fn arithmetic_with_word_and_symbol_operators() {
    assert_output("(+ 1 2 3)", "6");
    assert_output("(add 1 2 3)", "6");
    assert_output("(- 10 4 3)", "3");
    assert_output("(* 2 3 4)", "24");
    assert_output("(/ 10 4)", "2.5");
    assert_output("(% 10 4)", "2");
    assert_output("(^ 2 10)", "1024");
    assert_output("(* 1.5 (+ 2 -0.5))", "2.25");
}

#[test]
fn unary_minus_negates() {
    assert_output("(sub 5)", "-5");
    assert_output("(- -5)", "5");
}

#[test]
fn top_level_expressions_do_not_need_parentheses() {
    assert_output("+ 1 2", "3");
    assert_output("5", "5");
    assert_output("", "()");
    assert_output("()", "()");
}

#[test]
fn list_operations() {
    assert_output("(head {1 2 3})", "{1}");
    assert_output("(tail {1 2 3})", "{2 3}");
    assert_output("(join {1 2} {3 4})", "{1 2 3 4}");
    assert_output("(join {1} {} {(+ 2 3)})", "{1 (+ 2 3)}");
    assert_output("(cons 1 {2 3})", "{1 2 3}");
    assert_output("(list 1 2 (+ 1 2))", "{1 2 3}");
    assert_output("{+ 1 2}", "{+ 1 2}");
}

#[test]
fn eval_runs_quoted_expressions() {
    assert_output("(eval {+ 1 2})", "3");
    assert_output("(eval (head {(* 2 21) 0}))", "42");
    assert_output("(eval (join {+} {1 2} {3}))", "6");
    assert_output("(eval {})", "()");
}

#[test]
fn eval_of_a_list_without_operator_fails() {
    assert_error("(eval (list 1 2 3))", "Expression expected an operator.");
}

#[test]
fn min_and_max() {
    assert_output("(max 3 9.5 -2)", "9.5");
    assert_output("(min 3 9.5 -2)", "-2");
    assert_output("(max 4)", "4");
}

#[test]
fn arithmetic_errors() {
    assert_error("(div 1 0)", "Division by zero.");
    assert_error("(/ 8 2 0 4)", "Division by zero.");
    assert_error("(mod 5 0)", "Division by zero.");
    assert_error("(+ 1 {2})", "Function 'add' passed incorrect type.");
    assert_error("(* {2} 1)", "Function 'mul' passed incorrect type.");
}

#[test]
fn list_argument_errors() {
    assert_error("(head {})", "Function 'head' passed {}.");
    assert_error("(tail 1)", "Function 'tail' passed incorrect type.");
    assert_error("(head {1} {2})", "Function 'head' takes exactly 1 argument.");
    assert_error("(cons 1 2 {3})", "Function 'cons' takes exactly 2 arguments.");
    assert_error("(cons {1} {2})", "Function 'cons' passed incorrect type.");
    assert_error("(join {1} 2)", "Function 'join' passed incorrect type.");
    assert_error("(eval 1)", "Function 'eval' passed incorrect type.");
}

#[test]
fn operators_must_lead_expressions() {
    assert_error("(1 2 3)", "Expression expected an operator.");
    assert_error("({+} 1 2)", "Expression expected an operator.");
}

#[test]
fn first_error_short_circuits_the_whole_expression() {
    assert_error("(+ 1 (/ 1 0) (head {}))", "Division by zero.");
    assert_error("(head (list (tail {})))", "Function 'tail' passed {}.");
}

#[test]
fn out_of_range_literals() {
    let huge = "9".repeat(400);
    assert_error(&format!("(+ 1 {huge})"), "invalid number");
}

#[test]
fn number_rendering() {
    assert_output("(/ 1 3)", "0.333333");
    assert_output("(* 1000 1000)", "1e+06");
    assert_output("(/ 1 0.00001 10000000000)", "1e-05");
    assert_output("(^ 10 400)", "inf");
}

#[test]
fn malformed_input_is_a_parse_error() {
    assert_parse_failure("(+ 1 2");
    assert_parse_failure("(+ 1 2))");
    assert_parse_failure("{1 2)");
    assert_parse_failure("(sqrt 4)");
    assert_parse_failure("(+ 1 two)");
}

#[test]
fn evaluation_returns_structured_values() {
    let value = evaluate_source("(tail {1 {2 3}})").unwrap();
    let expected = Value::quoted().with(Value::quoted().with(Value::Number(2.0))
                                                       .with(Value::Number(3.0)));
    assert_eq!(value, expected);
}
