use fraccalc::config::Config;
use fraccalc::session::State;
use fraccalc::term_frontend::Frontend;
use fraccalc::{evaluate, ErrorKind};

fn assert_result(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(result) => assert_eq!(result.to_string(), expected, "expression: {src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(result) => panic!("Expression {src:?} succeeded with {result} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "expression: {src}, error: {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_result("2 + 3 * 4", "14/1");
    assert_result("( 2 + 3 ) * 4", "20/1");
    assert_result("2 * ( 3 + 4 ) * 5", "70/1");
    assert_result("10 - 4 - 3", "3/1");
    assert_result("( ( 1 + 2 ) * ( 3 + 4 ) )", "21/1");
}

#[test]
fn fractions_stay_exact() {
    assert_result("1/2 + 1/3", "5/6");
    assert_result("1/3 + 1/3 + 1/3", "1/1");
    assert_result("6/8", "3/4");
    assert_result("3/4", "3/4");
    assert_result("1 / 3", "1/3");
    assert_result("-3/4 * 4/3", "-1/1");
    assert_result("1/2 / 1/4", "2/1");
    assert_result("0 * -5", "0/1");
}

#[test]
fn unary_minus_literals() {
    assert_result("-5 + 3", "-2/1");
    assert_result("3 - -5", "8/1");
    assert_result("( -1/2 )", "-1/2");
    assert_failure("- 5 + 3", ErrorKind::InvalidUnaryMinus);
    assert_failure("4 -2", ErrorKind::InvalidUnaryMinus);
}

#[test]
fn huge_operands() {
    assert_result(
        "123456789012345678901234567890 / 10",
        "12345678901234567890123456789/1",
    );
    assert_result(
        "1/100000000000000000000 + 1/100000000000000000000",
        "1/50000000000000000000",
    );
    assert_result(
        "-99999999999999999999 - 1",
        "-100000000000000000000/1",
    );
}

#[test]
fn error_kinds() {
    assert_failure("1 / 0", ErrorKind::DivisionByZero);
    assert_failure("1 / ( 2 - 2 )", ErrorKind::DivisionByZero);
    assert_failure("5/0", ErrorKind::DivisionByZero);
    assert_failure("2 ^ 3", ErrorKind::UnknownOperator);
    assert_failure("1 +", ErrorKind::InvalidExpression);
    assert_failure("1 2", ErrorKind::InvalidExpression);
    assert_failure("   ", ErrorKind::InvalidExpression);
    assert_failure("2+3", ErrorKind::InvalidCharacter);
    assert_failure("x + 1", ErrorKind::InvalidCharacter);
    assert_failure("( 1 + 2", ErrorKind::UnbalancedGroupingSymbols);
    assert_failure("1 + 2 )", ErrorKind::UnbalancedGroupingSymbols);
    assert_failure("1/ + 2", ErrorKind::InvalidFractionInput);
}

#[test]
fn calc_session_through_frontend() {
    let state = State::new(Config { color: false, clear_screen: false, ..Config::default() });
    let input = "/calc\n2 + 3 * 4\n\n1 / 0\n\nq\n/logs\n\n/exit\n";
    let mut frontend = Frontend::new(state, input.as_bytes(), Vec::new());
    frontend.run().unwrap();

    let (state, output) = frontend.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Result: 14/1"));
    assert!(output.contains("Error: Division by zero"));
    assert!(output.contains("[1] 2 + 3 * 4 = 14/1"));
    assert!(!output.contains("[2]"));
    assert!(state.exiting);
}

#[test]
fn calc_without_pauses() {
    let state = State::new(Config {
        color: false,
        clear_screen: false,
        pause_after_result: false,
        ..Config::default()
    });
    let input = "/calc\n1/2 + 1/2\n7 * 1/7\nq\n/exit\n";
    let mut frontend = Frontend::new(state, input.as_bytes(), Vec::new());
    frontend.run().unwrap();

    let (state, _) = frontend.into_parts();
    let entries: Vec<String> = state.history().map(|e| e.to_string()).collect();
    assert_eq!(entries, ["1/2 + 1/2 = 1/1", "7 * 1/7 = 1/1"]);
}
