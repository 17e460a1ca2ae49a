use pretty_assertions::assert_eq;
use reckon::{
    error::{Error, MacroError, ParseError},
    evaluate,
    interpreter::{lexer::tokenize, parser::core::parse},
};

fn assert_value(input: &str, expected: f64) {
    match evaluate(input) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {input:?}"),
        Err(e) => panic!("{input:?} failed to evaluate: {e}"),
    }
}

fn parse_error(input: &str) -> ParseError {
    match evaluate(input) {
        Ok(value) => panic!("{input:?} evaluated to {value} but was expected to fail"),
        Err(Error::Parse(e)) => e,
        Err(e) => panic!("{input:?} failed with an unexpected error kind: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2+3", 5.0);
    assert_value("2-3", -1.0);
    assert_value("2*3", 6.0);
    assert_value("3/2", 1.5);
}

#[test]
fn multiplicative_binds_tighter() {
    assert_value("2+3*2", 8.0);
    assert_value("2*3+2", 8.0);
    assert_value("1+2*3+4", 11.0);
    assert_value("2*3+4*5", 26.0);
    assert_value("10-4/2", 8.0);
}

#[test]
fn same_tier_is_left_associative() {
    assert_value("10-4-3", 3.0);
    assert_value("8/2/2", 2.0);
    assert_value("10/2*3", 15.0);
    assert_value("2*3/4", 1.5);
    assert_value("100/10/5/2", 1.0);
    assert_value("1+8/2/2", 3.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("2*(3+4)", 14.0);
    assert_value("(3)", 3.0);
    assert_value("((2))", 2.0);
    assert_value("(2+3)*(4-2)", 10.0);
    assert_value("(2+(3*4))", 14.0);
    assert_value("(8/2)/2", 2.0);
}

#[test]
fn leading_signs() {
    assert_value("-3+5", 2.0);
    assert_value("+2", 2.0);
    assert_value("-2*3", -6.0);
    assert_value("(-3)", -3.0);
    assert_value("2*(-3)", -6.0);
}

#[test]
fn empty_input_is_zero() {
    assert_value("", 0.0);
    assert_value("  ", 0.0);
    assert_value("\n", 0.0);
    assert_value("()", 0.0);
    assert_value("2+()", 2.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 2 + 3 ", 5.0);
    assert_value("2\n+3", 5.0);
    assert_value("2 * ( 3 + 4 )", 14.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5+2.25", 3.75);
    assert_value(".5*4", 2.0);
}

#[test]
fn division_follows_ieee_754() {
    assert!(evaluate("1/0").unwrap().is_infinite());
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn macro_calls() {
    assert_value("sqrt{4}", 2.0);
    assert_value("1+sqrt{4}", 3.0);
    assert_value("2*sqrt{16}", 8.0);
    assert_value("sqrt{9}/3", 1.0);
    assert_value("pow{2,4}", 16.0);
    assert_value("pow{2+2,2}", 16.0);
}

#[test]
fn macros_nest_and_compose() {
    assert_value("sqrt{sqrt{16}}", 2.0);
    assert_value("pow{pow{2,2},2}", 16.0);
    assert_value("sqrt{4}*2+(3*pow{1+1,sqrt{4}})", 16.0);
}

#[test]
fn empty_macro_argument_is_zero() {
    // `pow{2,}` passes an implicit 0 exponent; `{}` passes no arguments at
    // all and fails the count check instead.
    assert_value("pow{2,}", 1.0);
    assert!(matches!(parse_error("sqrt{}"),
                     ParseError::Macro(MacroError::WrongArgumentCount { expected: 1, got: 0 })));
}

#[test]
fn evaluation_is_idempotent() {
    let tokens = tokenize("2+3*sqrt{16}").unwrap();
    let root = parse(&tokens).unwrap();

    assert_eq!(root.eval().unwrap(), 14.0);
    assert_eq!(root.eval().unwrap(), 14.0);
}

#[test]
fn trailing_operator_is_rejected() {
    assert!(matches!(parse_error("2+"), ParseError::TrailingOperand));
    assert!(matches!(parse_error("2-"), ParseError::TrailingOperand));
    assert!(matches!(parse_error("2+3*"), ParseError::TrailingOperand));
    assert!(matches!(parse_error("-"), ParseError::TrailingOperand));
}

#[test]
fn consecutive_operators_are_rejected() {
    assert!(matches!(parse_error("2**3"), ParseError::ConsecutiveOperators { .. }));
    assert!(matches!(parse_error("2+-3"), ParseError::ConsecutiveOperators { .. }));
    assert!(matches!(parse_error("2+*3"), ParseError::ConsecutiveOperators { .. }));
}

#[test]
fn leading_multiplicative_is_rejected() {
    assert!(matches!(parse_error("*2"), ParseError::LeadingMultiplicative { .. }));
    assert!(matches!(parse_error("/2"), ParseError::LeadingMultiplicative { .. }));
    assert!(matches!(parse_error("2+(*3)"), ParseError::LeadingMultiplicative { .. }));
}

#[test]
fn adjacent_values_are_rejected() {
    assert!(matches!(parse_error("2 3"), ParseError::ExpectedOperator { .. }));
    assert!(matches!(parse_error("2(3)"), ParseError::ExpectedOperatorBeforeParen));
    assert!(matches!(parse_error("2 sqrt{4}"),
                     ParseError::ExpectedOperatorBeforeIdentifier { .. }));
}

#[test]
fn unmatched_delimiters_are_rejected() {
    assert!(matches!(parse_error("(2+3"), ParseError::UnmatchedParenthesis { .. }));
    assert!(matches!(parse_error("2+3)"), ParseError::UnmatchedParenthesis { .. }));
    assert!(matches!(parse_error("sqrt{4"), ParseError::UnmatchedBrace { .. }));
    assert!(matches!(parse_error("}"), ParseError::UnexpectedClosingBrace));
    assert!(matches!(parse_error("2,3"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn macro_misuse_is_rejected() {
    assert!(matches!(parse_error("foo{2}"), ParseError::UnknownMacro { .. }));
    assert!(matches!(parse_error("sqrt 4"), ParseError::ExpectedOpenBrace { .. }));
    assert!(matches!(parse_error("sqrt"), ParseError::ExpectedOpenBrace { .. }));
    assert!(matches!(parse_error("sqrt{1,2}"),
                     ParseError::Macro(MacroError::WrongArgumentCount { expected: 1, got: 2 })));
    assert!(matches!(parse_error("pow{1}"),
                     ParseError::Macro(MacroError::WrongArgumentCount { expected: 2, got: 1 })));
}

#[test]
fn unknown_characters_are_reported_with_position() {
    match parse_error("2$3") {
        ParseError::UnknownCharacter { symbol, position } => {
            assert_eq!(symbol, '$');
            assert_eq!(position, 2);
        },
        e => panic!("expected UnknownCharacter, got {e:?}"),
    }

    // Tabs are not part of the accepted whitespace.
    assert!(matches!(parse_error("2\t3"), ParseError::UnknownCharacter { .. }));
}

#[test]
fn unknown_character_hints() {
    let bracket = parse_error("[2]").to_string();
    assert!(bracket.contains("parentheses"), "missing hint in: {bracket}");

    let uppercase = parse_error("Sqrt{4}").to_string();
    assert!(uppercase.contains("lowercase"), "missing hint in: {uppercase}");
}

#[test]
fn malformed_numbers_are_rejected() {
    match parse_error("1.2.3") {
        ParseError::InvalidNumber { literal, position } => {
            assert_eq!(literal, "1.2.3");
            assert_eq!(position, 1);
        },
        e => panic!("expected InvalidNumber, got {e:?}"),
    }

    assert!(matches!(parse_error("2+."), ParseError::InvalidNumber { .. }));
}
