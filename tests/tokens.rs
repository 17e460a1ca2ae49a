use pretty_assertions::assert_eq;
use reckon::interpreter::lexer::{Token, tokenize};

fn render(input: &str) -> String {
    tokenize(input).unwrap()
                   .iter()
                   .map(ToString::to_string)
                   .collect()
}

#[test]
fn tokens_keep_input_order() {
    let tokens = tokenize("1+sqrt{4}").unwrap();

    assert_eq!(tokens,
               vec![Token::Number(1.0),
                    Token::Plus,
                    Token::Identifier("sqrt".to_string()),
                    Token::LBrace,
                    Token::Number(4.0),
                    Token::RBrace]);
}

#[test]
fn rendering_round_trips_without_whitespace() {
    assert_eq!(render("1+sqrt{4}*(2,3)"), "1+sqrt{4}*(2,3)");
    assert_eq!(render(" 1 + sqrt{ 4 }"), "1+sqrt{4}");
    assert_eq!(render("pow{2,10}/4"), "pow{2,10}/4");
    assert_eq!(render("1.5-0.25"), "1.5-0.25");
}

#[test]
fn greedy_number_runs() {
    // A run of digits and decimal points is consumed as one literal.
    assert_eq!(tokenize("12.5").unwrap(), vec![Token::Number(12.5)]);
    assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);

    // The lexer has no exponent syntax; `e` starts an identifier run.
    assert_eq!(tokenize("2e3").unwrap(),
               vec![Token::Number(2.0), Token::Identifier("e".to_string()), Token::Number(3.0)]);
}
