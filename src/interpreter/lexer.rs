use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexingError)]
#[logos(skip r"[ \n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// The lexer greedily consumes any run of digits and decimal points and
    /// rejects runs that do not parse to a finite number, such as `1.2.3` or
    /// a literal too large for an `f64`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Identifier tokens; macro names such as `sqrt`. Lowercase only.
    #[regex(r"[a-z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
}

/// Distinguishes the two ways lexing can fail.
///
/// `tokenize` translates these into [`ParseError`] values carrying the
/// offending text and its position.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexingError {
    /// A literal run did not parse to a finite number.
    InvalidNumber,
    /// A character matched no token rule.
    #[default]
    UnknownCharacter,
}

/// Parses a numeric literal from the current token slice.
///
/// Rejects runs that `f64` parsing refuses (such as `1.2.3` or a bare `.`)
/// as well as runs that parse but overflow to infinity.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexingError> {
    let value: f64 = lex.slice().parse().map_err(|_| LexingError::InvalidNumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LexingError::InvalidNumber)
    }
}

/// Converts input text into an ordered sequence of tokens.
///
/// Scans left to right in a single pass. Space and newline characters are
/// skipped silently; every other unrecognized character is an error.
///
/// # Parameters
/// - `input`: The expression text.
///
/// # Returns
/// The tokens in input order.
///
/// # Errors
/// - [`ParseError::UnknownCharacter`] for a character no rule matches.
/// - [`ParseError::InvalidNumber`] for a numeric literal that does not parse
///   to a finite value.
///
/// # Examples
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(LexingError::InvalidNumber) => {
                return Err(ParseError::InvalidNumber { literal:  lexer.slice().to_string(),
                                                       position: char_position(input,
                                                                               lexer.span().start), });
            },
            Err(LexingError::UnknownCharacter) => {
                return Err(ParseError::UnknownCharacter { symbol:   lexer.slice()
                                                                         .chars()
                                                                         .next()
                                                                         .unwrap_or_default(),
                                                          position: char_position(input,
                                                                                  lexer.span()
                                                                                       .start), });
            },
        }
    }

    Ok(tokens)
}

/// Translates a byte offset into a 1-based character position.
///
/// Error positions are reported in characters so that they stay meaningful
/// when the input contains multi-byte characters.
fn char_position(input: &str, byte_offset: usize) -> usize {
    input[..byte_offset].chars().count() + 1
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
        }
    }
}
