use crate::{ast::BinaryOperator, error::MacroError};

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input contains a character the lexer does not recognize.
    UnknownCharacter {
        /// The offending character.
        symbol:   char,
        /// 1-based character position in the input.
        position: usize,
    },
    /// A run of digits and decimal points did not parse to a finite number.
    InvalidNumber {
        /// The text of the rejected literal.
        literal:  String,
        /// 1-based character position where the literal starts.
        position: usize,
    },
    /// Two operators appeared without an operand in between.
    ConsecutiveOperators {
        /// The operator that came first.
        previous: BinaryOperator,
        /// The operator that followed it.
        current:  BinaryOperator,
    },
    /// A value appeared where an operator was required.
    ExpectedOperator {
        /// The token that preceded the value.
        found: String,
    },
    /// An opening parenthesis was not the first token and did not follow an
    /// operator.
    ExpectedOperatorBeforeParen,
    /// A macro identifier was not the first token and did not follow an
    /// operator.
    ExpectedOperatorBeforeIdentifier {
        /// The macro identifier.
        identifier: String,
    },
    /// The expression starts with `*` or `/`, which have no left operand.
    LeadingMultiplicative {
        /// The offending operator.
        operator: BinaryOperator,
    },
    /// A parenthesis has no counterpart.
    UnmatchedParenthesis {
        /// 1-based token position of the unmatched parenthesis.
        position: usize,
    },
    /// An opening brace has no matching closing brace.
    UnmatchedBrace {
        /// 1-based token position of the opening brace.
        position: usize,
    },
    /// A value was attached to a slot that already holds one.
    UnexpectedLiteral,
    /// The expression ends with an operator that is missing its right
    /// operand.
    TrailingOperand,
    /// A closing brace appeared outside of any macro argument list.
    UnexpectedClosingBrace,
    /// A token appeared in a position the grammar has no rule for.
    UnexpectedToken {
        /// The rendered token text.
        token: String,
    },
    /// The identifier does not name a registered macro.
    UnknownMacro {
        /// The unresolved identifier.
        identifier: String,
    },
    /// A macro identifier was not followed by an opening brace.
    ExpectedOpenBrace {
        /// The macro identifier.
        identifier: String,
    },
    /// A macro constructor rejected its argument list.
    Macro(MacroError),
    /// An invariant of the parser was broken. Never produced by valid or
    /// invalid input, only by a bug.
    Internal {
        /// Details about the broken invariant.
        detail: String,
    },
}

impl ParseError {
    /// Builds a [`ParseError::Internal`] from anything printable.
    pub(crate) fn internal(detail: impl Into<String>) -> Self {
        Self::Internal { detail: detail.into() }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { symbol, position } => {
                write!(f, "Unknown character '{symbol}' at position {position}.")?;
                if matches!(symbol, '[' | ']') {
                    write!(f, " Did you mean parentheses '()' or braces '{{}}'?")?;
                } else if symbol.is_ascii_uppercase() {
                    write!(f, " Macro identifiers only use lowercase letters.")?;
                }
                Ok(())
            },

            Self::InvalidNumber { literal, position } => {
                write!(f, "Unable to parse '{literal}' at position {position} as a number.")
            },

            Self::ConsecutiveOperators { previous, current } => write!(f,
                                                                       "Operator '{current}' directly follows operator '{previous}', expected a value in between."),

            Self::ExpectedOperator { found } => {
                write!(f, "Expected an operator before this value, but found '{found}'.")
            },

            Self::ExpectedOperatorBeforeParen => write!(f,
                                                        "An opening parenthesis must be the first token of an expression or follow an operator."),

            Self::ExpectedOperatorBeforeIdentifier { identifier } => write!(f,
                                                                            "Macro '{identifier}' must be the first token of an expression or follow an operator."),

            Self::LeadingMultiplicative { operator } => {
                write!(f, "An expression cannot start with '{operator}'.")
            },

            Self::UnmatchedParenthesis { position } => {
                write!(f, "Unmatched parenthesis at position {position}.")
            },

            Self::UnmatchedBrace { position } => {
                write!(f, "Missing closing brace for the opening brace at position {position}.")
            },

            Self::UnexpectedLiteral => {
                write!(f, "Found a value where an operator was expected.")
            },

            Self::TrailingOperand => {
                write!(f, "The final operator is missing its right operand.")
            },

            Self::UnexpectedClosingBrace => write!(f, "Unexpected closing brace."),

            Self::UnexpectedToken { token } => write!(f, "Unexpected token '{token}'."),

            Self::UnknownMacro { identifier } => {
                write!(f, "Unknown macro identifier '{identifier}'.")
            },

            Self::ExpectedOpenBrace { identifier } => write!(f,
                                                             "Expected an opening brace after macro identifier '{identifier}'."),

            Self::Macro(e) => write!(f, "{e}"),

            Self::Internal { detail } => {
                write!(f, "Internal parser error: {detail}. This is a bug.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

impl From<MacroError> for ParseError {
    fn from(e: MacroError) -> Self {
        Self::Macro(e)
    }
}
