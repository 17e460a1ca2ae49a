/// Macro errors.
///
/// Defines the error types raised by the macro registry and by macro
/// constructors: duplicate registrations and argument lists of the wrong
/// length.
pub mod macro_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unknown characters, malformed numbers,
/// misplaced operators, unmatched delimiters, and unresolved macro
/// identifiers.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while evaluating a parsed
/// expression. Plain arithmetic never fails (division by zero follows IEEE
/// 754 and yields infinity or NaN), so these cover broken invariants and
/// failures reported by macro implementations.
pub mod runtime_error;

pub use macro_error::MacroError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The top level error returned by [`crate::evaluate`].
pub enum Error {
    /// Tokenizing or parsing the input failed.
    Parse(ParseError),
    /// Evaluating the parsed expression failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
