#[derive(Debug)]
/// Represents all errors raised by the macro registry and by macro
/// constructors.
pub enum MacroError {
    /// Tried to register an identifier that is already taken.
    DuplicateIdentifier {
        /// The identifier that was registered twice.
        identifier: String,
    },
    /// A macro was invoked with the wrong number of arguments.
    WrongArgumentCount {
        /// The number of arguments the macro requires.
        expected: usize,
        /// The number of arguments it received.
        got:      usize,
    },
}

impl std::fmt::Display for MacroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentifier { identifier } => {
                write!(f, "A macro with identifier '{identifier}' is already registered.")
            },
            Self::WrongArgumentCount { expected, got } => {
                write!(f, "Expected {expected} argument(s) but got {got}.")
            },
        }
    }
}

impl std::error::Error for MacroError {}
