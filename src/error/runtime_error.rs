#[derive(Debug)]
/// Represents all errors that can occur while evaluating a parsed
/// expression.
///
/// Plain arithmetic cannot fail: division by zero follows IEEE 754 and
/// produces infinity or NaN instead of an error.
pub enum RuntimeError {
    /// An invariant of the evaluator was broken. Never produced by valid
    /// input, only by a bug.
    Internal {
        /// Details about the broken invariant.
        detail: String,
    },
    /// A macro implementation reported a failure.
    Macro {
        /// Details supplied by the macro.
        detail: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal { detail } => {
                write!(f, "Internal evaluation error: {detail}. This is a bug.")
            },
            Self::Macro { detail } => write!(f, "Macro evaluation failed: {detail}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
