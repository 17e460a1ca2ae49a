use crate::{
    ast::{Macro, Node},
    error::MacroError,
    interpreter::evaluator::EvalResult,
};

/// Computes the square root of its single argument.
///
/// A negative argument yields NaN, matching the behavior of `f64::sqrt`.
#[derive(Debug)]
pub struct Sqrt {
    value: Node,
}

impl Macro for Sqrt {
    fn eval(&self) -> EvalResult<f64> {
        Ok(self.value.eval()?.sqrt())
    }
}

/// Builds a [`Sqrt`] from exactly one argument expression.
///
/// Only the argument count is validated here; the argument is stored as a
/// parsed tree and evaluated lazily.
///
/// # Errors
/// [`MacroError::WrongArgumentCount`] for anything but one argument.
pub fn new_sqrt(arguments: Vec<Node>) -> Result<Box<dyn Macro>, MacroError> {
    match <[Node; 1]>::try_from(arguments) {
        Ok([value]) => Ok(Box::new(Sqrt { value })),
        Err(arguments) => Err(MacroError::WrongArgumentCount { expected: 1,
                                                               got:      arguments.len(), }),
    }
}
