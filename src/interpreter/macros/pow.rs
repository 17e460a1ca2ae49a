use crate::{
    ast::{Macro, Node},
    error::MacroError,
    interpreter::evaluator::EvalResult,
};

/// Raises its first argument to the power of its second.
#[derive(Debug)]
pub struct Pow {
    base:     Node,
    exponent: Node,
}

impl Macro for Pow {
    fn eval(&self) -> EvalResult<f64> {
        let base = self.base.eval()?;
        let exponent = self.exponent.eval()?;
        Ok(base.powf(exponent))
    }
}

/// Builds a [`Pow`] from exactly two argument expressions: base first,
/// exponent second.
///
/// Only the argument count is validated here; both arguments are stored as
/// parsed trees and evaluated lazily.
///
/// # Errors
/// [`MacroError::WrongArgumentCount`] for anything but two arguments.
pub fn new_pow(arguments: Vec<Node>) -> Result<Box<dyn Macro>, MacroError> {
    match <[Node; 2]>::try_from(arguments) {
        Ok([base, exponent]) => Ok(Box::new(Pow { base, exponent })),
        Err(arguments) => Err(MacroError::WrongArgumentCount { expected: 2,
                                                               got:      arguments.len(), }),
    }
}
