use crate::{
    ast::{BinaryOperator, Node, Operation},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a value of type `T` or a [`RuntimeError`]
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Node {
    /// Evaluates this node recursively and returns its numeric value.
    ///
    /// Evaluation never mutates the tree, so evaluating the same tree twice
    /// yields the same value.
    ///
    /// # Errors
    /// Propagates the first failure reported by a macro implementation.
    /// Plain arithmetic cannot fail; division by zero yields infinity or NaN
    /// per IEEE 754.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::Node;
    ///
    /// assert_eq!(Node::Literal(2.5).eval().unwrap(), 2.5);
    /// ```
    pub fn eval(&self) -> EvalResult<f64> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::BinaryOp(operation) => operation.eval(),
            Self::MacroCall(instance) => instance.eval(),
        }
    }
}

impl Operation {
    /// Evaluates an operation by first evaluating both sides and then
    /// applying the operator.
    ///
    /// An absent side evaluates to `0.0`. This is what gives a leading sign
    /// its meaning: `-3` is parsed as an operation with an empty left side
    /// and evaluates to `0 - 3`.
    pub fn eval(&self) -> EvalResult<f64> {
        let left = match &self.left {
            Some(node) => node.eval()?,
            None => 0.0,
        };
        let right = match &self.right {
            Some(node) => node.eval()?,
            None => 0.0,
        };
        Ok(calc(self.operator, left, right))
    }
}

/// Carries out a single arithmetic operation on two operands.
///
/// Total over the operator type; the four variants are the whole arithmetic
/// surface of the language.
const fn calc(operator: BinaryOperator, left: f64, right: f64) -> f64 {
    match operator {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}
