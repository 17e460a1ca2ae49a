use crate::error::RuntimeError;

/// Represents a binary operator.
///
/// Only the four basic arithmetic operators exist; everything else an
/// expression can do is spelled as a macro call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the tightly binding operators `*` and `/`.
    ///
    /// The parser uses this to decide whether a freshly read operator joins
    /// the multiplicative chain it ends on or splices below an additive node.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// The interface all macros implement.
///
/// A macro instance is created by its registered constructor during parsing
/// and owns its argument expressions as already-parsed [`Node`] trees. It
/// evaluates them lazily when [`Macro::eval`] is called, never at
/// construction time.
pub trait Macro: std::fmt::Debug {
    /// Returns the value this macro resolves to, or an error if one occurs.
    fn eval(&self) -> Result<f64, RuntimeError>;
}

/// An abstract syntax tree node representing an expression.
///
/// `Node` is the basic building block the parser chains together. A node is
/// either a terminal (a literal value or a completed macro invocation) or a
/// binary operation owning up to two children.
#[derive(Debug)]
pub enum Node {
    /// A literal numeric value.
    Literal(f64),
    /// A binary operation with optional children; see [`Operation`].
    BinaryOp(Operation),
    /// A completed macro invocation. Opaque to the parser.
    MacroCall(Box<dyn Macro>),
}

impl Node {
    /// Reports whether this node may still be modified by the parser.
    ///
    /// Literals and macro calls are always locked. Operations start out
    /// unlocked and are locked once the slice they belong to is fully
    /// parsed. The parser never descends into a locked node.
    ///
    /// ## Example
    /// ```
    /// use reckon::ast::Node;
    ///
    /// assert!(Node::Literal(5.0).is_locked());
    /// ```
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        match self {
            Self::Literal(_) | Self::MacroCall(_) => true,
            Self::BinaryOp(operation) => operation.is_locked(),
        }
    }
}

/// A binary operation, the recursive building block of the syntax tree.
///
/// Either side may be absent: the right side while the next operand has not
/// been read yet, the left side when an expression starts with a sign. An
/// absent side evaluates to `0.0`, which is what makes `-3+5` work without a
/// dedicated unary node.
///
/// The fields are crate-private so that code outside the parser cannot
/// re-link children of a completed subtree.
#[derive(Debug)]
pub struct Operation {
    pub(crate) operator: BinaryOperator,
    pub(crate) left:     Option<Box<Node>>,
    pub(crate) right:    Option<Box<Node>>,
    locked:              bool,
}

impl Operation {
    /// Creates a new, unlocked operation.
    pub(crate) const fn new(operator: BinaryOperator,
                            left: Option<Box<Node>>,
                            right: Option<Box<Node>>)
                            -> Self {
        Self { operator,
               left,
               right,
               locked: false }
    }

    /// Reports whether this operation may still be modified by the parser.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Marks this operation as complete. Called once per parsed slice, on
    /// its root.
    pub(crate) const fn lock(&mut self) {
        self.locked = true;
    }
}
