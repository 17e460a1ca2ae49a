//! # reckon
//!
//! reckon is a small calculator library. It tokenizes, parses, and evaluates
//! arithmetic expressions over `f64` values with the four basic operators,
//! parentheses, and named macros such as `sqrt{4}` or `pow{2,10}` that take
//! brace-delimited, comma-separated argument expressions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer, parser};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of an expression as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the node variants for literals, binary operations, and macro
///   calls.
/// - Defines the binary operator type and the `Macro` trait that extension
///   macros implement.
/// - Enforces the locking discipline that protects completed subtrees from
///   further mutation.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// registering macros, or evaluating expressions. It standardizes error
/// reporting and carries detailed information about failures, including
/// positions and expected-versus-actual context.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, registry,
///   evaluator).
/// - Renders complete human-readable messages via `Display`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and the macro
/// registry to provide a complete pipeline from input text to a numeric
/// result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and macros.
/// - Provides the entry points used by the command line binary.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::Error,
    interpreter::macros::registry::{register_macro, registered_macros},
};

/// Evaluates an expression and returns its numeric value.
///
/// The input is tokenized, parsed into a syntax tree, and evaluated
/// recursively. An empty input evaluates to `0.0`.
///
/// # Errors
/// Returns an error if tokenization or parsing fails, or if a macro reports
/// an evaluation failure.
///
/// # Examples
/// ```
/// // Multiplication binds tighter than addition.
/// assert_eq!(reckon::evaluate("2+3*2").unwrap(), 8.0);
///
/// // Macros participate in the expression grammar like literals do.
/// assert_eq!(reckon::evaluate("1+sqrt{4}").unwrap(), 3.0);
///
/// // A dangling operator is rejected.
/// assert!(reckon::evaluate("2+").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    let tokens = lexer::tokenize(input)?;
    let root = parser::core::parse(&tokens)?;
    Ok(root.eval()?)
}
