/// Core parsing logic.
///
/// Contains the entry point that turns a token slice into a syntax tree and
/// the handlers for operators, literals, and parenthesized groups.
pub mod core;

/// Macro call parsing.
///
/// Resolves macro identifiers against the registry, extracts the
/// brace-delimited argument list, and builds macro invocation nodes.
pub mod macro_call;

/// Utility functions for the parser.
///
/// Provides the right-spine search, the shared attachment helper, and
/// delimiter matching.
pub mod utils;
