/// Turns input text into tokens.
///
/// The lexer scans the input left to right in a single pass and produces the
/// token stream consumed by the parser. It knows nothing about grammar;
/// unknown macro identifiers, for example, only fail later during parsing.
pub mod lexer;

/// Builds the abstract syntax tree.
///
/// The parser consumes the token stream and chains operations together into
/// a single-rooted tree, encoding operator precedence through incremental
/// tree shifts instead of a precedence table.
pub mod parser;

/// Evaluates the abstract syntax tree.
///
/// Implements the recursive evaluation rule for every node variant and the
/// arithmetic for the four operators.
pub mod evaluator;

/// Macro support.
///
/// Contains the process-wide macro registry along with the built-in `sqrt`
/// and `pow` macros.
pub mod macros;
