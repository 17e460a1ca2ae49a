/// The process-wide macro registry.
///
/// Maps identifiers to constructor functions and answers the parser's
/// lookups. Populated with the built-in macros on first access; extensions
/// register themselves at startup through [`registry::register_macro`].
pub mod registry;

/// The built-in `sqrt` macro.
pub mod sqrt;

/// The built-in `pow` macro.
pub mod pow;
