/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels and
/// the right-associative exponentiation level of the grammar, plus the
/// token-to-operator mapping they share.
pub mod binary;
/// Parser entry point and assignment handling.
///
/// Declares the parse result alias, the top-level `parse` function that
/// requires the sequence to end cleanly, and the assignment rule with its
/// two-token lookahead.
pub mod core;
/// Primary expression parsing.
///
/// Handles the atoms of the grammar: numeric literals, symbols,
/// parenthesized sub-expressions, and recursive unary minus.
pub mod unary;
