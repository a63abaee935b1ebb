/// Parser state and entry point.
///
/// Holds the tokenizer, the single token of lookahead and the function table,
/// and drives a whole evaluation from the first token to end of input.
pub mod core;

/// Binary operator levels.
///
/// Implements the additive, multiplicative and exponentiation productions and
/// the arithmetic applied when each one reduces.
pub mod binary;

/// Signs and atoms.
///
/// Handles the optional leading sign, numbers, parenthesized sub-expressions
/// and function application.
pub mod unary;
