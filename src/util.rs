/// Numeric rendering helpers.
///
/// This module turns evaluation results back into text for front ends such as
/// the command-line wrapper. Integral values are printed without a fractional
/// part and the configured decimal separator is used for the rest.
pub mod num;
