//! # calcula
//!
//! calcula is an embeddable arithmetic expression evaluator written in Rust.
//! It evaluates text such as `2 ^4 ^0.5` or `cos (2 - 2)` to an `f64`,
//! supporting signed numbers, `+ - * / %`, right-associative `^`, grouping
//! with parentheses and named unary functions. The decimal separator is
//! configurable so the evaluator can follow the host application's locale.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// The public evaluator type.
///
/// This module declares [`Calculator`], which couples an immutable
/// configuration with a function table and exposes the evaluation entry
/// point.
///
/// # Responsibilities
/// - Owns the configuration and the function table.
/// - Lets the embedding application change the decimal separator and
///   register functions.
/// - Starts one independent evaluation per call.
pub mod calculator;
/// Provides error types for configuration and evaluation.
///
/// This module defines every error the crate can return. Evaluation errors
/// carry the byte offset of the offending lexeme so callers can point at it,
/// and expose a fieldless kind for targeted messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser, arithmetic,
///   configuration).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Tokenizes and evaluates expressions.
///
/// This module ties together configuration, the lexer, the function table and
/// the recursive-descent evaluator.
///
/// # Responsibilities
/// - Converts text into tokens lazily.
/// - Evaluates tokens in a single pass by precedence level.
/// - Manages the flow of errors from the lexer to the caller.
pub mod interpreter;
/// General utilities for presenting results.
///
/// # Responsibilities
/// - Render numbers the way a calculator display would.
pub mod util;

pub use calculator::Calculator;
pub use error::{ConfigError, ErrorKind, EvalError};

/// Evaluates an expression with a default [`Calculator`].
///
/// The default calculator uses `.` as decimal separator and knows the
/// built-in functions only.
///
/// # Errors
/// Returns an error if the expression is malformed or an arithmetic error
/// occurs.
///
/// # Examples
/// ```
/// use calcula::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2 +3 - 1").unwrap(), 4.0);
/// assert_eq!(evaluate("4 *3 / 2").unwrap(), 6.0);
///
/// // A second sign is not folded into the first.
/// let err = evaluate(" --  4 ").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NotANumber);
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    Calculator::new().evaluate(source)
}
