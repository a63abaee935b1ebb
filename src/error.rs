/// Evaluation errors.
///
/// Defines every failure that can occur while tokenizing and evaluating an
/// expression: malformed literals, unknown characters or functions, bracket
/// mismatches, premature end of input and division by zero.
pub mod eval_error;
/// Configuration errors.
///
/// Contains the errors raised when a calculator is configured with values it
/// cannot work with, such as a decimal separator that collides with another
/// lexeme class.
pub mod config_error;

pub use config_error::ConfigError;
pub use eval_error::{ErrorKind, EvalError};
