use crate::error::ConfigError;

/// Decimal separator used when none is configured.
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';

/// Symbols that already form their own lexemes and therefore cannot double as
/// the decimal separator.
pub const OPERATOR_SYMBOLS: &[char] = &['+', '-', '*', '/', '%', '^', '(', ')'];

/// Immutable evaluation settings.
///
/// A `Config` is validated once when it is built and read-only afterwards; the
/// tokenizer receives a copy for every evaluation.
///
/// # Example
/// ```
/// use calcula::interpreter::config::Config;
///
/// let config = Config::new(',').unwrap();
/// assert_eq!(config.decimal_separator(), ',');
///
/// assert!(Config::new('+').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    decimal_separator: char,
}

impl Config {
    /// Builds a configuration with the given decimal separator.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDecimalSeparator`] when the separator is
    /// an ASCII digit, an ASCII letter, whitespace, or one of
    /// [`OPERATOR_SYMBOLS`].
    pub fn new(decimal_separator: char) -> Result<Self, ConfigError> {
        if decimal_separator.is_ascii_alphanumeric()
           || decimal_separator.is_whitespace()
           || OPERATOR_SYMBOLS.contains(&decimal_separator)
        {
            return Err(ConfigError::InvalidDecimalSeparator { separator: decimal_separator });
        }
        Ok(Self { decimal_separator })
    }

    /// The character that separates the integer and fractional parts of a
    /// number.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { decimal_separator: DEFAULT_DECIMAL_SEPARATOR }
    }
}
