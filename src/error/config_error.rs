#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while configuring a calculator.
pub enum ConfigError {
    /// The decimal separator collides with digits, letters, whitespace or an
    /// operator symbol.
    InvalidDecimalSeparator {
        /// The rejected separator.
        separator: char,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDecimalSeparator { separator } => write!(f,
                                                                  "Invalid decimal separator {separator:?}: it must not be a digit, letter, whitespace or operator."),
        }
    }
}

impl std::error::Error for ConfigError {}
