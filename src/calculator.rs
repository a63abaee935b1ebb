use crate::{
    error::ConfigError,
    interpreter::{
        config::Config,
        functions::FunctionTable,
        parser::core::{self, EvalResult},
    },
};

/// An embeddable expression evaluator.
///
/// A `Calculator` bundles a [`Config`] with a [`FunctionTable`]. Evaluation
/// only needs `&self` and every call owns its own cursor, so one instance may
/// serve several threads at once. Changing the configuration needs
/// `&mut self` and therefore cannot race with a running evaluation.
///
/// # Example
/// ```
/// use calcula::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.evaluate("((2) + 2)/2").unwrap(), 2.0);
///
/// calc.set_decimal_separator(',').unwrap();
/// assert_eq!(calc.evaluate("1,5 * 2").unwrap(), 3.0);
///
/// calc.register_function("half", |x| x / 2.0);
/// assert_eq!(calc.evaluate("half 9").unwrap(), 4.5);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    config:    Config,
    functions: FunctionTable,
}

impl Calculator {
    /// Creates a calculator with the default configuration and the built-in
    /// functions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a calculator with the given configuration and the built-in
    /// functions.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config,
               functions: FunctionTable::with_builtins() }
    }

    /// Sets the decimal separator used by subsequent evaluations.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDecimalSeparator`] if the character
    /// already has another meaning; the previous separator stays in effect.
    pub fn set_decimal_separator(&mut self, separator: char) -> Result<(), ConfigError> {
        self.config = Config::new(separator)?;
        Ok(())
    }

    /// The decimal separator currently in effect.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.config.decimal_separator()
    }

    /// A copy of the configuration used by [`Calculator::evaluate`].
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Adds a unary function, or replaces the one with the same name.
    pub fn register_function<F>(&mut self, name: impl Into<String>, func: F)
        where F: Fn(f64) -> f64 + Send + Sync + 'static
    {
        self.functions.register(name, func);
    }

    /// Whether a function is registered under exactly `name`.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    /// Evaluates an expression.
    ///
    /// # Errors
    /// Returns the first [`crate::error::EvalError`] met while tokenizing or
    /// evaluating. No partial result is produced.
    pub fn evaluate(&self, source: &str) -> EvalResult<f64> {
        core::evaluate(source, self.config, &self.functions)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
