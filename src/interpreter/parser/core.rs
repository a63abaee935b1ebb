use crate::{
    error::EvalError,
    interpreter::{
        config::Config,
        functions::FunctionTable,
        lexer::{Token, Tokenizer},
    },
};

/// Result type used by the tokenizer and the parser.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Deepest nesting of brackets, function applications and exponents an
/// evaluation accepts before failing with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent evaluator.
///
/// Every production computes its value directly while consuming tokens, so no
/// syntax tree is ever built. The parser keeps exactly one token of lookahead,
/// which always holds the lexeme starting at the tokenizer's cursor.
///
/// A parser lives for one evaluation; it owns its cursor and only borrows the
/// function table. Recursion never goes deeper than [`MAX_NESTING_DEPTH`]
/// levels.
pub struct Parser<'src, 'f> {
    tokens:               Tokenizer<'src>,
    pub(super) functions: &'f FunctionTable,
    lookahead:            Option<(Token, usize)>,
    depth:                usize,
}

impl<'src, 'f> Parser<'src, 'f> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Returns a tokenizer error if the first lexeme is invalid.
    pub fn new(source: &'src str,
               config: Config,
               functions: &'f FunctionTable)
               -> EvalResult<Self> {
        let mut tokens = Tokenizer::new(source, config);
        let lookahead = tokens.next_token()?;
        Ok(Self { tokens,
                  functions,
                  lookahead,
                  depth: 0 })
    }

    /// Evaluates the whole input.
    ///
    /// Parses one expression and then requires the input to be exhausted.
    ///
    /// # Errors
    /// Any [`EvalError`]; a leftover `)` is a `MissingBracket`, any other
    /// leftover token is `TrailingInput`.
    pub fn evaluate(mut self) -> EvalResult<f64> {
        let value = self.parse_expression()?;
        self.expect_end()?;
        Ok(value)
    }

    /// Returns the lookahead token, `None` at end of input.
    pub(crate) const fn peek(&self) -> Option<&(Token, usize)> {
        self.lookahead.as_ref()
    }

    /// Consumes the lookahead token and reads the next one.
    pub(crate) fn advance(&mut self) -> EvalResult<()> {
        self.lookahead = self.tokens.next_token()?;
        Ok(())
    }

    /// Runs `production` one nesting level deeper.
    ///
    /// # Parameters
    /// - `position`: Byte offset of the token opening the level.
    /// - `production`: The recursive parse to run at that level.
    ///
    /// # Errors
    /// `NestingTooDeep` if the level would exceed [`MAX_NESTING_DEPTH`];
    /// otherwise whatever `production` returns.
    pub(crate) fn nested<T>(&mut self,
                            position: usize,
                            production: impl FnOnce(&mut Self) -> EvalResult<T>)
                            -> EvalResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(EvalError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                   position });
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Byte offset reported for errors raised at end of input.
    pub(crate) fn end(&self) -> usize {
        self.tokens.end()
    }

    fn expect_end(&self) -> EvalResult<()> {
        match self.peek() {
            None => Ok(()),
            Some((Token::RParen, position)) => {
                Err(EvalError::MissingBracket { position: *position })
            },
            Some((token, position)) => Err(EvalError::TrailingInput { token:    token.to_string(),
                                                                      position: *position, }),
        }
    }
}

/// Evaluates `source` with the given configuration and function table.
///
/// # Errors
/// Returns the first [`EvalError`] encountered; there is no partial result.
///
/// # Example
/// ```
/// use calcula::interpreter::{
///     config::Config, functions::FunctionTable, parser::core::evaluate,
/// };
///
/// let functions = FunctionTable::with_builtins();
/// let value = evaluate("2 ^4 ^0,5", Config::new(',').unwrap(), &functions).unwrap();
/// assert_eq!(value, 4.0);
/// ```
pub fn evaluate(source: &str, config: Config, functions: &FunctionTable) -> EvalResult<f64> {
    Parser::new(source, config, functions)?.evaluate()
}
