use crate::{
    error::EvalError,
    interpreter::{
        functions::UnaryFn,
        lexer::Token,
        parser::core::{EvalResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses an operand with at most one leading sign.
    ///
    /// The sign applies to the whole power that follows, so `-2 ^ 2` is
    /// `-(2 ^ 2)`. A second sign is not folded: in `--4` the inner `-` reaches
    /// [`Parser::parse_atom`] and is rejected there as `NotANumber`.
    ///
    /// Grammar:
    /// ```text
    ///     signed_factor := ("+" | "-")? power
    /// ```
    pub(crate) fn parse_signed_factor(&mut self) -> EvalResult<f64> {
        match self.peek() {
            Some((Token::Minus, _)) => {
                self.advance()?;
                Ok(-self.parse_power()?)
            },
            Some((Token::Plus, _)) => {
                self.advance()?;
                self.parse_power()
            },
            _ => self.parse_power(),
        }
    }

    /// Parses an atom: the smallest unit that yields a value.
    ///
    /// Grammar:
    /// ```text
    ///     atom := NUMBER
    ///           | "(" expression ")"
    ///           | IDENTIFIER atom
    /// ```
    ///
    /// # Errors
    /// - `EndOfExpression` if the input is exhausted.
    /// - `MissingBracket` if the lookahead is an unmatched `)`.
    /// - `UnknownFunction` if the identifier is not in the function table.
    /// - `NestingTooDeep` if a bracket or function application opens one
    ///   level too many.
    /// - `NotANumber` for any other token.
    pub(crate) fn parse_atom(&mut self) -> EvalResult<f64> {
        let Some((token, position)) = self.peek() else {
            return Err(EvalError::EndOfExpression { position: self.end() });
        };

        match token {
            Token::Number(value) => {
                let value = *value;
                self.advance()?;
                Ok(value)
            },
            Token::LParen => {
                let position = *position;
                self.nested(position, Self::parse_grouping)
            },
            Token::Identifier(name) => {
                let functions = self.functions;
                let func = functions.get(name)
                                    .ok_or_else(|| EvalError::UnknownFunction { name:     name.clone(),
                                                                                position: *position, })?;
                let position = *position;
                self.nested(position, |parser| parser.parse_function_call(func))
            },
            Token::RParen => Err(EvalError::MissingBracket { position: *position }),
            tok => Err(EvalError::NotANumber { token:    tok.to_string(),
                                               position: *position, }),
        }
    }

    /// Parses a parenthesized sub-expression.
    ///
    /// Expects the lookahead to be `(`.
    ///
    /// # Errors
    /// - `EndOfExpression` if the input ends before the closing `)`.
    /// - `MissingBracket` if another token stands where `)` belongs.
    fn parse_grouping(&mut self) -> EvalResult<f64> {
        self.advance()?;
        let value = self.parse_expression()?;
        match self.peek() {
            Some((Token::RParen, _)) => {
                self.advance()?;
                Ok(value)
            },
            Some((_, position)) => Err(EvalError::MissingBracket { position: *position }),
            None => Err(EvalError::EndOfExpression { position: self.end() }),
        }
    }

    /// Applies an already resolved function to the atom that follows its
    /// name.
    ///
    /// Expects the lookahead to be the function's identifier. The argument is
    /// a single atom, so `sin 30 + 1` is `(sin 30) + 1` and `cos cos 0`
    /// nests.
    fn parse_function_call(&mut self, func: &UnaryFn) -> EvalResult<f64> {
        self.advance()?;
        let argument = self.parse_atom()?;
        Ok(func(argument))
    }
}
