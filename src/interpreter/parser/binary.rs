use crate::{
    error::EvalError,
    interpreter::{
        lexer::Token,
        parser::core::{EvalResult, Parser},
    },
};

/// Arithmetic operators recognized between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOperator {
    /// Applies the operator to two operands.
    ///
    /// Division and modulo compare the divisor against exact floating-point
    /// zero; tiny non-zero divisors are accepted.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::parser::binary::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mod.apply(7.0, 4.0, 0).unwrap(), 3.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0, 0).is_err());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn apply(self, left: f64, right: f64, position: usize) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div | Self::Mod if right == 0.0 => Err(EvalError::DivisionByZero { position }),
            Self::Div => Ok(left / right),
            Self::Mod => Ok(left % right),
            Self::Pow => Ok(left.powf(right)),
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use calcula::interpreter::{
///     lexer::Token,
///     parser::binary::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

impl Parser<'_, '_> {
    /// Parses and evaluates addition and subtraction.
    ///
    /// Left-associative: operands are folded from left to right, so
    /// `2 + 3 - 1` is `(2 + 3) - 1`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(crate) fn parse_expression(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_term()?;
        loop {
            if let Some((token, position)) = self.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let position = *position;
                self.advance()?;
                let right = self.parse_term()?;
                left = op.apply(left, right, position)?;
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses and evaluates multiplication, division and modulo.
    ///
    /// Left-associative, like [`Parser::parse_expression`]. Each operand may
    /// carry one leading sign.
    ///
    /// The rule is: `term := signed_factor (("*" | "/" | "%") signed_factor)*`
    pub(crate) fn parse_term(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_signed_factor()?;
        loop {
            if let Some((token, position)) = self.peek()
               && let Some(op) = token_to_binary_operator(token)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
            {
                let position = *position;
                self.advance()?;
                let right = self.parse_signed_factor()?;
                left = op.apply(left, right, position)?;
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses and evaluates exponentiation.
    ///
    /// Right-associative: the exponent is parsed by recursing into this
    /// production, so `2 ^ 4 ^ 0.5` is `2 ^ (4 ^ 0.5)`.
    ///
    /// The rule is: `power := atom ("^" power)?`
    pub(crate) fn parse_power(&mut self) -> EvalResult<f64> {
        let base = self.parse_atom()?;
        if let Some((Token::Caret, position)) = self.peek() {
            let position = *position;
            self.advance()?;
            let exponent = self.nested(position, Self::parse_power)?;
            return BinaryOperator::Pow.apply(base, exponent, position);
        }
        Ok(base)
    }
}
