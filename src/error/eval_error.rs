#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant carries the byte offset in the input where the offending
/// lexeme starts. Evaluation is all-or-nothing: the first error aborts it.
pub enum EvalError {
    /// An operand was required but the current token cannot start one.
    NotANumber {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Input ended while an operand or a closing bracket was still expected.
    EndOfExpression {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing bracket was read with no matching `(`, or a different token
    /// was found where `)` was expected.
    MissingBracket {
        /// Byte offset of the offending token.
        position: usize,
    },
    /// The right operand of `/` or `%` was exactly zero.
    DivisionByZero {
        /// Byte offset of the operator.
        position: usize,
    },
    /// The identifier does not name a known function.
    UnknownFunction {
        /// The identifier as written.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// A numeric lexeme could not be converted, e.g. it holds two decimal
    /// separators.
    MalformedNumber {
        /// The lexeme as written.
        lexeme:   String,
        /// Byte offset of the lexeme.
        position: usize,
    },
    /// A character matches no lexeme class.
    UnknownCharacter {
        /// The character found.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// Tokens remain after a complete expression.
    TrailingInput {
        /// The first unconsumed token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Brackets, function applications or exponents are nested deeper than
    /// the evaluator allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// Byte offset of the token that opened one level too many.
        position: usize,
    },
}

/// Fieldless discriminant of [`EvalError`].
///
/// Lets callers pick a message or compare failures without caring about
/// positions.
///
/// # Example
/// ```
/// use calcula::{error::ErrorKind, evaluate};
///
/// let err = evaluate("3/0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotANumber,
    EndOfExpression,
    MissingBracket,
    DivisionByZero,
    UnknownFunction,
    MalformedNumber,
    UnknownCharacter,
    TrailingInput,
    NestingTooDeep,
}

impl EvalError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::EndOfExpression { .. } => ErrorKind::EndOfExpression,
            Self::MissingBracket { .. } => ErrorKind::MissingBracket,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::UnknownCharacter { .. } => ErrorKind::UnknownCharacter,
            Self::TrailingInput { .. } => ErrorKind::TrailingInput,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Returns the byte offset in the input where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NotANumber { position, .. }
            | Self::EndOfExpression { position }
            | Self::MissingBracket { position }
            | Self::DivisionByZero { position }
            | Self::UnknownFunction { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::UnknownCharacter { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { token, position } => {
                write!(f, "Error at {position}: Expected a number but found {token}.")
            },
            Self::EndOfExpression { position } => {
                write!(f, "Error at {position}: Unexpected end of expression.")
            },
            Self::MissingBracket { position } => {
                write!(f, "Error at {position}: Missing or unmatched bracket.")
            },
            Self::DivisionByZero { position } => write!(f, "Error at {position}: Division by zero."),
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at {position}: Unknown function '{name}'.")
            },
            Self::MalformedNumber { lexeme, position } => {
                write!(f, "Error at {position}: Malformed number '{lexeme}'.")
            },
            Self::UnknownCharacter { character, position } => {
                write!(f, "Error at {position}: Unknown character {character:?}.")
            },
            Self::TrailingInput { token, position } => write!(f,
                                                              "Error at {position}: Extra input after expression: {token}."),
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at {position}: Expression is nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for EvalError {}
