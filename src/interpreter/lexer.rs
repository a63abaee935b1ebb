use logos::{Lexer, Logos};

use crate::{
    error::EvalError,
    interpreter::{config::Config, parser::core::EvalResult},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The end of input is not a token: the tokenizer reports it as `None`.
/// Whitespace between tokens is skipped and never produces a token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// The decimal separator is only known at runtime, so the regex matches
    /// the leading digit run and the callback extends it through the
    /// separator. A number starting with the separator is picked up by the
    /// catch-all pattern below.
    #[regex(r"[0-9]+", lex_number)]
    #[regex(r"[^0-9a-zA-Z \t\r\n\f+\-*/%^()]", lex_stray)]
    Number(f64),
    /// Identifier tokens naming functions, such as `cos`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
pub struct LexerExtras {
    /// The configured decimal separator.
    pub decimal_separator: char,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { decimal_separator: Config::default().decimal_separator() }
    }
}

/// Failures raised inside lexer callbacks.
///
/// Input that matches no pattern at all is reported with the default variant.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    #[default]
    UnknownCharacter,
    MalformedNumber,
}

/// Extends a digit run through digits and decimal separators and converts it.
///
/// # Errors
/// Returns `LexError::MalformedNumber` if the lexeme holds more than one
/// separator or does not contain a single digit.
fn lex_number(lex: &mut Lexer<Token>) -> Result<f64, LexError> {
    let separator = lex.extras.decimal_separator;
    let mut separators = usize::from(lex.slice().starts_with(separator));
    let mut extra = 0;
    for c in lex.remainder().chars() {
        if c.is_ascii_digit() {
            extra += 1;
        } else if c == separator {
            separators += 1;
            extra += c.len_utf8();
        } else {
            break;
        }
    }
    lex.bump(extra);

    if separators > 1 {
        return Err(LexError::MalformedNumber);
    }
    lex.slice()
       .replace(separator, ".")
       .parse()
       .map_err(|_| LexError::MalformedNumber)
}

/// Handles a character no other pattern claims: the decimal separator starts
/// a number, anything else is unknown.
fn lex_stray(lex: &mut Lexer<Token>) -> Result<f64, LexError> {
    if lex.slice().starts_with(lex.extras.decimal_separator) {
        lex_number(lex)
    } else {
        Err(LexError::UnknownCharacter)
    }
}

/// Lazily produces tokens paired with their byte offset in the input.
///
/// The cursor only moves forward. Once the input is exhausted every further
/// call yields `None`.
///
/// # Example
/// ```
/// use calcula::interpreter::{
///     config::Config,
///     lexer::{Token, Tokenizer},
/// };
///
/// let mut tokens = Tokenizer::new("2 * 1,5", Config::new(',').unwrap());
/// assert_eq!(tokens.next_token().unwrap(), Some((Token::Number(2.0), 0)));
/// assert_eq!(tokens.next_token().unwrap(), Some((Token::Star, 2)));
/// assert_eq!(tokens.next_token().unwrap(), Some((Token::Number(1.5), 4)));
/// assert_eq!(tokens.next_token().unwrap(), None);
///
/// // As an iterator, errors are items too.
/// let tokens: Vec<_> = Tokenizer::new("(1 ?", Config::default()).collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Ok((Token::Number(1.0), 1)));
/// assert!(tokens[2].is_err());
/// ```
pub struct Tokenizer<'src> {
    lexer: Lexer<'src, Token>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source` using the separator from `config`.
    #[must_use]
    pub fn new(source: &'src str, config: Config) -> Self {
        let extras = LexerExtras { decimal_separator: config.decimal_separator() };
        Self { lexer: Token::lexer_with_extras(source, extras) }
    }

    /// Length of the input, i.e. the position reported for end of input.
    #[must_use]
    pub fn end(&self) -> usize {
        self.lexer.source().len()
    }

    /// Returns the next token and its offset, or `None` at end of input.
    ///
    /// # Errors
    /// - `EvalError::MalformedNumber` if a numeric lexeme cannot be converted.
    /// - `EvalError::UnknownCharacter` if a character matches no lexeme class.
    pub fn next_token(&mut self) -> EvalResult<Option<(Token, usize)>> {
        let Some(result) = self.lexer.next() else {
            return Ok(None);
        };
        let position = self.lexer.span().start;
        match result {
            Ok(token) => Ok(Some((token, position))),
            Err(LexError::MalformedNumber) => {
                Err(EvalError::MalformedNumber { lexeme: self.lexer.slice().to_string(),
                                                 position })
            },
            Err(LexError::UnknownCharacter) => {
                let character = self.lexer.slice().chars().next().unwrap_or_default();
                Err(EvalError::UnknownCharacter { character, position })
            },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = EvalResult<(Token, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
