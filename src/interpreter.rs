/// The config module holds the settings an evaluation reads.
///
/// Configuration is validated when it is built and immutable afterwards, so a
/// running evaluation never observes a change.
///
/// # Responsibilities
/// - Validates and stores the decimal separator.
pub mod config;
/// The functions module maps names to unary functions.
///
/// The table is configuration rather than grammar: embedding applications can
/// add entries without touching the parser.
///
/// # Responsibilities
/// - Provides the built-in functions (trigonometry in degrees, roots,
///   logarithms, rounding).
/// - Stores user-registered closures.
pub mod functions;
/// The lexer module tokenizes expressions on demand.
///
/// The lexer reads the raw text and produces one token at a time, each paired
/// with its byte offset, skipping whitespace in between.
///
/// # Responsibilities
/// - Recognizes numbers with the configured decimal separator, identifiers,
///   operators and brackets.
/// - Reports malformed numbers and unknown characters.
pub mod lexer;
/// The parser module evaluates expressions by recursive descent.
///
/// Each grammar production computes its value as soon as it has consumed its
/// tokens; no syntax tree is built or kept.
///
/// # Responsibilities
/// - Applies precedence and associativity rules.
/// - Applies operators and functions.
/// - Reports syntax and arithmetic errors with their position.
pub mod parser;
