use thiserror::Error;

/// Ошибки разбора выражения пользовательской проверки
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredicateError {
    #[error("Expression is empty")]
    Empty,

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unexpected '{found}' at position {pos}")]
    UnexpectedToken { pos: usize, found: String },

    #[error("Unknown identifier '{name}' at position {pos}")]
    UnknownIdentifier { pos: usize, name: String },

    #[error("Unterminated string starting at position {pos}")]
    UnterminatedString { pos: usize },

    #[error("Invalid number '{text}' at position {pos}")]
    InvalidNumber { pos: usize, text: String },

    #[error("Invalid regular expression: {0}")]
    InvalidRegex(String),

    #[error("Unexpected input at position {pos}")]
    TrailingInput { pos: usize },

    #[error("Expression is nested too deeply at position {pos}")]
    TooDeep { pos: usize },

    #[error("Expression is too long ({len} characters, maximum {max})")]
    TooLong { len: usize, max: usize },
}
