use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("you must provide a selector")]
    Empty,

    #[error("nested {marker} not supported")]
    Nested { marker: &'static str },

    #[error("expected parenthesized argument after {marker}")]
    MissingArgument { marker: &'static str },

    #[error("provided selector is not valid")]
    Malformed { selector: String, message: String },

    #[error("invalid :hasText pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}
