use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Error near line {line}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
            ErrorImpl::FloatParseFailure { .. } => "FloatParseFailure",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Missing a closing `\"`?"))
            }
            ErrorImpl::UnterminatedBlockComment => {
                ErrorTip::Suggestion(String::from("Block comments end with `*/` and do not nest"))
            }
            ErrorImpl::FloatParseFailure { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedCharacter { character } => {
                ErrorTip::Suggestion(format!("Found `{}`", character.escape_debug()))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated block comment")]
    UnterminatedBlockComment,
    #[error("Error parsing float")]
    FloatParseFailure { token: String },
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },
}
