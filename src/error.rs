use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    NonText = 11,
    IoError = 12,
    UnknownFormat = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    Exact(usize),
    MultipleOf(usize),
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::Exact(n) => write!(f, "exactly {}", n),
            LengthConstraint::MultipleOf(n) => write!(f, "multiple of {}", n),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        expected: LengthConstraint,
        actual: usize,
    },

    #[error("invalid padding: {message}")]
    InvalidPadding { message: String },

    #[error("not valid UTF-8 text: {message}")]
    NonText { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown format: {name}")]
    UnknownFormat { name: String },
}

impl ConvertError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ConvertError::InvalidInput { .. }
            | ConvertError::InvalidCharacter { .. }
            | ConvertError::InvalidLength { .. }
            | ConvertError::InvalidPadding { .. } => ExitCode::InvalidInput,
            ConvertError::NonText { .. } => ExitCode::NonText,
            ConvertError::Io(_) => ExitCode::IoError,
            ConvertError::UnknownFormat { .. } => ExitCode::UnknownFormat,
        }
    }

    // Helper constructors for common error patterns
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn invalid_length(expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    pub fn invalid_padding(message: impl Into<String>) -> Self {
        Self::InvalidPadding {
            message: message.into(),
        }
    }

    pub fn non_text(message: impl Into<String>) -> Self {
        Self::NonText {
            message: message.into(),
        }
    }

    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
