use crate::safety::Rejection;
use thiserror::Error;

/// Why a candidate draft was turned away before anything was written.
///
/// The `Display` text is meant to be shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The message was empty after trimming.
    EmptyMessage,
    /// The safety scan flagged identifying content.
    Unsafe(Rejection),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyMessage => write!(f, "Please write an unsent message first."),
            ValidationError::Unsafe(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Error, Debug)]
pub enum DraftsError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl DraftsError {
    /// True for errors the user can fix by changing their input.
    pub fn is_validation(&self) -> bool {
        matches!(self, DraftsError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, DraftsError>;
