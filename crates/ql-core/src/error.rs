//! # AppError
//!
//! Centralized error handling for Quill.
//! Every port returns these, so the HTTP layer can map them without
//! knowing which plugin produced them.

use thiserror::Error;

/// The primary error type for all ql-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Resource not found (e.g., Article, Comment)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., empty comment body, malformed JSON)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// The request carried credentials we could not make sense of
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Anything else. Never shown verbatim to callers.
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn article_not_found(id: impl ToString) -> Self {
        AppError::NotFound("Article".to_string(), id.to_string())
    }

    pub fn comment_not_found(id: impl ToString) -> Self {
        AppError::NotFound("Comment".to_string(), id.to_string())
    }
}

/// A specialized Result type for Quill logic.
pub type Result<T> = std::result::Result<T, AppError>;
