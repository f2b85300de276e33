//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {id}")]
    NotFound { id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A durable commit failed. Surfaced to the caller as recoverable
    /// rather than aborting the process.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Image blob store errors.
#[derive(Debug, Error)]
pub enum ImageStoreError {
    /// The underlying write failed (disk full, permissions, missing
    /// directory). Retryable; the dependent post write must be aborted.
    #[error("Failed to write image: {0}")]
    WriteFailed(String),

    /// The reference does not resolve to a readable blob. Callers
    /// substitute a placeholder instead of failing.
    #[error("Image not found: {0}")]
    NotFound(String),
}
