//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

use sea_orm::SqlErr;

#[derive(Debug)]
pub enum DomainError {
    /// Movie, artist or user not found
    NotFound,
    /// Validation error with message
    Validation(String),
    /// The user already owns this movie
    AlreadyPurchased,
    /// Uniqueness conflict other than a repeat purchase (e.g. taken username)
    Conflict(String),
    /// Missing or rejected credentials
    Unauthorized,
    /// Database/persistence error
    Database(String),
    /// Export rendering failed
    Export(String),
    /// Generic internal error
    Internal(String),
}

impl DomainError {
    /// Maps a database error raised by an insert/update, turning a unique
    /// constraint violation into the given domain error.
    pub fn on_unique_violation(err: sea_orm::DbErr, conflict: DomainError) -> DomainError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
            _ => DomainError::from(err),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::AlreadyPurchased => write!(f, "Movie already purchased"),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Unauthorized => write!(f, "Invalid credentials"),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::Export(msg) => write!(f, "Export error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
