//! Core error types for Bytebank.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the account system.
///
/// Business rule violations come from the service layer and always carry a
/// human-readable message. Database errors come from the store and are passed
/// through the service untouched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),
}

impl Error {
    /// Builds a business rule violation from any message.
    pub fn business_rule(message: impl Into<String>) -> Self {
        Error::BusinessRule(message.into())
    }

    /// Returns true if this error is a business rule violation.
    pub fn is_business_rule(&self) -> bool {
        matches!(self, Error::BusinessRule(_))
    }

    /// Returns the message of a business rule violation.
    pub fn business_rule_message(&self) -> Option<&str> {
        match self {
            Error::BusinessRule(message) => Some(message.as_str()),
            Error::Database(_) => None,
        }
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create the pool or check a connection out of it.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate account number).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A database transaction failed, including failed rollbacks.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_rule_display() {
        let err = Error::business_rule("Insufficient balance");
        assert_eq!(
            err.to_string(),
            "Business rule violation: Insufficient balance"
        );
        assert!(err.is_business_rule());
        assert_eq!(err.business_rule_message(), Some("Insufficient balance"));
    }

    #[test]
    fn test_database_error_is_not_business_rule() {
        let err: Error = DatabaseError::QueryFailed("disk I/O error".to_string()).into();
        assert!(!err.is_business_rule());
        assert_eq!(err.business_rule_message(), None);
        assert_eq!(
            err.to_string(),
            "Database operation failed: Database query failed: disk I/O error"
        );
    }
}
