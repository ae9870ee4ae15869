//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every failure the core can produce is a typed, synchronous business-rule
/// error carrying a human-readable message. Nothing here is retried; the
/// transport layer maps variants to protocol responses.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ownership error: {0}")]
    Ownership(String),

    #[error("Immutable field: {0}")]
    ImmutableField(String),

    #[error("Currency mismatch: {0}")]
    CurrencyMismatch(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Deliberately generic: covers both unknown email and wrong password
    /// so callers cannot probe for account existence.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Storage failure surfaced through a repository port.
    #[error("Repository error: {0}")]
    Repository(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an ownership error
    pub fn ownership(msg: impl Into<String>) -> Self {
        Self::Ownership(msg.into())
    }

    /// Create a currency mismatch error
    pub fn currency_mismatch(msg: impl Into<String>) -> Self {
        Self::CurrencyMismatch(msg.into())
    }

    /// Create a repository error
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
