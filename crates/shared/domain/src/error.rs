//! Domain-level errors.
//!
//! These errors represent business rule violations in the registration flow.
//! They are independent of infrastructure concerns (HTTP, database).

use rust_decimal::Decimal;
use thiserror::Error;

/// Business rule violations raised while registering a user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mandatory field is empty, blank or absent
    #[error("{0} is required")]
    RequiredFieldMissing(String),

    /// Email does not match the accepted pattern
    #[error("Invalid email format: {0}")]
    InvalidEmailFormat(String),

    /// Base salary outside the closed range [0, 15,000,000]
    #[error("Base salary must be between 0 and 15,000,000, got {0}")]
    SalaryOutOfRange(Decimal),

    /// Another user is already registered with this email
    #[error("Email is already registered: {0}")]
    DuplicateEmail(String),
}

impl DomainError {
    /// Create a required-field error
    pub fn required(field: impl Into<String>) -> Self {
        DomainError::RequiredFieldMissing(field.into())
    }

    /// Create an invalid-email error
    pub fn invalid_email(email: impl Into<String>) -> Self {
        DomainError::InvalidEmailFormat(email.into())
    }

    /// Create a duplicate-email error
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        DomainError::DuplicateEmail(email.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
