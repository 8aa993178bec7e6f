//! Domain layer - Core business entities and rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `User` entity, the validation rules applied before registration, and
//! the normalization applied before persistence.

pub mod constants;
pub mod error;
pub mod normalization;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use normalization::{normalize, normalize_email};
pub use user::User;
pub use validation::{
    is_valid_email, validate_email_format, validate_required_fields,
    validate_salary_range,
};
