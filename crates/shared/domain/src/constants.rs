//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

use rust_decimal::Decimal;

// =============================================================================
// Salary
// =============================================================================

/// Lowest accepted base salary (inclusive)
pub const MIN_BASE_SALARY: Decimal = Decimal::ZERO;

/// Highest accepted base salary (inclusive)
pub const MAX_BASE_SALARY: Decimal = Decimal::from_parts(15_000_000, 0, 0, false, 0);

/// Decimal places kept when a salary is stored
pub const SALARY_SCALE: u32 = 2;

// =============================================================================
// Validation
// =============================================================================

/// Accepted email shape: `local-part@label.label.tld`.
///
/// The local part allows letters, digits and `+_.-`; domain labels allow
/// letters, digits and `-`; the top-level label is at least two letters.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$";

/// Age from which a user counts as an adult
pub const ADULT_AGE_YEARS: u32 = 18;

// =============================================================================
// Field names (as exposed in the JSON representation)
// =============================================================================

pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_BASE_SALARY: &str = "baseSalary";
