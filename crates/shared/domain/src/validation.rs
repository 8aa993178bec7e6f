//! User validation rules.
//!
//! Each check returns the user unchanged on success so that the checks can be
//! chained with `and_then`. Callers must run them in the order
//! required fields → email format → salary range; later checks assume the
//! earlier ones passed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    EMAIL_PATTERN, FIELD_BASE_SALARY, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME,
    MAX_BASE_SALARY, MIN_BASE_SALARY,
};
use crate::error::{DomainError, DomainResult};
use crate::user::User;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Reject users missing first name, last name, email or base salary.
pub fn validate_required_fields(user: &User) -> DomainResult<&User> {
    if is_blank(&user.first_name) {
        return Err(DomainError::required(FIELD_FIRST_NAME));
    }
    if is_blank(&user.last_name) {
        return Err(DomainError::required(FIELD_LAST_NAME));
    }
    if is_blank(&user.email) {
        return Err(DomainError::required(FIELD_EMAIL));
    }
    if user.base_salary.is_none() {
        return Err(DomainError::required(FIELD_BASE_SALARY));
    }
    Ok(user)
}

/// Check whether a (trimmed) email matches the accepted pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Reject users whose email does not look like `local@domain.tld`.
pub fn validate_email_format(user: &User) -> DomainResult<&User> {
    if !is_valid_email(&user.email) {
        return Err(DomainError::invalid_email(user.email.trim()));
    }
    Ok(user)
}

/// Reject users whose base salary lies outside [0, 15,000,000].
///
/// An absent salary is reported as a missing field.
pub fn validate_salary_range(user: &User) -> DomainResult<&User> {
    let salary = user
        .base_salary
        .ok_or_else(|| DomainError::required(FIELD_BASE_SALARY))?;

    if salary < MIN_BASE_SALARY || salary > MAX_BASE_SALARY {
        return Err(DomainError::SalaryOutOfRange(salary));
    }
    Ok(user)
}
