//! Text canonicalization applied after validation and before persistence.

use crate::user::User;

/// Canonical form of an email address: trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn trim_optional(value: Option<&str>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Build a normalized copy of the user.
///
/// Email is trimmed and lower-cased; names, address and phone are trimmed.
/// Absent optional fields stay absent. Applying it twice yields the same value.
pub fn normalize(user: &User) -> User {
    User {
        email: normalize_email(&user.email),
        first_name: user.first_name.trim().to_string(),
        last_name: user.last_name.trim().to_string(),
        address: trim_optional(user.address.as_deref()),
        phone: trim_optional(user.phone.as_deref()),
        ..user.clone()
    }
}
