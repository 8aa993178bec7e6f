//! Log sanitization utilities for masking personal data.

/// Number of leading characters left visible when masking.
const VISIBLE_CHARS: usize = 3;

fn mask_prefix(value: &str) -> String {
    let visible: String = value.chars().take(VISIBLE_CHARS).collect();
    format!("{}***", visible)
}

/// Mask an email address for safe logging.
///
/// Keeps the first three characters of the local part and the whole domain:
/// `user@example.com` becomes `use***@example.com`. Input without `@` keeps
/// only its first three characters.
pub fn mask_email(email: &str) -> String {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", mask_prefix(local), domain),
        None => mask_prefix(email),
    }
}
