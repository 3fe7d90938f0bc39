//! Field rules shared by the portal's record types.

use crate::core::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern compiles");
    static ref URL_RE: Regex =
        Regex::new(r"^https?://[A-Za-z0-9\-._~%]+(:[0-9]{1,5})?(/[^\s]*)?$")
            .expect("url pattern compiles");
}

pub fn min_chars(
    field: &str,
    value: &str,
    min: usize,
    message: &str,
) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

pub fn email(field: &str, value: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::new(field, "Invalid email address"));
    }
    Ok(())
}

pub fn url(field: &str, value: &str, message: &str) -> Result<(), ValidationError> {
    if !URL_RE.is_match(value) {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

/// Optional text fields accept either nothing, an empty string, or a valid value.
pub fn optional<F>(value: Option<&str>, rule: F) -> Result<(), ValidationError>
where
    F: FnOnce(&str) -> Result<(), ValidationError>,
{
    match value {
        Some(value) if !value.is_empty() => rule(value),
        _ => Ok(()),
    }
}
