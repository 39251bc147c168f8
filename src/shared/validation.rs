use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::core::error::AppError;

lazy_static! {
    /// Regex for validating phone numbers
    /// Optional leading plus, then digits with optional spaces or hyphens
    /// - Valid: "+91 98765 43210", "112", "0471-2345678"
    /// - Invalid: "", "phone", "++911", "12"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9](?:[0-9 \-]*[0-9])?$").unwrap();
}

/// Reject strings that are empty once surrounding whitespace is removed
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Phone numbers need at least three digits and the shape of `PHONE_REGEX`
pub fn valid_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < 3 || !PHONE_REGEX.is_match(value.trim()) {
        return Err(ValidationError::new("phone"));
    }
    Ok(())
}

/// Parse a path id, naming the resource in the 400 message (`Invalid camp ID`)
pub fn parse_id(raw: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid {} ID", resource)))
}

/// Pick one human readable message out of a validation failure.
///
/// Fields are visited in name order so the same payload always reports the same message.
pub fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    for field in fields {
        if let Some(error) = field_errors.get(field).and_then(|list| list.first()) {
            return match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            };
        }
    }

    "Invalid request".to_string()
}
