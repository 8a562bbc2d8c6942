//! Field-level validation for create-forms and JSON payloads.
//!
//! HTML forms post every value as a string, with unselected choices and blank
//! inputs arriving as `""`. The parsers here treat blank as absent and record
//! one message per offending field so the caller can re-render the form.

use std::ops::RangeInclusive;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_WHOLE_NUMBER: &str = "Enter a whole number.";
pub const MSG_INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// Maximum length of names and titles.
pub const MAX_NAME_LEN: u64 = 200;

/// Ordered `field -> messages` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// `Ok(())` when no field failed, otherwise [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }

    /// Merge the failures reported by a `validator` derive.
    pub fn extend_from(&mut self, errors: &validator::ValidationErrors) {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        for (field, failures) in fields {
            for failure in failures {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string());
                self.add(field.to_string(), message);
            }
        }
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        fields.extend_from(&errors);
        fields
    }
}

/// Run a `validator` derive and convert any failure into [`CoreError::InvalidFields`].
pub fn validate_payload<T: validator::Validate>(payload: &T) -> Result<(), CoreError> {
    payload
        .validate()
        .map_err(|e| CoreError::InvalidFields(FieldErrors::from(e)))
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a required text field, trimming whitespace and enforcing [`MAX_NAME_LEN`].
pub fn required_text(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<String> {
    match non_blank(raw) {
        None => {
            errors.add(field, MSG_REQUIRED);
            None
        }
        Some(value) if value.chars().count() as u64 > MAX_NAME_LEN => {
            errors.add(
                field,
                format!("Ensure this value has at most {MAX_NAME_LEN} characters."),
            );
            None
        }
        Some(value) => Some(value.to_string()),
    }
}

/// Parse an optional text field; blank becomes `None`.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    non_blank(raw).map(str::to_string)
}

/// Parse a required foreign-key choice.
pub fn required_id(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<DbId> {
    match non_blank(raw) {
        None => {
            errors.add(field, MSG_REQUIRED);
            None
        }
        Some(value) => parse_id(errors, field, value),
    }
}

/// Parse an optional foreign-key choice; blank becomes `None`.
pub fn optional_id(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<DbId> {
    non_blank(raw).and_then(|value| parse_id(errors, field, value))
}

fn parse_id(errors: &mut FieldErrors, field: &str, value: &str) -> Option<DbId> {
    match value.parse::<DbId>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, MSG_INVALID_CHOICE);
            None
        }
    }
}

/// Parse an optional whole number constrained to `range`; blank becomes `None`.
pub fn optional_int(
    errors: &mut FieldErrors,
    field: &str,
    raw: Option<&str>,
    range: RangeInclusive<i32>,
) -> Option<i32> {
    let value = non_blank(raw)?;
    match value.parse::<i32>() {
        Ok(n) if range.contains(&n) => Some(n),
        Ok(n) if n < *range.start() => {
            errors.add(
                field,
                format!(
                    "Ensure this value is greater than or equal to {}.",
                    range.start()
                ),
            );
            None
        }
        Ok(_) => {
            errors.add(
                field,
                format!("Ensure this value is less than or equal to {}.", range.end()),
            );
            None
        }
        Err(_) => {
            errors.add(field, MSG_WHOLE_NUMBER);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct NamePayload {
        #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters."))]
        name: String,
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let mut errors = FieldErrors::new();
        assert_eq!(required_text(&mut errors, "title", Some("   ")), None);
        assert_eq!(required_id(&mut errors, "genre", Some("")), None);
        assert_eq!(required_id(&mut errors, "system", None), None);
        assert_eq!(errors.field_names(), vec!["title", "genre", "system"]);
        assert_eq!(errors.get("genre"), Some(&[MSG_REQUIRED.to_string()][..]));
    }

    #[test]
    fn overlong_text_is_rejected() {
        let mut errors = FieldErrors::new();
        let long = "x".repeat(201);
        assert_eq!(required_text(&mut errors, "title", Some(&long)), None);
        assert!(errors.contains("title"));
    }

    #[test]
    fn text_is_trimmed() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            required_text(&mut errors, "title", Some("  Metroid ")),
            Some("Metroid".to_string())
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_id_accepts_blank_and_rejects_junk() {
        let mut errors = FieldErrors::new();
        assert_eq!(optional_id(&mut errors, "series", Some("")), None);
        assert!(errors.is_empty());
        assert_eq!(optional_id(&mut errors, "series", Some("abc")), None);
        assert_eq!(optional_id(&mut errors, "developer", Some("-4")), None);
        assert_eq!(errors.field_names(), vec!["series", "developer"]);
        assert_eq!(optional_id(&mut errors, "other", Some("12")), Some(12));
    }

    #[test]
    fn optional_int_checks_range() {
        let mut errors = FieldErrors::new();
        assert_eq!(optional_int(&mut errors, "copies", Some("3"), 1..=999), Some(3));
        assert_eq!(optional_int(&mut errors, "copies", Some("0"), 1..=999), None);
        assert_eq!(optional_int(&mut errors, "year", Some("3000"), 1950..=2100), None);
        assert_eq!(optional_int(&mut errors, "n", Some("1.5"), 1..=9), None);
        assert_eq!(errors.field_names(), vec!["copies", "year", "n"]);
        assert_eq!(errors.get("n"), Some(&[MSG_WHOLE_NUMBER.to_string()][..]));
    }

    #[test]
    fn into_result_wraps_errors() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("name", MSG_REQUIRED);
        assert_matches!(errors.into_result(), Err(CoreError::InvalidFields(f)) if f.contains("name"));
    }

    #[test]
    fn validator_failures_convert_to_field_errors() {
        let payload = NamePayload {
            name: String::new(),
        };
        let err = validate_payload(&payload).unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(fields) => {
            assert_eq!(
                fields.get("name"),
                Some(&["Name must be 1-200 characters.".to_string()][..])
            );
        });
    }
}
