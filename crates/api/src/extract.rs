//! Request body extractors whose rejections use the API error format.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use mediashelf_core::error::CoreError;
use mediashelf_core::validation::{FieldErrors, MSG_REQUIRED};

use crate::error::AppError;

/// `axum::Json` with rejections mapped through [`AppError`].
///
/// A body that is valid JSON but does not fit the target type becomes a 422
/// with per-field errors; anything else (bad syntax, wrong content type)
/// becomes a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Core(CoreError::InvalidFields(body_field_errors(&err.body_text())))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Attribute a deserialization failure to the field it names.
///
/// `text` looks like `Failed to deserialize ...: <path>: <message> at line 1 column 9`
/// or `Failed to deserialize ...: missing field `name` at line 1 column 9`.
/// Failures that name no field are reported under `body`.
fn body_field_errors(text: &str) -> FieldErrors {
    let detail = text.split_once(": ").map_or(text, |(_, d)| d);
    let detail = detail.split(" at line ").next().unwrap_or(detail);

    let mut errors = FieldErrors::new();
    if let Some(field) = detail
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(field, _)| field)
    {
        errors.add(field, MSG_REQUIRED);
        return errors;
    }

    match detail.split_once(": ") {
        Some((path, message))
            if !path.is_empty()
                && path.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
        {
            errors.add(path, message);
        }
        _ => errors.add("body", detail),
    }
    errors
}
