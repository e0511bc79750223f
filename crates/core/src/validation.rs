//! Request input validation helpers.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] converts the
//! field errors into a single [`CoreError::Validation`] message so handlers
//! can propagate it with `?`.

use validator::Validate;

use crate::error::CoreError;

/// Run the derived validation rules on `input`.
///
/// The error message lists every failing field as `field: message`, sorted
/// by field name and joined with `"; "`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed '{}' check", e.code));
                format!("{field}: {message}")
            })
        })
        .collect();
    fields.sort();

    Err(CoreError::Validation(fields.join("; ")))
}

/// Category names are stored and matched lowercase.
pub fn normalize_category_name(name: &str) -> String {
    name.trim().to_lowercase()
}
