//! Conversion of `validator` results into [`CoreError::Validation`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived rules of `input` and flatten any failures into a single
/// validation error whose message names each offending field under
/// `location` (e.g. `body/rating must be between 0 and 10`).
pub fn validate_input<T: Validate>(location: &str, input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(location, &errors)))
}

/// Render validation failures as `location/field message` fragments.
///
/// Fields are sorted so the message is stable across runs.
fn describe(location: &str, errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let reason = err
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("failed '{}' check", err.code));
                format!("{location}/{field} {reason}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
