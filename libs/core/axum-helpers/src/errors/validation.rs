//! Flattens `validator` errors into a `field -> message` map for the error envelope.

use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

/// One human-readable message per invalid field.
///
/// The first failing rule of each field wins. A message set on the rule
/// itself (`#[validate(custom(..., message = "..."))]`) takes precedence over
/// the generated one.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first()
                .map(|err| (field.to_string(), describe(&field, err)))
        })
        .collect()
}

fn describe(field: &str, err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    let name = title_case(field);
    let min = err.params.get("min");
    let max = err.params.get("max");

    match err.code.as_ref() {
        "required" => format!("{name} is required"),
        "length" => match (min, max) {
            (Some(min), Some(max)) => {
                format!("{name} must be between {min} and {max} characters")
            }
            (Some(min), None) => format!("{name} must be at least {min} characters"),
            (None, Some(max)) => format!("{name} must be at most {max} characters"),
            (None, None) => format!("{name} has an invalid length"),
        },
        "range" => match (min, max) {
            (Some(min), Some(max)) => format!("{name} must be between {min} and {max}"),
            (Some(min), None) => format!("{name} must be greater than or equal to {min}"),
            (None, Some(max)) => format!("{name} must be less than or equal to {max}"),
            (None, None) => format!("{name} is out of range"),
        },
        "email" => format!("{name} must be a valid email address"),
        "url" => format!("{name} must be a valid URL"),
        _ => format!("{name} is invalid"),
    }
}

fn title_case(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
