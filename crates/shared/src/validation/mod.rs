mod forms;
mod schema;

pub use self::forms::{ROLES, STUDENT_SCHEMA, USER_SCHEMA};
pub use self::schema::{FieldSchema, FieldSource, Rule, Schema};

use std::collections::BTreeMap;
use validator::ValidationErrors;

fn describe(field: &str, error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "required" => format!("{field} is required"),
            "email" => "Invalid email format".to_string(),
            "must_match" => format!("{field} does not match"),
            "length" => "Invalid length".to_string(),
            _ => format!("Invalid {field}"),
        })
}

/// First message per field, keyed and ordered by field name.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, list)| {
            list.first()
                .map(|e| (field.to_string(), describe(field.as_ref(), e)))
        })
        .collect()
}

/// `field: message` lines, sorted by field name.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut lines: Vec<(String, String)> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            lines.push((field.to_string(), describe(field.as_ref(), error)));
        }
    }

    lines.sort();
    lines
        .into_iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect()
}
