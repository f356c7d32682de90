//! Coercion from a raw delimited-text field to a [`sli_core::Value`].

use sli_core::Value;

/// Parses one field: empty fields are absent, then
/// integer, then float (after `,` → `.` decimal normalization), then string.
pub fn parse_value(field: &str) -> Value {
    if field.is_empty() {
        return Value::Absent;
    }
    if is_plain_integer(field) {
        if let Ok(i) = field.parse::<i64>() {
            return Value::Int(i);
        }
    }
    let normalized = field.replace(',', ".");
    if normalized.contains('.') {
        if let Ok(f) = normalized.parse::<f64>() {
            return Value::Float(f);
        }
    }
    Value::Str(field.to_string())
}

fn is_plain_integer(field: &str) -> bool {
    let digits = field.strip_prefix(['+', '-']).unwrap_or(field);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
