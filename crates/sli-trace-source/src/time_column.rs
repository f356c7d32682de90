//! Time-column heuristic and the `"D days HH:MM:SS.fff"` duration format.

use sli_core::Value;

/// Picks the time column: the first header containing
/// `time` (case-insensitive), equal to `t`, or containing `delta`; otherwise
/// the first column.
pub fn detect_time_column(headers: &[String]) -> usize {
    headers
        .iter()
        .position(|h| {
            let lower = h.to_lowercase();
            lower.contains("time") || lower == "t" || lower.contains("delta")
        })
        .unwrap_or(0)
}

/// Interprets a time-column value as seconds. Numeric values (already
/// coerced by [`crate::value::parse_value`]) are seconds directly; string
/// values are parsed as `"D days HH:MM:SS.fff"`.
pub fn value_as_seconds(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::Str(s) => parse_days_duration(s),
        Value::Absent => None,
    }
}

/// Parses `"D days HH:MM:SS.fff"` into seconds = `D*86400 + HH*3600 + MM*60 + SS.fff`.
pub fn parse_days_duration(text: &str) -> Option<f64> {
    let (days_part, rest) = text.split_once(" days ")?;
    let days: f64 = days_part.trim().parse().ok()?;

    let mut fields = rest.splitn(3, ':');
    let hours: f64 = fields.next()?.trim().parse().ok()?;
    let minutes: f64 = fields.next()?.trim().parse().ok()?;
    let seconds: f64 = fields.next()?.trim().parse().ok()?;

    Some(days * 86400.0 + hours * 3600.0 + minutes * 60.0 + seconds)
}
