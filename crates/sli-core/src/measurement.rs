//! Immutable measurement records: the unit of data flowing through the ring buffer.

use std::fmt;

/// A single field value. Absent models a blank/unparseable field from the source,
/// not an error — the source keeps such fields rather than rejecting the row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Absent,
}

impl Value {
    /// Best-effort numeric view, used by guard comparisons. Absent and `Str` never compare.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(_) | Value::Absent => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Absent => write!(f, ""),
        }
    }
}

/// An ordered `name -> Value` mapping. Insertion order is preserved (column order
/// from the header row matters for display), but lookups are by name.
///
/// Column counts are small (tens, not thousands), so a linear scan beats the
/// bookkeeping of a hash map for both construction and lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns(Vec<(String, Value)>);

impl Columns {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a column. Does not deduplicate — callers (the trace source) are
    /// expected to hand in each header name once.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.0.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Columns {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An immutable measurement: a monotonically assigned `index` plus its columns.
///
/// `measurement_number()` (`index + 1`) is a display-only convenience — the
/// wire/API representation always uses the 0-based `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    index: u64,
    columns: Columns,
}

impl Measurement {
    pub fn new(index: u64, columns: Columns) -> Self {
        Self { index, columns }
    }

    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// 1-based counter for human display only; never used in comparisons.
    #[inline]
    pub fn measurement_number(&self) -> u64 {
        self.index + 1
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {{", self.measurement_number())?;
        for (i, (name, value)) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(index: u64, pairs: &[(&str, Value)]) -> Measurement {
        let cols: Columns = pairs.iter().map(|(n, v)| ((*n).to_string(), v.clone())).collect();
        Measurement::new(index, cols)
    }

    #[test]
    fn measurement_number_is_one_based() {
        let meas = m(0, &[("v", Value::Int(1))]);
        assert_eq!(meas.index(), 0);
        assert_eq!(meas.measurement_number(), 1);
    }

    #[test]
    fn column_lookup_by_name() {
        let meas = m(3, &[("v", Value::Int(42)), ("label", Value::Str("ok".into()))]);
        assert_eq!(meas.get("v"), Some(&Value::Int(42)));
        assert_eq!(meas.get("label"), Some(&Value::Str("ok".into())));
        assert_eq!(meas.get("missing"), None);
    }

    #[test]
    fn absent_value_has_no_numeric_view() {
        assert_eq!(Value::Absent.as_f64(), None);
        assert_eq!(Value::Str("x".into()).as_f64(), None);
        assert_eq!(Value::Int(5).as_f64(), Some(5.0));
        assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
    }
}
