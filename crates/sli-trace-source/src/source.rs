//! A delimited-text trace source: header sniffing, row parsing, and the
//! time-column-aware duration function used for `REAL_DELTA_T` pacing.

use crate::delimiter::detect_delimiter;
use crate::time_column::{detect_time_column, value_as_seconds};
use crate::value::parse_value;
use sli_core::{Columns, Measurement, Value};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("trace source file has no header row")]
    EmptyFile,
    #[error("failed to read trace source: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered stream of [`Measurement`] parsed from a delimited text file.
pub struct CsvTraceSource {
    headers: Vec<String>,
    time_column: usize,
    measurements: Vec<Measurement>,
}

impl CsvTraceSource {
    /// Parses `contents`, auto-detecting the delimiter from the header row.
    /// an empty file is a fatal error raised before
    /// any thread starts consuming.
    pub fn from_str(contents: &str) -> Result<Self, SourceError> {
        let mut lines = contents.lines();
        let header_line = lines.next().ok_or(SourceError::EmptyFile)?;
        if header_line.trim().is_empty() {
            return Err(SourceError::EmptyFile);
        }

        let delimiter = detect_delimiter(header_line);
        let headers: Vec<String> = header_line.split(delimiter).map(str::trim).map(String::from).collect();
        let time_column = detect_time_column(&headers);

        let measurements = lines
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                let mut columns = Columns::new();
                let mut fields = line.split(delimiter);
                for header in &headers {
                    let field = fields.next().unwrap_or("").trim();
                    columns.push(header.clone(), parse_value(field));
                }
                Measurement::new(index as u64, columns)
            })
            .collect();

        Ok(Self { headers, time_column, measurements })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn into_measurements(self) -> Vec<Measurement> {
        self.measurements
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn time_column_name(&self) -> &str {
        &self.headers[self.time_column]
    }

    /// A duration function over the detected time column, suitable for
    /// `sli_core::TraceSemantics::with_duration_fn` in `REAL_DELTA_T` mode.
    /// A measurement missing the time column (or with an unparseable value)
    /// contributes zero to the delta; a negative delta clamps to zero.
    pub fn duration_fn(&self) -> impl Fn(&Measurement, &Measurement) -> Duration {
        let column = self.time_column_name().to_string();
        move |last, current| {
            let last_s = last.get(&column).and_then(value_as_seconds).unwrap_or(0.0);
            let current_s = current.get(&column).and_then(value_as_seconds).unwrap_or(0.0);
            Duration::from_secs_f64((current_s - last_s).max(0.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_rows() {
        let source = CsvTraceSource::from_str("t,v,mode\n0,1,idle\n1,2,busy\n").unwrap();
        assert_eq!(source.headers(), &["t", "v", "mode"]);
        assert_eq!(source.measurements().len(), 2);
        assert_eq!(source.measurements()[0].get("v"), Some(&Value::Int(1)));
        assert_eq!(source.measurements()[1].get("mode"), Some(&Value::Str("busy".into())));
        assert_eq!(source.measurements()[0].index(), 0);
        assert_eq!(source.measurements()[1].index(), 1);
    }

    #[test]
    fn parses_semicolon_separated_rows_with_comma_decimals() {
        let source = CsvTraceSource::from_str("t;v\n0;1,5\n1;2,25\n").unwrap();
        assert_eq!(source.measurements()[0].get("v"), Some(&Value::Float(1.5)));
        assert_eq!(source.measurements()[1].get("v"), Some(&Value::Float(2.25)));
    }

    #[test]
    fn missing_trailing_fields_become_absent() {
        let source = CsvTraceSource::from_str("t,v,mode\n0,1\n").unwrap();
        assert_eq!(source.measurements()[0].get("mode"), Some(&Value::Absent));
    }

    #[test]
    fn empty_file_is_a_fatal_error() {
        assert!(matches!(CsvTraceSource::from_str(""), Err(SourceError::EmptyFile)));
        assert!(matches!(CsvTraceSource::from_str("\n\n"), Err(SourceError::EmptyFile)));
    }

    #[test]
    fn time_column_detected_and_used_for_duration() {
        let source = CsvTraceSource::from_str("id,timestamp,v\n0,0 days 00:00:00.000,1\n1,0 days 00:00:01.500,2\n").unwrap();
        assert_eq!(source.time_column_name(), "timestamp");
        let duration_fn = source.duration_fn();
        let measurements = source.measurements();
        let delta = duration_fn(&measurements[0], &measurements[1]);
        assert_eq!(delta, Duration::from_secs_f64(1.5));
    }

    #[test]
    fn falls_back_to_first_column_as_time_when_no_header_matches() {
        let source = CsvTraceSource::from_str("seq,v\n0,1\n3,2\n").unwrap();
        assert_eq!(source.time_column_name(), "seq");
        let duration_fn = source.duration_fn();
        let measurements = source.measurements();
        assert_eq!(duration_fn(&measurements[0], &measurements[1]), Duration::from_secs(3));
    }
}
