//! sli-trace-source: a delimiter-sniffing CSV reader that turns a recorded
//! trace file into the ordered `Measurement` stream the rest of the runtime
//! consumes.

pub mod delimiter;
pub mod source;
pub mod time_column;
pub mod value;

pub use delimiter::detect_delimiter;
pub use source::{CsvTraceSource, SourceError};
pub use time_column::{detect_time_column, parse_days_duration};
pub use value::parse_value;
