use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage error: {0}")]
    Usage(String),
    #[error(transparent)]
    Source(#[from] sli_trace_source::SourceError),
    #[error(transparent)]
    Guard(#[from] sli_automaton::parser::GuardParseError),
    #[error("malformed automaton definition at line {line}: {detail}")]
    Automaton { line: usize, detail: String },
    #[error("failed to read automaton file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
