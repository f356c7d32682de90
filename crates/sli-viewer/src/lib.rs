//! sli-viewer: synchronous tracking sinks and the end-of-run report, the
//! only place in the workspace that prints anything.

pub mod report;
pub mod tracker;

pub use report::{FinalReport, VerificationSummary};
pub use tracker::{NullTracker, RecordingTracker, StdoutTracker, TrackingSink};
