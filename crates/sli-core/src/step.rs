//! A step pairs two consecutive measurements with the elapsed duration between them.

use crate::measurement::Measurement;
use std::time::Duration;

/// `(last, delta_t, current)` — produced by [`crate::trace_semantics::TraceSemantics`]
/// only from the second measurement onward; the first measurement never yields a step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<M = Measurement> {
    pub last: M,
    pub delta_t: Duration,
    pub current: M,
}

impl<M> Step<M> {
    pub fn new(last: M, delta_t: Duration, current: M) -> Self {
        Self { last, delta_t, current }
    }
}

/// A `(last, current) -> Duration` strategy, supplied at construction time.
/// Must be pure: no I/O, no hidden state.
pub trait DurationFn<M>: Fn(&M, &M) -> Duration {}
impl<M, F: Fn(&M, &M) -> Duration> DurationFn<M> for F {}

/// Default strategy for [`Measurement`]: the index delta, interpreted as seconds.
/// Used when the source has no recognized time column.
pub fn index_delta_seconds(last: &Measurement, current: &Measurement) -> Duration {
    let delta = current.index().saturating_sub(last.index());
    Duration::from_secs(delta)
}
