//! Consumer-side pacing for `EmulatorMode::RealDeltaT`: sleeps between
//! measurements according to the trace's own time column, capped at
//! `REAL_DELTA_T_CAP` so a malformed timestamp gap can't stall the consumer.

use sli_core::{Measurement, REAL_DELTA_T_CAP};
use std::sync::Mutex;
use std::time::Duration;

/// Registered as a sequencer input listener. Called once per input, before
/// the semantics is consulted, so the sleep happens before *this*
/// measurement is processed — self-clocking the consumer off the source's
/// own timestamps rather than wall-clock pacing at the source.
pub struct RealTimePacer<F> {
    duration_fn: F,
    last: Mutex<Option<Measurement>>,
}

impl<F> RealTimePacer<F>
where
    F: Fn(&Measurement, &Measurement) -> Duration,
{
    pub fn new(duration_fn: F) -> Self {
        Self { duration_fn, last: Mutex::new(None) }
    }

    pub fn on_input(&self, current: &Measurement) {
        let mut last = self.last.lock().unwrap();
        if let Some(previous) = last.as_ref() {
            let delta = (self.duration_fn)(previous, current);
            std::thread::sleep(delta.min(REAL_DELTA_T_CAP));
        }
        *last = Some(current.clone());
    }
}
