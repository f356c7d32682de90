//! The end-of-run report: ring buffer totals, sequencer tallies, and (for
//! verification runs) the verdict breakdown.

use serde::Serialize;
use sli_core::{RingStats, SequencerReport};
use std::fmt;

/// Verdict breakdown for a run whose semantics produces `Verdict` outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerificationSummary {
    pub total_steps: u64,
    pub ok: u64,
    pub fail: u64,
}

impl VerificationSummary {
    pub fn record(&mut self, conforms: bool) {
        self.total_steps += 1;
        if conforms {
            self.ok += 1;
        } else {
            self.fail += 1;
        }
    }

    /// `true` iff no `Verdict::Fail` was ever observed.
    pub fn conforms(&self) -> bool {
        self.fail == 0
    }
}

/// The full end-of-run summary, printed to the CLI and optionally emitted as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct FinalReport {
    pub capacity: usize,
    pub peak_size: usize,
    pub total_written: u64,
    pub total_read: u64,
    pub total_dropped: u64,
    pub inputs_consumed: u64,
    pub outputs_produced: u64,
    pub verification: Option<VerificationSummary>,
}

impl FinalReport {
    pub fn new(ring: RingStats, sequencer: SequencerReport, verification: Option<VerificationSummary>) -> Self {
        Self {
            capacity: ring.capacity,
            peak_size: ring.peak_size,
            total_written: ring.total_written,
            total_read: ring.total_read,
            total_dropped: ring.total_dropped,
            inputs_consumed: sequencer.inputs_consumed,
            outputs_produced: sequencer.outputs_produced,
            verification,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ring: capacity={} peak={} written={} read={} dropped={}",
            self.capacity, self.peak_size, self.total_written, self.total_read, self.total_dropped)?;
        writeln!(f, "sequencer: inputs={} outputs={}", self.inputs_consumed, self.outputs_produced)?;
        if let Some(v) = &self.verification {
            write!(f, "verification: steps={} ok={} fail={} conforms={}", v.total_steps, v.ok, v.fail, v.conforms())?;
        }
        Ok(())
    }
}
