//! Runtime configuration shared by the producer and consumer threads.

use std::time::Duration;

/// How the consumer paces itself between measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorMode {
    /// The producer paces emission at a fixed `period_ms`; the consumer never sleeps.
    FixedPeriod,
    /// The producer emits as fast as the source yields rows; the consumer sleeps
    /// for `min(delta_t, 5s)` between measurements, self-clocked off the step's
    /// own `delta_t` rather than wall-clock pacing at the source.
    RealDeltaT,
}

/// The cap applied to `RealDeltaT` sleeps, so a malformed or huge timestamp gap
/// in the source data can't stall the consumer indefinitely.
pub const REAL_DELTA_T_CAP: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Ring buffer capacity. Must be `>= 1`.
    pub capacity: usize,
    /// Producer pacing in milliseconds; `0` means unpaced.
    pub period_ms: u64,
    pub emulator_mode: EmulatorMode,
    /// Membership mode: `false` (relaxed, default) or `true` (strict).
    pub strict: bool,
}

impl RuntimeConfig {
    pub const fn new(capacity: usize, period_ms: u64, emulator_mode: EmulatorMode, strict: bool) -> Self {
        Self { capacity, period_ms, emulator_mode, strict }
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        REALTIME_DEMO_CONFIG
    }
}

/// Default for the real-time demo: a small buffer tuned to a 25 Hz sensor, so
/// drops are visible if the consumer can't keep up.
pub const REALTIME_DEMO_CONFIG: RuntimeConfig =
    RuntimeConfig::new(15, 40, EmulatorMode::FixedPeriod, false);

/// Default for batch verification: a generous buffer (no drops expected) paced
/// by the trace's own timestamps rather than wall-clock sleeps.
pub const BATCH_VERIFICATION_CONFIG: RuntimeConfig =
    RuntimeConfig::new(100, 0, EmulatorMode::RealDeltaT, true);
