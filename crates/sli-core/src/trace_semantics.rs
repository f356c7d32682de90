//! The canonical deterministic semantics: pairs successive measurements into steps.

use crate::measurement::Measurement;
use crate::semantics::IoSemantics;
use crate::step::{index_delta_seconds, Step};

/// Marker action: trace semantics only ever has one thing to do with an input —
/// pair it with the previous measurement (or remember it, if there is none yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance;

/// Deterministic semantics whose configuration is simply "the last measurement
/// seen, if any". Constructed with a pluggable `duration_fn` (defaults to
/// [`index_delta_seconds`] via [`TraceSemantics::new`]).
pub struct TraceSemantics<F = fn(&Measurement, &Measurement) -> std::time::Duration> {
    duration_fn: F,
}

type DefaultDurationFn = fn(&Measurement, &Measurement) -> std::time::Duration;

impl TraceSemantics<DefaultDurationFn> {
    /// Trace semantics using the index-delta default duration function.
    pub fn new() -> Self {
        Self { duration_fn: index_delta_seconds }
    }
}

impl Default for TraceSemantics<DefaultDurationFn> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> TraceSemantics<F>
where
    F: Fn(&Measurement, &Measurement) -> std::time::Duration,
{
    pub fn with_duration_fn(duration_fn: F) -> Self {
        Self { duration_fn }
    }
}

impl<F> IoSemantics for TraceSemantics<F>
where
    F: Fn(&Measurement, &Measurement) -> std::time::Duration,
{
    type Input = Measurement;
    /// `None` when no step was produced yet (first measurement); `Some(step)` thereafter.
    type Output = Option<Step<Measurement>>;
    type Action = Advance;
    /// The previous measurement, or `None` before the first input.
    type Config = Option<Measurement>;

    fn initial(&self) -> Option<Self::Config> {
        Some(None)
    }

    fn actions(&self, _input: &Self::Input, _config: &Self::Config) -> Option<Self::Action> {
        Some(Advance)
    }

    fn execute(
        &self,
        _action: Self::Action,
        current: Self::Input,
        config: Self::Config,
    ) -> Option<(Self::Output, Self::Config)> {
        match config {
            None => Some((None, Some(current))),
            Some(last) => {
                let delta_t = (self.duration_fn)(&last, &current);
                let step = Step::new(last, delta_t, current.clone());
                Some((Some(step), Some(current)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{Columns, Value};
    use std::time::Duration;

    fn meas(index: u64, t: f64) -> Measurement {
        let mut cols = Columns::new();
        cols.push("t", Value::Float(t));
        Measurement::new(index, cols)
    }

    fn duration_from_t(last: &Measurement, current: &Measurement) -> Duration {
        let dt = current.get("t").unwrap().as_f64().unwrap() - last.get("t").unwrap().as_f64().unwrap();
        Duration::from_secs_f64(dt.max(0.0))
    }

    #[test]
    fn first_execute_never_emits_a_step() {
        let sli = TraceSemantics::new();
        let config = sli.initial().unwrap();
        let m1 = meas(0, 0.0);
        let action = sli.actions(&m1, &config).unwrap();
        let (output, next_config) = sli.execute(action, m1.clone(), config).unwrap();
        assert_eq!(output, None);
        assert_eq!(next_config, Some(m1));
    }

    #[test]
    fn scenario_trace_step_emission() {
        // Three measurements with a time column: the first yields no step, then
        // each subsequent one pairs with its predecessor.
        let sli = TraceSemantics::with_duration_fn(duration_from_t);
        let mut config = sli.initial().unwrap();

        let m1 = meas(0, 0.0);
        let m2 = meas(1, 1.5);
        let m3 = meas(2, 2.0);

        let (out1, c1) = sli.execute(sli.actions(&m1, &config).unwrap(), m1.clone(), config).unwrap();
        assert_eq!(out1, None);
        config = c1;

        let (out2, c2) = sli.execute(sli.actions(&m2, &config).unwrap(), m2.clone(), config).unwrap();
        assert_eq!(out2, Some(Step::new(m1, Duration::from_secs_f64(1.5), m2.clone())));
        config = c2;

        let (out3, _c3) = sli.execute(sli.actions(&m3, &config).unwrap(), m3.clone(), config).unwrap();
        assert_eq!(out3, Some(Step::new(m2, Duration::from_secs_f64(0.5), m3)));
    }

    #[test]
    fn default_duration_fn_uses_index_delta_as_seconds() {
        let sli = TraceSemantics::new();
        let config = sli.initial().unwrap();
        let m1 = meas(10, 0.0);
        let (_, config) = sli.execute(Advance, m1.clone(), config).unwrap();
        let m2 = meas(13, 0.0);
        let (output, _) = sli.execute(Advance, m2.clone(), config).unwrap();
        assert_eq!(output, Some(Step::new(m1, Duration::from_secs(3), m2)));
    }
}
