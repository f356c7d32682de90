//! Relaxed membership: the deterministic combinator that composes trace
//! semantics with a nondeterministic spec semantics to yield OK/FAIL verdicts.

use crate::invariants::debug_assert_strict_dead_stays_dead;
use crate::measurement::Measurement;
use crate::semantics::{IoSemantics, NondeterministicIoSemantics};
use crate::step::Step;
use crate::trace_semantics::{Advance, TraceSemantics};
use std::collections::HashSet;
use std::hash::Hash;

/// The boolean outcome of one membership step. Not a runtime error — always
/// delivered to listeners as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Fail,
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

/// Deterministic semantics combinator. `S` is the nondeterministic spec
/// semantics over `(Step<Measurement>, S::Output, S::Action, S::Config)`; `F`
/// is the trace layer's duration function.
///
/// `strict = false` (relaxed mode) is the recommended default: a FAIL is a
/// local event, and the surviving spec configurations are preserved so the
/// stream can recover on the next input. `strict = true` freezes the dead set
/// on the first FAIL — every subsequent verdict is FAIL too — which is the
/// right choice for verification runs where any violation must poison the run.
pub struct RelaxedMembership<S, F = fn(&Measurement, &Measurement) -> std::time::Duration> {
    trace: TraceSemantics<F>,
    spec: S,
    strict: bool,
}

type DefaultDurationFn = fn(&Measurement, &Measurement) -> std::time::Duration;

impl<S> RelaxedMembership<S, DefaultDurationFn>
where
    S: NondeterministicIoSemantics<Input = Step<Measurement>>,
{
    pub fn new(spec: S, strict: bool) -> Self {
        Self { trace: TraceSemantics::new(), spec, strict }
    }
}

impl<S, F> RelaxedMembership<S, F>
where
    S: NondeterministicIoSemantics<Input = Step<Measurement>>,
    F: Fn(&Measurement, &Measurement) -> std::time::Duration,
{
    pub fn with_duration_fn(spec: S, strict: bool, duration_fn: F) -> Self {
        Self { trace: TraceSemantics::with_duration_fn(duration_fn), spec, strict }
    }
}

impl<S, F> IoSemantics for RelaxedMembership<S, F>
where
    S: NondeterministicIoSemantics<Input = Step<Measurement>>,
    S::Config: Eq + Hash + Clone,
    F: Fn(&Measurement, &Measurement) -> std::time::Duration,
{
    type Input = Measurement;
    type Output = Verdict;
    type Action = Advance;
    type Config = (Option<Measurement>, HashSet<S::Config>);

    fn initial(&self) -> Option<Self::Config> {
        let spec_configs: HashSet<S::Config> = self.spec.initial().into_iter().collect();
        if spec_configs.is_empty() {
            // No surviving spec configuration: the system cannot start.
            return None;
        }
        Some((None, spec_configs))
    }

    fn actions(&self, _input: &Self::Input, _config: &Self::Config) -> Option<Self::Action> {
        Some(Advance)
    }

    fn execute(
        &self,
        _action: Self::Action,
        input: Self::Input,
        config: Self::Config,
    ) -> Option<(Self::Output, Self::Config)> {
        let (last, spec_configs) = config;

        // Step 1: advance the trace layer.
        let (maybe_step, new_last) = self
            .trace
            .execute(Advance, input, last)
            .expect("trace semantics never halts");

        // Step 2: the first measurement trivially conforms.
        let Some(step) = maybe_step else {
            return Some((Verdict::Ok, (new_last, spec_configs)));
        };

        // Step 3: union of every spec successor reachable from any surviving config.
        let mut spec_next: HashSet<S::Config> = HashSet::new();
        for config in &spec_configs {
            for action in self.spec.actions(&step, config) {
                for (_output, rhs) in self.spec.execute(&action, &step, config) {
                    spec_next.insert(rhs);
                }
            }
        }

        let was_empty = spec_configs.is_empty();
        if spec_next.is_empty() {
            let rolled_forward = if self.strict { HashSet::new() } else { spec_configs };
            debug_assert_strict_dead_stays_dead!(self.strict, was_empty, rolled_forward.is_empty());
            Some((Verdict::Fail, (new_last, rolled_forward)))
        } else {
            Some((Verdict::Ok, (new_last, spec_next)))
        }
    }
}
