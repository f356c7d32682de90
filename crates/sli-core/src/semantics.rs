//! The deterministic and nondeterministic I/O semantics contracts (the "SLI",
//! for Semantics-Level Interface).
//!
//! Both are effect-free step functions. Implementations must be pure: the same
//! `(input, config)` always yields the same result, with no hidden state and no
//! I/O. The sequencer (`crate::sequencer`) is the only thing that drives them.

/// A deterministic I/O semantics: at most one action, at most one outcome.
///
/// `actions`/`execute` returning `None` halts the sequencer — this is a clean
/// stop, not an error. `actions` takes `&Self::Input` rather than
/// `Option<&Self::Input>` deliberately: the sequencer only ever calls it with
/// an input that has already been confirmed present, so "no input" is
/// unrepresentable here rather than merely unused.
pub trait IoSemantics {
    type Input;
    type Output;
    type Action;
    type Config;

    /// The configuration before any input is processed. `None` means the
    /// semantics cannot start at all (e.g. relaxed membership with no surviving
    /// spec configuration).
    fn initial(&self) -> Option<Self::Config>;

    /// Selects the action to perform for this input against this configuration.
    fn actions(&self, input: &Self::Input, config: &Self::Config) -> Option<Self::Action>;

    /// Produces the output and next configuration for the chosen action.
    fn execute(
        &self,
        action: Self::Action,
        input: Self::Input,
        config: Self::Config,
    ) -> Option<(Self::Output, Self::Config)>;
}

/// A nondeterministic I/O semantics: zero, one, or many actions/outcomes per
/// step. Used only for the spec provider underlying [`crate::relaxed_membership`].
pub trait NondeterministicIoSemantics {
    type Input;
    type Output;
    type Action;
    type Config;

    /// The set of configurations the semantics may start in.
    fn initial(&self) -> Vec<Self::Config>;

    /// The set of actions applicable to this input from this configuration.
    /// Empty means no transition is possible.
    fn actions(&self, input: &Self::Input, config: &Self::Config) -> Vec<Self::Action>;

    /// The set of `(output, next config)` pairs this action may produce.
    /// A single well-formed transition produces exactly one pair; the
    /// nondeterminism lives in `actions`, not here, for the automaton provider.
    fn execute(
        &self,
        action: &Self::Action,
        input: &Self::Input,
        config: &Self::Config,
    ) -> Vec<(Self::Output, Self::Config)>;
}
