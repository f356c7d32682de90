//! The automaton itself: states, guarded transitions, and the adapter that
//! exposes it as a [`NondeterministicIoSemantics`] spec provider for
//! [`sli_core::RelaxedMembership`].

use crate::guard::Guard;
use sli_core::{Measurement, NondeterministicIoSemantics, Step};

pub type StateId = String;

/// A single guarded edge: fires when `guard` matches the current measurement
/// of the step and the automaton is in `from`.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: StateId,
    pub guard: Guard,
    pub to: StateId,
}

impl Transition {
    pub fn new(from: impl Into<StateId>, guard: Guard, to: impl Into<StateId>) -> Self {
        Self { from: from.into(), guard, to: to.into() }
    }
}

/// A finite-state automaton used as the nondeterministic spec in relaxed
/// membership checking. More than one transition may leave the same state
/// with overlapping guards: both are followed, which is the source of the
/// spec semantics' nondeterminism.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    initial_states: Vec<StateId>,
    transitions: Vec<Transition>,
}

impl Automaton {
    pub fn new(initial_states: Vec<StateId>) -> Self {
        Self { initial_states, transitions: Vec::new() }
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn transitions_from<'a>(&'a self, state: &'a StateId) -> impl Iterator<Item = (usize, &'a Transition)> {
        self.transitions.iter().enumerate().filter(move |(_, t)| &t.from == state)
    }
}

impl NondeterministicIoSemantics for Automaton {
    type Input = Step<Measurement>;
    type Output = ();
    /// Index into the automaton's transition table.
    type Action = usize;
    type Config = StateId;

    fn initial(&self) -> Vec<Self::Config> {
        self.initial_states.clone()
    }

    fn actions(&self, input: &Self::Input, config: &Self::Config) -> Vec<Self::Action> {
        self.transitions_from(config)
            .filter(|(_, t)| t.guard.evaluate(&input.current))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn execute(
        &self,
        action: &Self::Action,
        _input: &Self::Input,
        _config: &Self::Config,
    ) -> Vec<(Self::Output, Self::Config)> {
        match self.transitions.get(*action) {
            Some(transition) => vec![((), transition.to.clone())],
            None => vec![],
        }
    }
}
