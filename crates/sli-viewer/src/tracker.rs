//! Synchronous tracking sinks, invoked on the sequencer thread once per
//! input/output pair.

use std::fmt::Debug;
use std::sync::Mutex;

/// Parallel to the automaton's guard trait: a small synchronous callback
/// surface plugged straight into `Sequencer::on_input`/`on_output`.
pub trait TrackingSink<I, C, O> {
    fn on_input(&self, input: &I, config: &C);
    fn on_output(&self, output: &O);
}

/// Prints one line per input and one per output. Human tracking output.
#[derive(Debug, Default)]
pub struct StdoutTracker;

impl<I: Debug, C: Debug, O: Debug> TrackingSink<I, C, O> for StdoutTracker {
    fn on_input(&self, input: &I, config: &C) {
        println!("in  {input:?} @ {config:?}");
    }

    fn on_output(&self, output: &O) {
        println!("out {output:?}");
    }
}

/// Discards everything. Used when running headless or under benchmark.
#[derive(Debug, Default)]
pub struct NullTracker;

impl<I, C, O> TrackingSink<I, C, O> for NullTracker {
    fn on_input(&self, _input: &I, _config: &C) {}
    fn on_output(&self, _output: &O) {}
}

/// Records every call for assertions. Test-only.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    inputs: Mutex<Vec<String>>,
    outputs: Mutex<Vec<String>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }
}

impl<I: Debug, C: Debug, O: Debug> TrackingSink<I, C, O> for RecordingTracker {
    fn on_input(&self, input: &I, config: &C) {
        self.inputs.lock().unwrap().push(format!("{input:?} @ {config:?}"));
    }

    fn on_output(&self, output: &O) {
        self.outputs.lock().unwrap().push(format!("{output:?}"));
    }
}
