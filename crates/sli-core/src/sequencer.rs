//! The generic driver thread: advances any deterministic I/O semantics by
//! consuming inputs from a ring buffer and publishing outputs to listeners.

use crate::ring::{ReadOutcome, RingBuffer};
use crate::semantics::IoSemantics;

/// `(input, config-before-this-input) -> ()`, called once per input, before the
/// semantics is consulted. `config` lets a listener show "what we knew before
/// seeing this measurement" (e.g. the live spec configurations).
pub type InputListener<I, C> = Box<dyn Fn(&I, &C) + Send>;

/// `output -> ()`, called once per successfully produced output.
pub type OutputListener<O> = Box<dyn Fn(&O) + Send>;

/// Tallies what the sequencer did, for the end-of-run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerReport {
    pub inputs_consumed: u64,
    pub outputs_produced: u64,
}

/// Drives `SLI` to completion against `buffer`. Owns the listener lists; the
/// viewer is built entirely out of listeners registered here — the
/// sequencer itself knows nothing about tracking output or report formatting.
pub struct Sequencer<SLI: IoSemantics> {
    sli: SLI,
    buffer: RingBuffer<SLI::Input>,
    input_listeners: Vec<InputListener<SLI::Input, SLI::Config>>,
    output_listeners: Vec<OutputListener<SLI::Output>>,
}

impl<SLI: IoSemantics> Sequencer<SLI> {
    pub fn new(sli: SLI, buffer: RingBuffer<SLI::Input>) -> Self {
        Self { sli, buffer, input_listeners: Vec::new(), output_listeners: Vec::new() }
    }

    pub fn on_input<Listener>(&mut self, listener: Listener)
    where
        Listener: Fn(&SLI::Input, &SLI::Config) + Send + 'static,
    {
        self.input_listeners.push(Box::new(listener));
    }

    pub fn on_output<Listener>(&mut self, listener: Listener)
    where
        Listener: Fn(&SLI::Output) + Send + 'static,
    {
        self.output_listeners.push(Box::new(listener));
    }

    /// Runs the driver loop until end-of-stream or the semantics halts.
    ///
    /// Listeners are invoked synchronously on this thread, at most once per
    /// input (`input_listeners`) or per produced output (`output_listeners`).
    /// A listener that panics unwinds this thread — the sequencer does not
    /// catch listener panics; wrap a listener yourself with
    /// `std::panic::catch_unwind` if you need isolation.
    pub fn run(mut self) -> SequencerReport {
        let mut report = SequencerReport::default();
        let Some(mut config) = self.sli.initial() else {
            return report;
        };

        loop {
            let input = match self.buffer.read() {
                ReadOutcome::Item(input) => input,
                ReadOutcome::EndOfStream => break,
            };
            report.inputs_consumed += 1;

            for listener in &self.input_listeners {
                listener(&input, &config);
            }

            let Some(action) = self.sli.actions(&input, &config) else {
                break;
            };
            let Some((output, next_config)) = self.sli.execute(action, input, config) else {
                break;
            };
            config = next_config;

            for listener in &self.output_listeners {
                listener(&output);
            }
            report.outputs_produced += 1;
        }

        report
    }
}
