//! Thread wiring: a producer thread paces measurements into the ring buffer,
//! a consumer thread drives the sequencer to completion. Termination is
//! producer-initiated by closing the buffer.

use crate::error::CliError;
use crate::options::CliOptions;
use crate::pacing::RealTimePacer;
use sli_automaton::{Automaton, StateId};
use sli_core::{
    EmulatorMode, Measurement, RelaxedMembership, RingBuffer, RuntimeConfig, Sequencer, Step, TraceSemantics, Verdict,
};
use sli_trace_source::CsvTraceSource;
use sli_viewer::{FinalReport, NullTracker, StdoutTracker, TrackingSink, VerificationSummary};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Config for [`TraceSemantics`] as driven here: the previous measurement, if any.
type TraceConfig = Option<Measurement>;
/// Config for [`RelaxedMembership`] as driven here: the trace config plus the
/// surviving automaton states.
type VerificationConfig = (Option<Measurement>, HashSet<StateId>);

/// Runs the wired pipeline end to end and returns the final report plus
/// whether the run should be considered successful (always true outside
/// verification mode; `conforms` inside it).
pub fn run(options: &CliOptions, automaton: Option<Automaton>) -> Result<(FinalReport, bool), CliError> {
    let source = CsvTraceSource::from_path(&options.trace_path)?;
    let pacer_duration_fn = source.duration_fn();
    let semantics_duration_fn = source.duration_fn();
    let measurements = source.into_measurements();

    let buffer: RingBuffer<Measurement> = RingBuffer::new(options.config.capacity);
    let producer_buffer = buffer.clone();
    let period = options.config.period();
    let producer = thread::spawn(move || {
        for measurement in measurements {
            producer_buffer.write(measurement);
            if !period.is_zero() {
                thread::sleep(period);
            }
        }
        producer_buffer.close();
    });

    let pacer = match options.config.emulator_mode {
        EmulatorMode::RealDeltaT => Some(Arc::new(RealTimePacer::new(pacer_duration_fn))),
        EmulatorMode::FixedPeriod => None,
    };

    let report = match automaton {
        Some(automaton) => run_verification(&buffer, automaton, &options.config, semantics_duration_fn, pacer),
        None => run_trace_only(&buffer, semantics_duration_fn, pacer),
    };

    producer.join().expect("producer thread panicked");
    let conforms = match &report.verification {
        Some(summary) => summary.conforms(),
        None => true,
    };
    Ok((report, conforms))
}

fn run_trace_only(
    buffer: &RingBuffer<Measurement>,
    duration_fn: impl Fn(&Measurement, &Measurement) -> std::time::Duration + Send + Sync + 'static,
    pacer: Option<Arc<RealTimePacer<impl Fn(&Measurement, &Measurement) -> std::time::Duration + Send + Sync + 'static>>>,
) -> FinalReport {
    let sli = TraceSemantics::with_duration_fn(duration_fn);
    let mut sequencer = Sequencer::new(sli, buffer.clone());

    let tracker = StdoutTracker;
    sequencer.on_input(move |input: &Measurement, config| {
        if let Some(pacer) = &pacer {
            pacer.on_input(input);
        }
        TrackingSink::<Measurement, TraceConfig, Option<Step<Measurement>>>::on_input(&tracker, input, config);
    });
    let output_tracker = StdoutTracker;
    sequencer.on_output(move |output| {
        TrackingSink::<Measurement, TraceConfig, Option<Step<Measurement>>>::on_output(&output_tracker, output);
    });

    let sequencer_report = sequencer.run();
    FinalReport::new(buffer.stats(), sequencer_report, None)
}

fn run_verification(
    buffer: &RingBuffer<Measurement>,
    automaton: Automaton,
    config: &RuntimeConfig,
    duration_fn: impl Fn(&Measurement, &Measurement) -> std::time::Duration + Send + Sync + 'static,
    pacer: Option<Arc<RealTimePacer<impl Fn(&Measurement, &Measurement) -> std::time::Duration + Send + Sync + 'static>>>,
) -> FinalReport {
    let sli = RelaxedMembership::with_duration_fn(automaton, config.strict, duration_fn);
    let mut sequencer = Sequencer::new(sli, buffer.clone());

    let tracker = NullTracker;
    sequencer.on_input(move |input: &Measurement, config| {
        if let Some(pacer) = &pacer {
            pacer.on_input(input);
        }
        TrackingSink::<Measurement, VerificationConfig, Verdict>::on_input(&tracker, input, config);
    });

    let summary = Arc::new(Mutex::new(VerificationSummary::default()));
    let summary_for_listener = Arc::clone(&summary);
    // The first verdict is the bootstrap OK for the measurement with no
    // predecessor yet (no step was paired), and isn't counted as a step.
    let bootstrap_seen = AtomicBool::new(false);
    sequencer.on_output(move |verdict| {
        if bootstrap_seen.swap(true, Ordering::Relaxed) {
            summary_for_listener.lock().unwrap().record(verdict.is_ok());
        }
        println!("verdict: {verdict:?}");
    });

    let sequencer_report = sequencer.run();
    let summary = Arc::try_unwrap(summary).unwrap().into_inner().unwrap();
    FinalReport::new(buffer.stats(), sequencer_report, Some(summary))
}
