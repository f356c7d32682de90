//! sli-core: the concurrency-and-semantics kernel of the digital-twin trace runtime.
//!
//! Three tightly coupled pieces:
//!
//! - [`ring`]: the bounded, overwrite-on-full ring buffer — the back-pressure
//!   policy of the whole system.
//! - [`semantics`], [`trace_semantics`], [`relaxed_membership`]: the
//!   deterministic I/O semantics contract and its two canonical instances.
//! - [`sequencer`]: the generic driver loop that advances any semantics by
//!   consuming inputs from a ring buffer and publishing outputs to listeners.
//!
//! # Example
//!
//! ```
//! use sli_core::measurement::{Columns, Measurement, Value};
//! use sli_core::ring::RingBuffer;
//! use sli_core::sequencer::Sequencer;
//! use sli_core::trace_semantics::TraceSemantics;
//!
//! let buffer = RingBuffer::new(15);
//! for i in 0..3u64 {
//!     let mut cols = Columns::new();
//!     cols.push("v", Value::Int(i as i64));
//!     buffer.write(Measurement::new(i, cols));
//! }
//! buffer.close();
//!
//! let mut sequencer = Sequencer::new(TraceSemantics::new(), buffer);
//! sequencer.on_output(|step| {
//!     if let Some(step) = step {
//!         println!("step: {} -> {}", step.last, step.current);
//!     }
//! });
//! let report = sequencer.run();
//! assert_eq!(report.inputs_consumed, 3);
//! assert_eq!(report.outputs_produced, 2);
//! ```

pub mod config;
pub(crate) mod invariants;
pub mod measurement;
pub mod metrics;
pub mod relaxed_membership;
pub mod ring;
pub mod semantics;
pub mod sequencer;
pub mod step;
pub mod trace_semantics;

pub use config::{
    EmulatorMode, RuntimeConfig, BATCH_VERIFICATION_CONFIG, REALTIME_DEMO_CONFIG, REAL_DELTA_T_CAP,
};
pub use measurement::{Columns, Measurement, Value};
pub use metrics::RingStats;
pub use relaxed_membership::{RelaxedMembership, Verdict};
pub use ring::{CancelToken, ReadOutcome, RingBuffer};
pub use semantics::{IoSemantics, NondeterministicIoSemantics};
pub use sequencer::{Sequencer, SequencerReport};
pub use step::Step;
pub use trace_semantics::TraceSemantics;
