//! Property-based tests for the ring buffer invariants.
//!
//! Coverage:
//! - bounded occupancy
//! - peak tracks occupancy
//! - Drop accounting under overload with no intervening reads

use proptest::prelude::*;
use sli_core::ring::{ReadOutcome, RingBuffer};

proptest! {
    /// For any sequence of `n` writes with no intervening reads and capacity
    /// `k`: final count = min(n, k), total_dropped = max(0, n - k), total_written = n.
    #[test]
    fn prop_writes_with_no_reads_bound_occupancy(
        capacity in 1usize..32,
        n_writes in 0usize..200,
    ) {
        let rb = RingBuffer::new(capacity);
        for i in 0..n_writes {
            rb.write(i);
        }

        let stats = rb.stats();
        prop_assert_eq!(stats.size, n_writes.min(capacity));
        prop_assert_eq!(stats.total_written, n_writes as u64);
        prop_assert_eq!(stats.total_dropped, n_writes.saturating_sub(capacity) as u64);
        prop_assert!(stats.size <= stats.capacity);
        prop_assert!(stats.peak_size >= stats.size);
    }

    /// Reading never returns more items than were written, and the returned
    /// sequence is always a subsequence (same relative order) of the writes.
    #[test]
    fn prop_reads_are_an_ordered_subsequence_of_writes(
        capacity in 1usize..16,
        n_writes in 0usize..64,
    ) {
        let rb = RingBuffer::new(capacity);
        for i in 0..n_writes {
            rb.write(i);
        }
        rb.close();

        let mut read_values = Vec::new();
        loop {
            match rb.read() {
                ReadOutcome::Item(v) => read_values.push(v),
                ReadOutcome::EndOfStream => break,
            }
        }

        prop_assert!(read_values.len() <= n_writes);
        prop_assert!(read_values.windows(2).all(|pair| pair[0] < pair[1]));
        if let Some(&last) = read_values.last() {
            prop_assert_eq!(last, n_writes - 1, "newest write must always survive");
        }
    }

    /// `peak_size` never decreases and always reflects the maximum occupancy
    /// ever reached by any prefix of the operation sequence.
    #[test]
    fn prop_peak_size_is_monotonic_and_accurate(
        ops in prop::collection::vec(prop::bool::ANY, 0..100),
    ) {
        let rb = RingBuffer::new(8);
        let mut model_occupancy: usize = 0;
        let mut model_peak: usize = 0;

        for write in ops {
            if write {
                rb.write(1u8);
                model_occupancy = (model_occupancy + 1).min(8);
            } else if model_occupancy > 0 {
                rb.read();
                model_occupancy -= 1;
            } else {
                continue;
            }
            model_peak = model_peak.max(model_occupancy);
            prop_assert_eq!(rb.peak_size(), model_peak);
        }
    }
}
