//! Debug assertion macros for the core invariants.
//!
//! Active only in debug builds (`#[cfg(debug_assertions)]`); zero overhead in release.

// =============================================================================
// Bounded occupancy
// =============================================================================

/// **Invariant**: `0 <= count <= capacity`. Used in `RingBuffer::write`/`read`.
macro_rules! debug_assert_bounded_occupancy {
    ($count:expr, $capacity:expr) => {
        debug_assert!(
            $count <= $capacity,
            "bounded-occupancy invariant violated: occupancy {} exceeds capacity {}",
            $count,
            $capacity
        )
    };
}

// =============================================================================
// Peak tracks occupancy
// =============================================================================

/// **Invariant**: `peak_size >= count` at all times. Used after every `write`.
macro_rules! debug_assert_peak_at_least_count {
    ($peak:expr, $count:expr) => {
        debug_assert!(
            $peak >= $count,
            "peak-tracking invariant violated: peak {} below current occupancy {}",
            $peak,
            $count
        )
    };
}

// =============================================================================
// Drop accounting
// =============================================================================

/// **Invariant**: `total_written == total_read + total_dropped + count`.
/// Used in tests after a sequence of operations settles (no concurrent writer).
macro_rules! debug_assert_conserved_writes {
    ($written:expr, $read:expr, $dropped:expr, $count:expr) => {
        debug_assert_eq!(
            $written,
            $read + $dropped + $count,
            "drop-accounting invariant violated: written {} != read {} + dropped {} + count {}",
            $written,
            $read,
            $dropped,
            $count
        )
    };
}

// =============================================================================
// Dead configuration stays dead (strict mode)
// =============================================================================

/// **Invariant**: once the surviving spec-configuration set is empty in strict
/// mode, it never becomes non-empty again. Used in `RelaxedMembership::execute`.
macro_rules! debug_assert_strict_dead_stays_dead {
    ($strict:expr, $was_empty:expr, $now_empty:expr) => {
        debug_assert!(
            !$strict || !$was_empty || $now_empty,
            "strict-mode invariant violated: dead configuration resurrected"
        )
    };
}

pub(crate) use debug_assert_bounded_occupancy;
pub(crate) use debug_assert_conserved_writes;
pub(crate) use debug_assert_peak_at_least_count;
pub(crate) use debug_assert_strict_dead_stays_dead;
