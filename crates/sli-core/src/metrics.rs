//! Point-in-time snapshot of ring buffer statistics.

/// A consistent-enough snapshot of the ring buffer's public counters.
///
/// `size`/`peak_size` are read under the ring's lock; the totals are atomics and
/// may be observed lock-free, so a snapshot taken concurrently with a write can
/// show `total_written` ticking ahead of `size` by one. Tests that need a fully
/// quiesced view should stop writing before calling [`crate::ring::RingBuffer::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RingStats {
    pub size: usize,
    pub capacity: usize,
    pub total_written: u64,
    pub total_read: u64,
    pub total_dropped: u64,
    pub peak_size: usize,
    pub is_closed: bool,
}
