//! Bounded, thread-safe ring buffer: non-blocking overwriting `write`, blocking `read`.
//!
//! This is the sole piece of shared mutable state in the runtime: a single
//! mutex guards the occupancy, a single condition variable signals "not
//! empty" to the blocked consumer. The producer never blocks on this buffer
//! — under overload it drops the oldest unread element rather than stall
//! the sensor.

use crate::invariants::{
    debug_assert_bounded_occupancy, debug_assert_conserved_writes, debug_assert_peak_at_least_count,
};
use crate::metrics::RingStats;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};

/// Outcome of a blocking [`RingBuffer::read`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<T> {
    Item(T),
    /// The buffer is drained and closed (or a cancellation woke the reader).
    EndOfStream,
}

impl<T> ReadOutcome<T> {
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ReadOutcome::EndOfStream)
    }
}

struct Shared<T> {
    queue: Mutex<VecDeque<T>>,
    not_empty: Condvar,
    capacity: usize,
    closed: AtomicBool,
    cancelled: AtomicBool,
    total_written: AtomicU64,
    total_read: AtomicU64,
    total_dropped: AtomicU64,
    peak_size: AtomicUsize,
}

/// A handle to the ring buffer. Cheap to clone (`Arc`-backed); clone once for the
/// producer thread and once for the consumer thread.
pub struct RingBuffer<T> {
    inner: Arc<Shared<T>>,
}

impl<T> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> RingBuffer<T> {
    /// Creates a new ring buffer with the given fixed capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "ring buffer capacity must be at least 1");
        Self {
            inner: Arc::new(Shared {
                queue: Mutex::new(VecDeque::with_capacity(capacity)),
                not_empty: Condvar::new(),
                capacity,
                closed: AtomicBool::new(false),
                cancelled: AtomicBool::new(false),
                total_written: AtomicU64::new(0),
                total_read: AtomicU64::new(0),
                total_dropped: AtomicU64::new(0),
                peak_size: AtomicUsize::new(0),
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Current occupancy. Takes the lock; prefer [`RingBuffer::stats`] if you
    /// also want the totals, to avoid two separate critical sections.
    pub fn size(&self) -> usize {
        self.inner.queue.lock().unwrap().len()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    pub fn total_written(&self) -> u64 {
        self.inner.total_written.load(Ordering::Relaxed)
    }

    pub fn total_read(&self) -> u64 {
        self.inner.total_read.load(Ordering::Relaxed)
    }

    pub fn total_dropped(&self) -> u64 {
        self.inner.total_dropped.load(Ordering::Relaxed)
    }

    pub fn peak_size(&self) -> usize {
        self.inner.peak_size.load(Ordering::Relaxed)
    }

    /// A consistent snapshot of size + all counters, taken under one lock hold.
    pub fn stats(&self) -> RingStats {
        let size = self.inner.queue.lock().unwrap().len();
        RingStats {
            size,
            capacity: self.inner.capacity,
            total_written: self.inner.total_written.load(Ordering::Relaxed),
            total_read: self.inner.total_read.load(Ordering::Relaxed),
            total_dropped: self.inner.total_dropped.load(Ordering::Relaxed),
            peak_size: self.inner.peak_size.load(Ordering::Relaxed),
            is_closed: self.inner.closed.load(Ordering::Acquire),
        }
    }

    /// Non-blocking, infallible write. If the buffer is full, the oldest unread
    /// element is dropped in favor of `item`. Writes after [`RingBuffer::close`]
    /// are silently ignored — the producer never observes a failure either way.
    pub fn write(&self, item: T) {
        if self.inner.closed.load(Ordering::Acquire) {
            return;
        }

        let mut queue = self.inner.queue.lock().unwrap();
        if queue.len() == self.inner.capacity {
            queue.pop_front();
            self.inner.total_dropped.fetch_add(1, Ordering::Relaxed);
        }
        queue.push_back(item);
        self.inner.total_written.fetch_add(1, Ordering::Relaxed);

        let len = queue.len();
        debug_assert_bounded_occupancy!(len, self.inner.capacity);
        self.inner.peak_size.fetch_max(len, Ordering::AcqRel);
        debug_assert_peak_at_least_count!(self.inner.peak_size.load(Ordering::Relaxed), len);
        debug_assert_conserved_writes!(
            self.inner.total_written.load(Ordering::Relaxed),
            self.inner.total_read.load(Ordering::Relaxed),
            self.inner.total_dropped.load(Ordering::Relaxed),
            len as u64
        );
        drop(queue);

        self.inner.not_empty.notify_one();
    }

    /// Blocks while empty and open. Returns the oldest element, or
    /// [`ReadOutcome::EndOfStream`] once the buffer is drained and closed (or a
    /// cancellation was signaled while blocked).
    pub fn read(&self) -> ReadOutcome<T> {
        let mut queue = self.inner.queue.lock().unwrap();
        loop {
            if let Some(item) = queue.pop_front() {
                self.inner.total_read.fetch_add(1, Ordering::Relaxed);
                return ReadOutcome::Item(item);
            }
            if self.inner.closed.load(Ordering::Acquire) || self.inner.cancelled.load(Ordering::Acquire) {
                return ReadOutcome::EndOfStream;
            }
            queue = self.inner.not_empty.wait(queue).unwrap();
        }
    }

    /// Idempotent. Marks the buffer closed and wakes every blocked reader; a
    /// drained, closed buffer yields [`ReadOutcome::EndOfStream`] promptly from
    /// then on, with no further waiting.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
        self.inner.not_empty.notify_all();
    }

    /// Creates a [`CancelToken`] tied to this buffer. Signaling it wakes every
    /// blocked reader without marking the buffer closed — distinct from
    /// [`RingBuffer::close`] so the final report can tell "source exhausted"
    /// apart from "consumer asked to stop".
    pub fn cancel_token(&self) -> CancelToken<T> {
        CancelToken { inner: Arc::clone(&self.inner) }
    }
}

/// A handle that can abort a blocked [`RingBuffer::read`] from another thread.
pub struct CancelToken<T> {
    inner: Arc<Shared<T>>,
}

impl<T> Clone for CancelToken<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> CancelToken<T> {
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.not_empty.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn drop_under_overload_keeps_newest() {
        // capacity 3, writes A..E with no intervening reads.
        let rb = RingBuffer::new(3);
        for c in ['A', 'B', 'C', 'D', 'E'] {
            rb.write(c);
        }
        rb.close();

        let mut reads = Vec::new();
        for _ in 0..5 {
            match rb.read() {
                ReadOutcome::Item(c) => reads.push(Some(c)),
                ReadOutcome::EndOfStream => reads.push(None),
            }
        }

        assert_eq!(reads, vec![Some('C'), Some('D'), Some('E'), None, None]);
        assert_eq!(rb.total_dropped(), 2);
        assert_eq!(rb.peak_size(), 3);
    }

    #[test]
    fn clean_drain_after_close() {
        // capacity 5, writes [X, Y], close, then reads.
        let rb = RingBuffer::new(5);
        rb.write("X");
        rb.write("Y");
        rb.close();

        assert_eq!(rb.read(), ReadOutcome::Item("X"));
        assert_eq!(rb.read(), ReadOutcome::Item("Y"));
        assert_eq!(rb.read(), ReadOutcome::EndOfStream);
        assert_eq!(rb.total_dropped(), 0);
    }

    #[test]
    fn close_is_idempotent() {
        let rb: RingBuffer<u8> = RingBuffer::new(2);
        rb.close();
        rb.close();
        assert!(rb.is_closed());
        assert_eq!(rb.read(), ReadOutcome::EndOfStream);
    }

    #[test]
    fn writes_after_close_are_ignored() {
        let rb = RingBuffer::new(2);
        rb.write(1);
        rb.close();
        rb.write(2);
        assert_eq!(rb.read(), ReadOutcome::Item(1));
        assert_eq!(rb.read(), ReadOutcome::EndOfStream);
    }

    #[test]
    fn concurrent_spsc_preserves_relative_order() {
        let rb = RingBuffer::new(64);
        let producer = rb.clone();
        let handle = thread::spawn(move || {
            for i in 0..10_000u64 {
                producer.write(i);
            }
            producer.close();
        });

        let mut last_seen: Option<u64> = None;
        loop {
            match rb.read() {
                ReadOutcome::Item(v) => {
                    if let Some(prev) = last_seen {
                        assert!(v > prev, "read {v} out of order after {prev}");
                    }
                    last_seen = Some(v);
                }
                ReadOutcome::EndOfStream => break,
            }
        }
        handle.join().unwrap();
        assert_eq!(rb.total_written(), rb.total_read() + rb.total_dropped());
    }

    #[test]
    fn cancellation_unblocks_reader_without_closing() {
        let rb: RingBuffer<u8> = RingBuffer::new(4);
        let token = rb.cancel_token();
        let reader = rb.clone();

        let handle = thread::spawn(move || reader.read());
        thread::sleep(Duration::from_millis(20));
        token.cancel();

        assert_eq!(handle.join().unwrap(), ReadOutcome::EndOfStream);
        assert!(!rb.is_closed());
    }

    #[test]
    fn peak_size_tracks_maximum_occupancy() {
        let rb = RingBuffer::new(4);
        rb.write(1);
        rb.write(2);
        rb.write(3);
        assert_eq!(rb.peak_size(), 3);
        rb.read();
        rb.read();
        assert_eq!(rb.peak_size(), 3, "peak must not decrease on read");
        rb.write(4);
        rb.write(5);
        assert_eq!(rb.peak_size(), 3);
    }
}
