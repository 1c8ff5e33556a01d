//! Bounded in-memory history of pressure samples.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::model::AllPressures;

/// Capacity-bounded FIFO of samples, shared between the poller and the UI.
///
/// The lock is held only for an append-and-maybe-evict or for a copy-out.
/// Readers get an owned `Vec`, so rendering never holds the lock and the
/// poller can keep pushing while a frame is drawn.
#[derive(Debug)]
pub struct HistoryBuffer {
    capacity: usize,
    samples: Mutex<VecDeque<AllPressures>>,
}

impl HistoryBuffer {
    /// Creates an empty history holding at most `capacity` samples.
    ///
    /// A zero capacity is raised to 1 so the newest sample is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a sample, evicting the oldest one when over capacity.
    pub fn push(&self, sample: AllPressures) {
        let mut samples = self.lock();
        samples.push_back(sample);
        if samples.len() > self.capacity {
            samples.pop_front();
        }
    }

    /// Copies out the last `min(n, len)` samples, oldest first.
    pub fn snapshot_tail(&self, n: usize) -> Vec<AllPressures> {
        let samples = self.lock();
        let skip = samples.len().saturating_sub(n);
        samples.iter().skip(skip).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are never edited in place, so a writer that panicked
    // mid-push cannot have left a torn element behind.
    fn lock(&self) -> MutexGuard<'_, VecDeque<AllPressures>> {
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn sample(ts: i64) -> AllPressures {
        AllPressures {
            timestamp: ts,
            ..AllPressures::default()
        }
    }

    fn timestamps(samples: &[AllPressures]) -> Vec<i64> {
        samples.iter().map(|s| s.timestamp).collect()
    }

    #[test]
    fn test_push_below_capacity_keeps_everything() {
        let history = HistoryBuffer::new(5);
        for ts in 0..3 {
            history.push(sample(ts));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(timestamps(&history.snapshot_tail(10)), vec![0, 1, 2]);
    }

    #[test]
    fn test_bound_holds_for_any_push_count() {
        for capacity in [1usize, 2, 7, 100] {
            for pushes in [0usize, 1, capacity - 1, capacity, capacity + 1, 3 * capacity] {
                let history = HistoryBuffer::new(capacity);
                for ts in 0..pushes {
                    history.push(sample(ts as i64));
                }

                let expected: Vec<i64> = (pushes.saturating_sub(capacity)..pushes)
                    .map(|ts| ts as i64)
                    .collect();
                assert_eq!(history.len(), pushes.min(capacity));
                assert_eq!(timestamps(&history.snapshot_tail(usize::MAX)), expected);
            }
        }
    }

    #[test]
    fn test_snapshot_tail_returns_newest_in_order() {
        let history = HistoryBuffer::new(10);
        for ts in 0..6 {
            history.push(sample(ts));
        }

        assert_eq!(timestamps(&history.snapshot_tail(2)), vec![4, 5]);
        assert!(history.snapshot_tail(0).is_empty());
    }

    #[test]
    fn test_snapshot_is_independent_of_later_pushes() {
        let history = HistoryBuffer::new(2);
        history.push(sample(1));
        history.push(sample(2));

        let copy = history.snapshot_tail(2);
        history.push(sample(3));

        assert_eq!(timestamps(&copy), vec![1, 2]);
        assert_eq!(timestamps(&history.snapshot_tail(2)), vec![2, 3]);
    }

    #[test]
    fn test_zero_capacity_keeps_newest() {
        let history = HistoryBuffer::new(0);
        history.push(sample(1));
        history.push(sample(2));

        assert_eq!(history.capacity(), 1);
        assert_eq!(timestamps(&history.snapshot_tail(5)), vec![2]);
    }

    #[test]
    fn test_concurrent_reader_sees_ordered_prefix() {
        let history = Arc::new(HistoryBuffer::new(50));
        let writer = {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                for ts in 0..500 {
                    history.push(sample(ts));
                }
            })
        };

        for _ in 0..200 {
            let tail = history.snapshot_tail(50);
            assert!(tail.len() <= 50);
            assert!(tail.windows(2).all(|w| w[1].timestamp == w[0].timestamp + 1));
        }

        writer.join().unwrap();
        assert_eq!(history.len(), 50);
        assert_eq!(history.snapshot_tail(1)[0].timestamp, 499);
    }
}
