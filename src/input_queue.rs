use std::collections::VecDeque;

use crate::config::MAX_QUEUED_DIRECTIONS;
use crate::input::Direction;

/// Outcome of offering one direction to the queue.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EnqueueOutcome {
    Accepted,
    /// Duplicate of, or reversal of, the direction it would follow.
    Rejected,
    /// Valid against the tail but the queue was full.
    Dropped,
}

/// Bounded FIFO of pending direction changes.
///
/// Each candidate is checked against the queue tail, or the last applied
/// direction when the queue is empty; duplicates and reversals are dropped.
/// A full queue keeps its entries; the newest slot is never overwritten.
#[derive(Debug, Clone)]
pub struct InputQueue {
    pending: VecDeque<Direction>,
    current: Direction,
    capacity: usize,
}

impl InputQueue {
    /// Creates an empty queue for a snake currently heading `current`.
    #[must_use]
    pub fn new(current: Direction) -> Self {
        Self::with_capacity(current, MAX_QUEUED_DIRECTIONS)
    }

    #[must_use]
    pub fn with_capacity(current: Direction, capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            pending: VecDeque::with_capacity(capacity),
            current,
            capacity,
        }
    }

    /// Offers a direction change.
    pub fn enqueue(&mut self, direction: Direction) -> EnqueueOutcome {
        let tail = self.pending.back().copied().unwrap_or(self.current);
        if !accepts(tail, direction) {
            return EnqueueOutcome::Rejected;
        }

        // A replacement for the tail would have to follow both the tail and
        // the entry before it; those are perpendicular, so none can.
        if self.pending.len() >= self.capacity {
            return EnqueueOutcome::Dropped;
        }

        self.pending.push_back(direction);
        EnqueueOutcome::Accepted
    }

    /// Pops the oldest pending direction for the upcoming step.
    ///
    /// `current` is the direction the simulation is heading now; it becomes
    /// the baseline for later candidates once the queue drains.
    pub fn dequeue_next(&mut self, current: Direction) -> Option<Direction> {
        self.current = current;
        let next = self.pending.pop_front()?;
        self.current = next;
        Some(next)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterates over pending directions, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Direction> {
        self.pending.iter()
    }
}

fn accepts(base: Direction, candidate: Direction) -> bool {
    candidate != base && !candidate.is_reverse_of(base)
}
