//! Deferred task scheduling
//!
//! A cooperative timer queue polled by the event loop. Tasks are plain
//! values; the owner decides what running one means. Nothing scheduled runs
//! on the turn that scheduled it. Single tasks cannot be cancelled; the
//! owner may only drop the whole queue.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Entry<T> {
    due: Instant,
    seq: u64,
    task: T,
}

/// Queue of tasks waiting for their due time.
#[derive(Debug)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `task` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due: now + delay,
            seq,
            task,
        });
    }

    /// Remove and return every task due at or before `now`, earliest first.
    /// Tasks with the same due time keep their scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        if !self.entries.iter().any(|entry| entry.due <= now) {
            return Vec::new();
        }

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.due <= now);
        self.entries = pending;

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    /// Due time of the earliest pending task
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
