//! Fire-once timers on a virtual clock
//!
//! The page runs on a single event loop; timers are queued with an absolute
//! due time and handed back by [`TimerQueue::advance`] once the clock passes
//! them. Entries due at the same instant fire in scheduling order.

use std::time::Duration;
use super::document::ElementId;

/// Deferred page work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Add `show` to a toast
    ShowToast(ElementId),
    /// Remove `show` from a toast and schedule its removal
    HideToast(ElementId),
    /// Detach an element after its exit transition
    RemoveElement(ElementId),
}

#[derive(Debug, Clone)]
struct TimerEntry {
    due: Duration,
    seq: u64,
    task: TimerTask,
}

/// Pending timers ordered by due time
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Schedule `task` to run `delay` after the current instant
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) {
        self.entries.push(TimerEntry {
            due: self.now + delay,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    /// Move the clock forward and return every task that came due, in order
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerTask> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.due <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    /// Due time of the earliest pending timer, relative to now
    pub fn next_due_in(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|entry| entry.due.saturating_sub(self.now))
            .min()
    }
}
