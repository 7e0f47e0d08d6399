//! Cancellable delayed tasks.
//!
//! Every delayed effect in the interaction layer owns a [`TimerHandle`], so
//! a new gesture can cancel pending work instead of racing it.

use std::cell::Cell;
use std::rc::Rc;

/// Cancellation handle for a scheduled task. Dropping the handle does not
/// cancel the task; call [`TimerHandle::cancel`].
#[derive(Clone, Debug)]
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

struct TimerEntry<T> {
    due_nanos: u64,
    task: T,
    cancelled: Rc<Cell<bool>>,
}

/// Ordered queue of delayed tasks, polled against the host clock.
///
/// Tasks are plain values (typically an action enum) rather than closures,
/// so firing cannot alias the owner mutably; the owner interprets the
/// returned actions itself.
pub struct TimerQueue<T> {
    entries: Vec<TimerEntry<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `task` to fire `delay_millis` after `now_nanos`.
    pub fn schedule_millis(&mut self, delay_millis: u64, now_nanos: u64, task: T) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.entries.push(TimerEntry {
            due_nanos: now_nanos + delay_millis * 1_000_000,
            task,
            cancelled: Rc::clone(&cancelled),
        });
        TimerHandle { cancelled }
    }

    /// Remove and return every non-cancelled task due at or before
    /// `now_nanos`, in due order.
    pub fn fire_due(&mut self, now_nanos: u64) -> Vec<T> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.cancelled.get() {
                continue;
            }
            if entry.due_nanos <= now_nanos {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;
        due.sort_by_key(|entry| entry.due_nanos);
        due.into_iter().map(|entry| entry.task).collect()
    }

    /// True if any non-cancelled task is still waiting.
    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(|entry| !entry.cancelled.get())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
