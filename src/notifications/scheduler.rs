// SPDX-License-Identifier: MPL-2.0
//! One-shot expiry timers.
//!
//! The scheduler only keeps deadlines; it never runs callbacks itself. Whoever
//! drives it (the manager's `tick`, or the notifier's async loop) asks for the
//! ids that are due and removes them.

use super::notification::NotificationId;
use std::collections::BTreeMap;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct TimerId(u64);

/// Handle to a pending expiry timer.
///
/// Owned by the visible notification it was scheduled for. Cancelling through
/// [`Scheduler::cancel`] is idempotent.
#[derive(Debug, PartialEq, Eq)]
pub struct TimerHandle {
    id: TimerId,
    deadline: Instant,
}

impl TimerHandle {
    /// Returns the instant at which this timer fires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// Deadline-ordered set of pending timers.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: BTreeMap<(Instant, TimerId), NotificationId>,
    next_id: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `target` to expire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, target: NotificationId) -> TimerHandle {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert((deadline, id), target);
        TimerHandle { id, deadline }
    }

    /// Cancels a pending timer.
    ///
    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, handle: &TimerHandle) -> bool {
        self.timers.remove(&(handle.deadline, handle.id)).is_some()
    }

    /// Removes and returns every target whose deadline is at or before `now`,
    /// earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut due = Vec::new();
        while let Some(entry) = self.timers.first_entry() {
            if entry.key().0 > now {
                break;
            }
            due.push(entry.remove());
        }
        due
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
