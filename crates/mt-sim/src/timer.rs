//! `RefreshTimer`: the single recurring job of the simulation.
//!
//! The timer fires every `interval_ticks` ticks until it is cancelled.
//! Cancellation is permanent: nothing re-arms a cancelled timer except a
//! fresh [`arm`](RefreshTimer::arm) after re-initialization.

use mt_core::Tick;

#[derive(Clone, Debug)]
pub struct RefreshTimer {
    interval_ticks: u64,
    next_due:       Option<Tick>,
}

impl RefreshTimer {
    /// An unarmed timer with the given period.
    pub fn new(interval_ticks: u64) -> Self {
        Self { interval_ticks, next_due: None }
    }

    /// Schedule the first firing one interval after `now`.
    pub fn arm(&mut self, now: Tick) {
        self.next_due = Some(now + self.interval_ticks);
    }

    /// `true` if the timer is armed and `now` has reached its due tick.
    pub fn is_due(&self, now: Tick) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Schedule the next firing after a successful run at `now`.
    pub fn reschedule(&mut self, now: Tick) {
        if self.next_due.is_some() {
            self.next_due = Some(now + self.interval_ticks);
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Tick> {
        self.next_due
    }
}
