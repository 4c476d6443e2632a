//! Numeric progress tracking and the timed action built on it.
//!
//! A [`Countdown`] is a plain `elapsed / needed` pair.  A [`CountdownAction`]
//! drives a countdown that lives *outside* the action (behind a
//! [`SharedCountdown`]) so that whoever owns the countdown can read its
//! progress while the action is in flight.  The placement state machine uses
//! this to report how far along a move is.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::{Action, Status};

/// A countdown shared between an action and an observer of its progress.
pub type SharedCountdown = Rc<Cell<Countdown>>;

// ── Countdown ─────────────────────────────────────────────────────────────────

/// Tracks progress towards reaching a numerical goal.
///
/// Invariant: `0 <= elapsed <= needed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    elapsed: u64,
    needed:  u64,
}

impl Countdown {
    /// A fresh countdown towards `needed`.
    pub fn to(needed: u64) -> Self {
        Self { elapsed: 0, needed }
    }

    /// Start over towards a new target.
    pub fn reset_target(&mut self, needed: u64) {
        *self = Self::to(needed);
    }

    /// How far along the countdown is, from 0 (not started) to 1 (complete).
    ///
    /// A countdown with nothing to count is complete.
    pub fn progress(&self) -> f64 {
        if self.needed == 0 {
            return 1.0;
        }
        self.elapsed as f64 / self.needed as f64
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.needed
    }

    #[inline]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    #[inline]
    pub fn needed(&self) -> u64 {
        self.needed
    }

    /// Advance by at most what is still needed.  Returns the part of
    /// `amount` that was not used.
    pub fn count_down(&mut self, amount: u64) -> u64 {
        let needed_left = self.needed - self.elapsed;
        if amount >= needed_left {
            self.elapsed = self.needed;
            return amount - needed_left;
        }
        self.elapsed += amount;
        0
    }

    /// An action that counts `countdown` down over `lasting`.
    ///
    /// The target is set when the action first runs, not here, so building
    /// the action ahead of time (e.g. as a later step of a sequence) leaves
    /// the countdown untouched until its turn comes.
    pub fn action(countdown: &SharedCountdown, lasting: Duration) -> CountdownAction {
        CountdownAction::new(Rc::clone(countdown), lasting)
    }
}

// ── CountdownAction ───────────────────────────────────────────────────────────

/// Counts a shared countdown down over a fixed duration, in nanoseconds.
pub struct CountdownAction {
    countdown:   SharedCountdown,
    lasting:     Duration,
    initialized: bool,
}

impl CountdownAction {
    pub fn new(countdown: SharedCountdown, lasting: Duration) -> Self {
        Self { countdown, lasting, initialized: false }
    }
}

impl Action for CountdownAction {
    fn run(&mut self, budget: Duration) -> Status {
        let mut countdown = self.countdown.get();
        if !self.initialized {
            countdown.reset_target(nanos(self.lasting));
            self.initialized = true;
        }
        let left = countdown.count_down(nanos(budget));
        self.countdown.set(countdown);

        if !countdown.is_complete() {
            return Status::paused();
        }
        Status::done(Duration::from_nanos(left))
    }
}

/// Saturating `Duration` → nanosecond count.  Durations beyond ~584 years
/// are clamped.
#[inline]
fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
