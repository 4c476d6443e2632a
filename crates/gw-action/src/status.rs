//! The value every `Action::run` call returns.

use std::time::Duration;

/// Says whether an action completed, and how much of the offered budget it
/// did not use.
///
/// At most one of `done` / `interrupted` is set.  With neither set the action
/// is paused: it used the whole budget and needs more.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Status {
    time_left:   Duration,
    done:        bool,
    interrupted: bool,
}

impl Status {
    /// The action has completed.  `time_left` is the budget it did not use.
    #[inline]
    pub fn done(time_left: Duration) -> Self {
        Self { time_left, done: true, interrupted: false }
    }

    /// `Done` with whatever is left of `budget` after spending `spent`.
    /// Overspending clamps to zero time left.
    #[inline]
    pub fn done_after(budget: Duration, spent: Duration) -> Self {
        Self::done(budget.saturating_sub(spent))
    }

    /// The action can never complete.  `time_left` is the budget it did not
    /// use.
    #[inline]
    pub fn interrupted(time_left: Duration) -> Self {
        Self { time_left, done: false, interrupted: true }
    }

    /// The action needs more time.  Reports no time left.
    #[inline]
    pub fn paused() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        !self.done && !self.interrupted
    }

    /// `true` once the action will never need to be run again.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.done || self.interrupted
    }

    #[inline]
    pub fn has_time_left(&self) -> bool {
        !self.time_left.is_zero()
    }

    #[inline]
    pub fn time_left(&self) -> Duration {
        self.time_left
    }
}
