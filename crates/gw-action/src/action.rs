//! The `Action` trait and its primitive implementations.

use std::time::Duration;

use crate::Status;

/// A process stretched out in time.
///
/// # Contract
///
/// - `run` consumes at most `budget` and reports what happened.
/// - A `Paused` action keeps its progress; the next `run` picks up from it.
/// - `run` must tolerate a zero budget.  A `Sequence` hands the next step
///   whatever time the previous step left over, which may be nothing, and
///   instantaneous steps still have to happen.
/// - Only one caller drives a given action.
pub trait Action {
    fn run(&mut self, budget: Duration) -> Status;
}

/// Owned, type-erased action, as stored by sequences and drivers.
pub type BoxAction = Box<dyn Action>;

impl<A: Action + ?Sized> Action for Box<A> {
    #[inline]
    fn run(&mut self, budget: Duration) -> Status {
        (**self).run(budget)
    }
}

// ── NoAction ──────────────────────────────────────────────────────────────────

/// Completes instantly and has no side effects.
///
/// Drivers park this in an idle slot instead of an `Option`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoAction;

impl Action for NoAction {
    #[inline]
    fn run(&mut self, budget: Duration) -> Status {
        Status::done(budget)
    }
}

// ── Interrupt ─────────────────────────────────────────────────────────────────

/// Interrupts immediately, handing back the whole budget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Interrupt;

impl Action for Interrupt {
    #[inline]
    fn run(&mut self, budget: Duration) -> Status {
        Status::interrupted(budget)
    }
}

// ── Wait ──────────────────────────────────────────────────────────────────────

/// Lasts a fixed amount of time and does nothing.
///
/// However the budget is split across calls, the action completes once the
/// calls add up to the wait time and returns the surplus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wait {
    to_end: Duration,
}

impl Wait {
    pub fn new(duration: Duration) -> Self {
        Self { to_end: duration }
    }

    /// Time still needed before the wait completes.
    #[inline]
    pub fn remaining(&self) -> Duration {
        self.to_end
    }
}

impl Action for Wait {
    fn run(&mut self, budget: Duration) -> Status {
        if budget < self.to_end {
            self.to_end -= budget;
            return Status::paused();
        }
        let left = budget - self.to_end;
        self.to_end = Duration::ZERO;
        Status::done(left)
    }
}
