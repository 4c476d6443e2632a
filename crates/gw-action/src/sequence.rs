//! Running several actions one after another.

use std::collections::VecDeque;
use std::time::Duration;

use log::trace;

use crate::{Action, BoxAction, Status};

/// Runs steps back-to-back, handing each one the time the previous left over.
///
/// # Semantics
///
/// ```text
/// status = Done(budget)
/// while status is Done and steps remain:
///     status = next_step.run(status.time_left)
///     Done        → drop the step, continue
///     Interrupted → drop every remaining step, stop
///     Paused      → keep the step, stop
/// no steps left → status, otherwise Paused
/// ```
///
/// A step that finishes with exactly zero time left still lets the next step
/// run once with a zero budget, so instantaneous steps (taking a position,
/// arriving) happen in the same frame as the step before them.
#[derive(Default)]
pub struct Sequence {
    steps: VecDeque<BoxAction>,
}

impl Sequence {
    pub fn new<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = BoxAction>,
    {
        Self { steps: steps.into_iter().collect() }
    }

    /// A sequence with no steps.  Completes immediately.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a step to the end.
    pub fn push<A: Action + 'static>(&mut self, step: A) {
        self.steps.push_back(Box::new(step));
    }

    /// Number of steps not yet completed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn run_step(&mut self, budget: Duration) -> Status {
        let Some(step) = self.steps.front_mut() else {
            return Status::done(budget);
        };
        let status = step.run(budget);
        if status.is_interrupted() {
            trace!("sequence interrupted with {} step(s) pending", self.steps.len());
            self.steps.clear();
        } else if status.is_done() {
            self.steps.pop_front();
        }
        status
    }
}

impl Action for Sequence {
    fn run(&mut self, budget: Duration) -> Status {
        let mut status = Status::done(budget);
        while status.is_done() && !self.steps.is_empty() {
            status = self.run_step(status.time_left());
        }
        if self.steps.is_empty() {
            return status;
        }
        Status::paused()
    }
}

impl FromIterator<BoxAction> for Sequence {
    fn from_iter<I: IntoIterator<Item = BoxAction>>(iter: I) -> Self {
        Self::new(iter)
    }
}
