//! Things that can hold positions.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gw_action::{Action, Status};
use gw_core::Point;

use crate::{Position, WeakPosition};

/// Something that can take a position.
///
/// Both callbacks are notifications: the space has already decided the
/// outcome.  Implementations may call back into the space (e.g. free another
/// position), since no internal borrow is held during the call.
pub trait SpaceTaker {
    /// Called while `pos` is being given to this taker.
    fn let_onto(&self, pos: &Position);

    /// Called while this taker is being evicted from `pos`.
    fn force_off(&self, pos: &Position);
}

// ── OnePosTaker ───────────────────────────────────────────────────────────────

/// A taker that holds at most one position at a time.
///
/// Taking a new position releases the previous one, if this taker still
/// holds it.  Being forced off does not clear the record; use
/// [`placed`](Self::placed) together with [`Position::is_held_by`] when the
/// difference matters.
///
/// The record is a [`WeakPosition`]: the space owns its takers, never the
/// other way round.
#[derive(Debug, Default)]
pub struct OnePosTaker {
    pos: RefCell<Option<WeakPosition>>,
}

impl OnePosTaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a position has been recorded.
    pub fn placed(&self) -> bool {
        self.pos.borrow().is_some()
    }

    /// The recorded point, or the zero point if none.
    pub fn at_point(&self) -> Point {
        self.pos.borrow().as_ref().map_or(Point::ZERO, WeakPosition::at_point)
    }

    /// The recorded position, if any and its space is still alive.
    pub fn position(&self) -> Option<Position> {
        self.pos.borrow().as_ref().and_then(WeakPosition::upgrade)
    }

    /// Release the recorded position (only if still held by this taker) and
    /// forget it.
    pub fn leave(&self) {
        let Some(old) = self.pos.borrow_mut().take().and_then(|w| w.upgrade()) else {
            return;
        };
        if old.is_held_by(self) {
            old.free();
        }
    }
}

impl SpaceTaker for OnePosTaker {
    fn let_onto(&self, pos: &Position) {
        let old = self.pos.borrow_mut().take();
        if let Some(old) = old.filter(|w| !w.refers_to(pos)).and_then(|w| w.upgrade()) {
            if old.is_held_by(self) {
                old.free();
            }
        }
        *self.pos.borrow_mut() = Some(pos.downgrade());
    }

    fn force_off(&self, _pos: &Position) {}
}

// ── DummyTaker ────────────────────────────────────────────────────────────────

/// A taker that ignores every notification.  Useful to mark positions as
/// blocked.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyTaker;

impl SpaceTaker for DummyTaker {
    fn let_onto(&self, _pos: &Position) {}
    fn force_off(&self, _pos: &Position) {}
}

thread_local! {
    static DUMMY: Rc<dyn SpaceTaker> = Rc::new(DummyTaker);
}

/// The shared dummy taker instance for this thread.
pub fn dummy_taker() -> Rc<dyn SpaceTaker> {
    DUMMY.with(Rc::clone)
}

// ── TakePosition ──────────────────────────────────────────────────────────────

/// An action that takes `pos` for `taker` without consuming time.
///
/// Done with the full budget on success; interrupted with the full budget if
/// the position is missing or occupied.
pub struct TakePosition {
    pos:   Position,
    taker: Rc<dyn SpaceTaker>,
}

impl TakePosition {
    pub fn new(pos: Position, taker: Rc<dyn SpaceTaker>) -> Self {
        Self { pos, taker }
    }
}

impl Action for TakePosition {
    fn run(&mut self, budget: Duration) -> Status {
        if self.pos.take(Rc::clone(&self.taker)) {
            Status::done(budget)
        } else {
            Status::interrupted(budget)
        }
    }
}
