//! The headed placement state machine.

use std::rc::Rc;
use std::time::Duration;

use log::trace;

use gw_action::{Action, BoxAction, Countdown, NoAction, Sequence, SharedCountdown, Status};
use gw_core::Point;
use gw_space::{OnePosTaker, Position, SpaceTaker, TakePosition};

/// Where an entity is on the grid, and where it is going.
///
/// A placement is in one of three states:
///
/// ```text
/// nowhere      !placed                 place(pos) → settled
/// settled      placed, !headed         move_to(dst).run(..) → in transit
/// in transit   placed, headed          countdown done → settled at heading
/// ```
///
/// While in transit the placement holds *two* cells: the one it left and the
/// one it is heading to.  Nothing else can enter either of them.
///
/// Actions returned by [`move_to`](Self::move_to) and
/// [`follow_path`](Self::follow_path) share the placement's takers and
/// countdown, so they stay valid after the placement itself is moved.
#[derive(Default)]
pub struct HeadedPlacement {
    pos:       Rc<OnePosTaker>,
    heading:   Rc<OnePosTaker>,
    countdown: SharedCountdown,
}

impl HeadedPlacement {
    /// A placement that is nowhere.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Whether the placement holds a cell.
    pub fn placed(&self) -> bool {
        self.pos.placed()
    }

    /// The current cell; the zero point when nowhere.  Use
    /// [`placed`](Self::placed) to tell the two apart.
    pub fn at_point(&self) -> Point {
        self.pos.at_point()
    }

    /// Whether the placement has reserved a destination cell.
    pub fn headed(&self) -> bool {
        self.heading.placed()
    }

    /// The reserved destination; the zero point when not headed.
    pub fn heading(&self) -> Point {
        self.heading.at_point()
    }

    /// How far along the current move is.
    ///
    /// `0` while nowhere, `1` while settled, and the countdown fraction while
    /// in transit.
    pub fn progress(&self) -> f64 {
        if !self.placed() {
            return 0.0;
        }
        if !self.headed() {
            return 1.0;
        }
        self.countdown.get().progress()
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    /// Try to put the placement at `pos`.  Any heading is dropped either way.
    ///
    /// Returns whether the placement is placed afterwards, so placing onto a
    /// taken cell while already placed elsewhere still reports `true`.
    pub fn place(&self, pos: &Position) -> bool {
        pos.take(self.pos_taker());
        self.heading.leave();
        self.placed()
    }

    /// Remove the placement from the grid, releasing both cells.
    pub fn leave(&self) {
        self.heading.leave();
        self.pos.leave();
    }

    /// An action that moves the placement one cell, to `dst`, over `dt`.
    ///
    /// The action reserves `dst` as it starts and is interrupted if it cannot.
    /// Returns [`NoAction`] if the placement is nowhere at the time of the
    /// call.
    pub fn move_to(&self, dst: &Position, dt: Duration) -> BoxAction {
        if !self.placed() {
            return Box::new(NoAction);
        }
        Box::new(Sequence::new([
            Box::new(TakePosition::new(dst.clone(), self.heading_taker())) as BoxAction,
            Box::new(Countdown::action(&self.countdown, dt)),
            Box::new(Arrive {
                pos:     Rc::clone(&self.pos),
                heading: Rc::clone(&self.heading),
                dst:     dst.clone(),
            }),
        ]))
    }

    /// An action that walks the placement along `path`, `step_dt` per cell.
    ///
    /// When it first runs it is interrupted unless the placement is at
    /// `path[0]`.  An empty path is done immediately.
    pub fn follow_path(&self, path: &[Position], step_dt: Duration) -> BoxAction {
        let Some((first, rest)) = path.split_first() else {
            return Box::new(Sequence::empty());
        };
        let check: BoxAction = Box::new(CheckAt {
            pos:      Rc::clone(&self.pos),
            expected: first.clone(),
        });
        let moves = rest.iter().map(|dst| self.move_to(dst, step_dt));
        Box::new(std::iter::once(check).chain(moves).collect::<Sequence>())
    }

    fn pos_taker(&self) -> Rc<dyn SpaceTaker> {
        self.pos.clone()
    }

    fn heading_taker(&self) -> Rc<dyn SpaceTaker> {
        self.heading.clone()
    }
}

impl std::fmt::Debug for HeadedPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadedPlacement")
            .field("pos", &self.pos.position())
            .field("heading", &self.heading.position())
            .field("countdown", &self.countdown.get())
            .finish()
    }
}

// ── Private steps ─────────────────────────────────────────────────────────────

/// Final step of a move: drop the heading, then take it as the position.
struct Arrive {
    pos:     Rc<OnePosTaker>,
    heading: Rc<OnePosTaker>,
    dst:     Position,
}

impl Action for Arrive {
    fn run(&mut self, budget: Duration) -> Status {
        self.heading.leave();
        // Refused only if the reservation was evicted mid-move and someone
        // else claimed `dst`.
        let pos: Rc<dyn SpaceTaker> = self.pos.clone();
        if !self.dst.take(pos) {
            trace!("lost {} before arriving", self.dst.at_point());
            return Status::interrupted(budget);
        }
        trace!("arrived at {}", self.dst.at_point());
        Status::done(budget)
    }
}

/// First step of a path: the placement must be where the path starts.
struct CheckAt {
    pos:      Rc<OnePosTaker>,
    expected: Position,
}

impl Action for CheckAt {
    fn run(&mut self, budget: Duration) -> Status {
        if self.pos.position().as_ref() != Some(&self.expected) {
            trace!("not at path start {}", self.expected.at_point());
            return Status::interrupted(budget);
        }
        Status::done(budget)
    }
}
