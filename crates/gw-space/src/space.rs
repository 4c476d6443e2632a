//! The occupancy map and handles into it.
//!
//! # Data layout
//!
//! A `Space` is a cheap, clonable handle (`Rc<RefCell<..>>`) to one map:
//!
//! ```text
//! Point → None          exists, free
//! Point → Some(taker)   exists, taken by `taker`
//! (no key)              does not exist
//! ```
//!
//! The bounding corners of all existing points are cached and recomputed on
//! every `create`/`destroy`.  That is O(points), which is fine: the grid is
//! shaped once at startup and looked up every frame.
//!
//! A [`Position`] is a `(Space, Point)` pair.  It holds no state of its own;
//! two positions are equal only when they name the same point of the *same*
//! space instance.
//!
//! The map owns its occupants, so an occupant that remembers where it stands
//! must do so through a [`WeakPosition`].  A strong `Position` stored inside a
//! taker would keep the whole space alive.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use log::trace;
use rustc_hash::FxHashMap;

use gw_core::Point;

use crate::SpaceTaker;

type Occupant = Option<Rc<dyn SpaceTaker>>;

#[derive(Default)]
struct SpaceState {
    poses: FxHashMap<Point, Occupant>,
    min:   Point,
    max:   Point,
}

impl SpaceState {
    fn recompute_bounds(&mut self) {
        let mut points = self.poses.keys().copied();
        let Some(first) = points.next() else {
            self.min = Point::ZERO;
            self.max = Point::ZERO;
            return;
        };
        let (min, max) = points.fold((first, first), |(lo, hi), pt| {
            (lo.component_min(pt), hi.component_max(pt))
        });
        self.min = min;
        self.max = max;
    }
}

// ── Space ─────────────────────────────────────────────────────────────────────

/// A subspace of the 2D grid where things can exist and interact.
///
/// Which points exist can change at any time.  Cloning a `Space` clones the
/// handle, not the map.
#[derive(Clone, Default)]
pub struct Space {
    state: Rc<RefCell<SpaceState>>,
}

impl Space {
    /// A new, empty space.
    pub fn new() -> Self {
        Self::default()
    }

    /// The position at `at`.  Pure: the point need not exist.
    #[inline]
    pub fn at(&self, at: Point) -> Position {
        Position { space: self.clone(), at }
    }

    /// Component-wise minimum over existing points; zero when empty.
    pub fn min(&self) -> Point {
        self.state.borrow().min
    }

    /// Component-wise maximum over existing points; zero when empty.
    pub fn max(&self) -> Point {
        self.state.borrow().max
    }

    /// Number of existing points.
    pub fn len(&self) -> usize {
        self.state.borrow().poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().poses.is_empty()
    }

    /// All existing points in row-major order.
    pub fn points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.state.borrow().poses.keys().copied().collect();
        points.sort_unstable();
        points
    }

    /// Create every point of the rectangle spanned by `min` and `max` (both
    /// inclusive).  Returns how many points were newly created.
    pub fn fill(&self, min: Point, max: Point) -> usize {
        let mut created = 0;
        let mut state = self.state.borrow_mut();
        for row in min.row..=max.row {
            for column in min.column..=max.column {
                let pt = Point::new(row, column);
                if !state.poses.contains_key(&pt) {
                    state.poses.insert(pt, None);
                    created += 1;
                }
            }
        }
        if created > 0 {
            state.recompute_bounds();
        }
        created
    }

    /// `true` if `self` and `other` are handles to the same space.
    #[inline]
    pub fn same_as(&self, other: &Space) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn occupant(&self, at: Point) -> Option<Occupant> {
        self.state.borrow().poses.get(&at).cloned()
    }
}

impl PartialEq for Space {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Space {}

impl fmt::Debug for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Space")
            .field("points", &state.poses.len())
            .field("min", &state.min)
            .field("max", &state.max)
            .finish()
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

/// A point within one particular space.
#[derive(Clone)]
pub struct Position {
    space: Space,
    at:    Point,
}

impl Position {
    /// The grid point of this position.
    #[inline]
    pub fn at_point(&self) -> Point {
        self.at
    }

    /// The space this position belongs to.
    #[inline]
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// A handle to this position that does not keep the space alive.
    pub fn downgrade(&self) -> WeakPosition {
        WeakPosition { space: Rc::downgrade(&self.space.state), at: self.at }
    }

    /// Whether the position exists within its space.
    pub fn exists(&self) -> bool {
        self.space.state.borrow().poses.contains_key(&self.at)
    }

    /// Whether something holds the position.  Never true for a position that
    /// does not exist.
    pub fn taken(&self) -> bool {
        matches!(self.space.occupant(self.at), Some(Some(_)))
    }

    /// Whether `taker` specifically holds the position.
    pub fn taken_by<T: SpaceTaker + ?Sized>(&self, taker: &Rc<T>) -> bool {
        self.is_held_by(&**taker)
    }

    /// Identity check against a taker reference, for takers that only have
    /// `&self` at hand.
    pub fn is_held_by<T: SpaceTaker + ?Sized>(&self, taker: &T) -> bool {
        match self.space.occupant(self.at) {
            Some(Some(occupant)) => {
                Rc::as_ptr(&occupant).cast::<()>() == (taker as *const T).cast::<()>()
            }
            _ => false,
        }
    }

    /// Make the position exist.  Fails if it already does; a taken position
    /// stays taken.
    pub fn create(&self) -> bool {
        let mut state = self.space.state.borrow_mut();
        if state.poses.contains_key(&self.at) {
            return false;
        }
        state.poses.insert(self.at, None);
        state.recompute_bounds();
        trace!("created {}", self.at);
        true
    }

    /// Make the position stop existing.  Fails if it does not exist or is
    /// taken.
    pub fn destroy(&self) -> bool {
        let mut state = self.space.state.borrow_mut();
        match state.poses.get(&self.at) {
            Some(None) => {}
            _ => return false,
        }
        state.poses.remove(&self.at);
        state.recompute_bounds();
        trace!("destroyed {}", self.at);
        true
    }

    /// Try to hand the position to `taker`.  Fails if the position does not
    /// exist or is already taken.
    ///
    /// On success `taker.let_onto` is called *before* the occupant is
    /// recorded, so a [`OnePosTaker`](crate::OnePosTaker) can release its
    /// previous position from inside the callback.
    pub fn take(&self, taker: Rc<dyn SpaceTaker>) -> bool {
        if !matches!(self.space.occupant(self.at), Some(None)) {
            return false;
        }
        taker.let_onto(self);

        let mut state = self.space.state.borrow_mut();
        match state.poses.get_mut(&self.at) {
            Some(slot) if slot.is_none() => {
                *slot = Some(taker);
                trace!("took {}", self.at);
                true
            }
            // The callback reshaped this very cell.
            _ => false,
        }
    }

    /// Evict whoever holds the position.  Fails if it is not taken.
    ///
    /// The occupant's `force_off` runs before the slot is cleared.
    pub fn free(&self) -> bool {
        let Some(Some(occupant)) = self.space.occupant(self.at) else {
            return false;
        };
        occupant.force_off(self);

        if let Some(slot) = self.space.state.borrow_mut().poses.get_mut(&self.at) {
            *slot = None;
        }
        trace!("freed {}", self.at);
        true
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.space.same_as(&other.space)
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.space.state).hash(state);
        self.at.hash(state);
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position{}", self.at)
    }
}

// ── WeakPosition ──────────────────────────────────────────────────────────────

/// A [`Position`] whose space may already be gone.
#[derive(Clone)]
pub struct WeakPosition {
    space: Weak<RefCell<SpaceState>>,
    at:    Point,
}

impl WeakPosition {
    #[inline]
    pub fn at_point(&self) -> Point {
        self.at
    }

    /// The position, if its space is still alive.
    pub fn upgrade(&self) -> Option<Position> {
        let state = self.space.upgrade()?;
        Some(Position { space: Space { state }, at: self.at })
    }

    /// Whether this names the same point of the same space as `pos`.
    pub fn refers_to(&self, pos: &Position) -> bool {
        self.at == pos.at && std::ptr::eq(self.space.as_ptr(), Rc::as_ptr(&pos.space.state))
    }
}

impl fmt::Debug for WeakPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakPosition{}", self.at)
    }
}
