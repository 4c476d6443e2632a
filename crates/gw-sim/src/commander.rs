//! The `Commander` trait: who decides where idle entities go.

use gw_core::{EntityId, EntityRng, Point, Tick};
use gw_space::Space;

/// Read-only view of the world handed to a [`Commander`].
pub struct CommandContext<'a> {
    /// The tick being processed.
    pub tick: Tick,

    /// Corners of the configured playable rectangle (inclusive).
    pub min: Point,
    pub max: Point,

    /// The occupancy map.  Commanders may inspect it but must not take or
    /// free cells.
    pub space: &'a Space,
}

/// Pluggable move selection.
///
/// Called once per tick for every entity that has nothing to do.  Returning
/// `Some(target)` asks the world to plan a walk there; `None` leaves the
/// entity idle until the next tick.
///
/// Randomness must come from `rng`, which is the entity's own generator, so
/// runs stay reproducible from the config seed.
///
/// # Example
///
/// ```rust,ignore
/// struct GoHome;
///
/// impl Commander for GoHome {
///     fn next_target(&self, _: EntityId, at: Point, _: &CommandContext<'_>, _: &mut EntityRng)
///         -> Option<Point>
///     {
///         (at != Point::ZERO).then_some(Point::ZERO)
///     }
/// }
/// ```
pub trait Commander: 'static {
    fn next_target(
        &self,
        entity: EntityId,
        at:     Point,
        ctx:    &CommandContext<'_>,
        rng:    &mut EntityRng,
    ) -> Option<Point>;
}

/// A commander that never moves anyone.  Entities only move on explicit
/// [`World::command`](crate::World::command) calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleCommander;

impl Commander for IdleCommander {
    #[inline]
    fn next_target(
        &self,
        _entity: EntityId,
        _at:     Point,
        _ctx:    &CommandContext<'_>,
        _rng:    &mut EntityRng,
    ) -> Option<Point> {
        None
    }
}

/// Sends every idle entity to a uniformly random cell of the playable
/// rectangle.
///
/// `restlessness` is the chance, per idle tick, that a new target is picked
/// at all.
#[derive(Debug, Clone, Copy)]
pub struct Wanderer {
    pub restlessness: f64,
}

impl Default for Wanderer {
    fn default() -> Self {
        Self { restlessness: 1.0 }
    }
}

impl Commander for Wanderer {
    fn next_target(
        &self,
        _entity: EntityId,
        at:      Point,
        ctx:     &CommandContext<'_>,
        rng:     &mut EntityRng,
    ) -> Option<Point> {
        if !rng.gen_bool(self.restlessness) {
            return None;
        }
        let target = rng.point_within(ctx.min, ctx.max);
        (target != at).then_some(target)
    }
}
