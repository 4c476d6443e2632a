//! World observer trait for progress reporting and data collection.

use gw_action::Status;
use gw_core::{EntityId, Point, Tick};
use gw_placement::PlacementError;

/// Callbacks invoked by [`World::tick`][crate::World::tick] and
/// [`World::run`][crate::World::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Arrivals(usize);
///
/// impl WorldObserver for Arrivals {
///     fn on_action_finished(&mut self, _: Tick, _: EntityId, status: Status) {
///         if status.is_done() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the very start of each tick, before any entity runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when an entity's action finishes, with its terminal status
    /// (done or interrupted).  The entity is idle from now on.
    fn on_action_finished(&mut self, _tick: Tick, _entity: EntityId, _status: Status) {}

    /// Called when a requested move could not be planned.
    fn on_move_rejected(
        &mut self,
        _tick:   Tick,
        _entity: EntityId,
        _target: Point,
        _error:  &PlacementError,
    ) {
    }

    /// Called at the end of each tick.
    ///
    /// `busy` is the number of entities still running an action.
    fn on_tick_end(&mut self, _tick: Tick, _busy: usize) {}

    /// Called once after the final tick of [`World::run`][crate::World::run].
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
