//! The `World` struct and its tick loop.

use std::time::Duration;

use log::{debug, trace};

use gw_action::{BoxAction, NoAction, Status};
use gw_core::{EntityId, EntityRng, FrameClock, GwError, Point, WorldConfig};
use gw_placement::{HeadedPlacement, plan_move};
use gw_space::{PathFinder, Space};

use crate::{CommandContext, Commander, SimResult, WorldObserver};

// ── Entity ────────────────────────────────────────────────────────────────────

/// One movable thing: where it is, what it is doing, and its own RNG.
pub(crate) struct Entity {
    pub(crate) placement: HeadedPlacement,
    pub(crate) action:    BoxAction,
    pub(crate) busy:      bool,
    pub(crate) rng:       EntityRng,
}

impl Entity {
    pub(crate) fn new(placement: HeadedPlacement, rng: EntityRng) -> Self {
        Self { placement, action: Box::new(NoAction), busy: false, rng }
    }

    fn start(&mut self, action: BoxAction) {
        self.action = action;
        self.busy = true;
    }

    /// Run the current action.  Returns the terminal status if a real action
    /// finished this call; the slot then holds [`NoAction`] again.
    fn run(&mut self, dt: Duration) -> Option<Status> {
        let status = self.action.run(dt);
        if !status.is_finished() {
            return None;
        }
        self.action = Box::new(NoAction);
        std::mem::replace(&mut self.busy, false).then_some(status)
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `World<C>` owns the grid, every entity, and the commander that keeps idle
/// entities busy.  Each [`tick`](Self::tick), in ascending `EntityId` order:
///
/// 1. **Command**: an idle entity asks the commander for a target; if it gets
///    one, a walk there is planned and becomes its action.
/// 2. **Run**: the entity's action runs with the tick's budget.
/// 3. **Retire**: a done or interrupted action is replaced with
///    [`NoAction`] and the entity is idle again.
///
/// Lower ids act first within a tick, so when two entities race for a cell
/// the lower id wins.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<C: Commander> {
    /// Configuration the world was built from.
    pub config: WorldConfig,

    /// Frame counter and total simulated time.
    pub clock: FrameClock,

    pub(crate) space:     Space,
    pub(crate) finder:    PathFinder,
    pub(crate) entities:  Vec<Entity>,
    pub(crate) commander: C,
}

impl<C: Commander> World<C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `config.total_ticks` ticks of `config.frame_duration()` each.
    pub fn run<O: WorldObserver>(&mut self, observer: &mut O) {
        let dt = self.config.frame_duration();
        for _ in 0..self.config.total_ticks {
            self.tick(dt, observer);
        }
        observer.on_run_end(self.clock.current_tick);
    }

    /// Advance the world by one tick lasting `dt`.
    pub fn tick<O: WorldObserver>(&mut self, dt: Duration, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let step = self.config.step_duration();
        let ctx = CommandContext {
            tick:  now,
            min:   self.config.min,
            max:   self.config.max,
            space: &self.space,
        };

        let mut busy = 0;
        for (i, entity) in self.entities.iter_mut().enumerate() {
            let id = EntityId(i as u32);

            if !entity.busy {
                let at = entity.placement.at_point();
                if let Some(target) = self.commander.next_target(id, at, &ctx, &mut entity.rng) {
                    match plan_move(&entity.placement, &self.finder, target, step) {
                        Ok(action) => entity.start(action),
                        Err(e) => {
                            debug!("{now}: {id} cannot go {at} → {target}: {e}");
                            observer.on_move_rejected(now, id, target, &e);
                        }
                    }
                }
            }

            if let Some(status) = entity.run(dt) {
                trace!("{now}: {id} finished at {} ({status:?})", entity.placement.at_point());
                observer.on_action_finished(now, id, status);
            }
            if entity.busy {
                busy += 1;
            }
        }

        observer.on_tick_end(now, busy);
        self.clock.advance(dt);
    }

    /// Send `entity` walking to `target`, replacing whatever it was doing.
    ///
    /// The walk starts running on the next tick.
    ///
    /// # Errors
    ///
    /// - [`GwError::EntityNotFound`] for an unknown id.
    /// - A placement error if the entity is mid-move or the target cannot be
    ///   reached.  The current action is kept in that case.
    pub fn command(&mut self, entity: EntityId, target: Point) -> SimResult<()> {
        let step = self.config.step_duration();
        let slot = self
            .entities
            .get_mut(entity.index())
            .ok_or(GwError::EntityNotFound(entity))?;
        let action = plan_move(&slot.placement, &self.finder, target, step)?;
        slot.start(action);
        Ok(())
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn space(&self) -> &Space {
        &self.space
    }

    pub fn finder(&self) -> &PathFinder {
        &self.finder
    }

    pub fn commander(&self) -> &C {
        &self.commander
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// The placement of `entity`, if it exists.
    pub fn placement(&self, entity: EntityId) -> Option<&HeadedPlacement> {
        self.entities.get(entity.index()).map(|e| &e.placement)
    }

    /// Whether `entity` is running an action.  Unknown ids are idle.
    pub fn is_busy(&self, entity: EntityId) -> bool {
        self.entities.get(entity.index()).is_some_and(|e| e.busy)
    }

    /// Current cell of every entity, in id order.
    pub fn positions(&self) -> Vec<Point> {
        self.entities.iter().map(|e| e.placement.at_point()).collect()
    }
}
