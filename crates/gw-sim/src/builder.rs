//! Fluent builder for constructing a [`World`].

use log::info;

use gw_core::{EntityId, FrameClock, GwError, WorldConfig, WorldRng};
use gw_placement::HeadedPlacement;
use gw_space::{PathFinder, Space};

use crate::world::Entity;
use crate::{Commander, IdleCommander, SimError, SimResult, World};

/// Fluent builder for [`World<C>`].
///
/// # Inputs
///
/// | Method           | Default           |
/// |------------------|-------------------|
/// | `new(config)`    | required          |
/// | `.commander(c)`  | [`IdleCommander`] |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config)
///     .commander(Wanderer::default())
///     .build()?;
/// world.run(&mut NoopObserver);
/// ```
pub struct WorldBuilder<C: Commander> {
    config:    WorldConfig,
    commander: C,
}

impl WorldBuilder<IdleCommander> {
    /// A builder whose entities stay put unless commanded.
    pub fn new(config: WorldConfig) -> Self {
        Self { config, commander: IdleCommander }
    }
}

impl<C: Commander> WorldBuilder<C> {
    /// Use `commander` to pick targets for idle entities.
    pub fn commander<D: Commander>(self, commander: D) -> WorldBuilder<D> {
        WorldBuilder { config: self.config, commander }
    }

    /// Validate the config, fill the grid, place one entity per spawn point,
    /// and return a ready-to-run [`World`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Spawn`] if a spawn point is outside the grid or shares a
    ///   cell with an earlier spawn.
    /// - [`SimError::Core`] for any other invalid configuration.
    pub fn build(self) -> SimResult<World<C>> {
        let Self { config, commander } = self;
        match config.validate() {
            Err(GwError::OutOfBounds(pt)) => return Err(SimError::Spawn(pt)),
            other => other?,
        }

        let space = Space::new();
        let cells = space.fill(config.min, config.max);

        let mut world_rng = WorldRng::new(config.seed);
        let mut entities = Vec::with_capacity(config.spawns.len());
        for (i, &spawn) in config.spawns.iter().enumerate() {
            let id = EntityId::try_from(i)
                .map_err(|_| GwError::Config(format!("too many spawn points ({i}+)")))?;
            let placement = HeadedPlacement::new();
            if !placement.place(&space.at(spawn)) {
                return Err(SimError::Spawn(spawn));
            }
            entities.push(Entity::new(placement, world_rng.entity(id)));
        }

        info!(
            "world ready: {cells} cells from {} to {}, {} entities",
            config.min,
            config.max,
            entities.len()
        );

        Ok(World {
            config,
            clock: FrameClock::new(),
            finder: PathFinder::new(&space),
            space,
            entities,
            commander,
        })
    }
}
