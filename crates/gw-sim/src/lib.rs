//! `gw-sim` — tick loop orchestrator for the gridwalk simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   for entity in ascending EntityId order:
//!     ① Command — idle entity? ask the Commander for a target and plan a
//!                 walk there (rejections go to the observer).
//!     ② Run     — run the entity's action with the frame budget.
//!     ③ Retire  — Done / Interrupted → replace with NoAction; entity idle.
//! ```
//!
//! Everything runs on one thread.  The grid is an `Rc`-shared occupancy map
//! (see `gw-space`), so `World` is `!Send`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gw_core::WorldConfig;
//! use gw_sim::{NoopObserver, Wanderer, WorldBuilder};
//!
//! let mut world = WorldBuilder::new(WorldConfig::default())
//!     .commander(Wanderer::default())
//!     .build()?;
//! world.run(&mut NoopObserver);
//! println!("{:?}", world.positions());
//! ```

pub mod builder;
pub mod commander;
pub mod error;
pub mod observer;
pub mod world;


pub use builder::WorldBuilder;
pub use commander::{CommandContext, Commander, IdleCommander, Wanderer};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use world::World;
