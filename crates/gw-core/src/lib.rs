//! `gw-core` — foundational types for the `gridwalk` simulation.
//!
//! This crate is a dependency of every other `gw-*` crate.  It intentionally
//! has no `gw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde` and `toml`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `EntityId`                                            |
//! | [`point`]       | `Point`, Manhattan distance, 4-neighbourhood          |
//! | [`time`]        | `Tick`, `FrameClock`                                  |
//! | [`config`]      | `WorldConfig`                                         |
//! | [`rng`]         | `EntityRng` (per-entity), `WorldRng` (global)         |
//! | [`error`]       | `GwError`, `GwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `WorldConfig` from a TOML file.           |

pub mod config;
pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WorldConfig;
pub use error::{GwError, GwResult};
pub use ids::EntityId;
pub use point::{Point, p};
pub use rng::{EntityRng, WorldRng};
pub use time::{FrameClock, Tick};
