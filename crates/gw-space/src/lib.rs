//! `gw-space` — grid occupancy, space takers, and path finding.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`space`]   | `Space` (shared occupancy map), `Position`, `WeakPosition`     |
//! | [`taker`]   | `SpaceTaker` trait, `OnePosTaker`, `dummy_taker`, `TakePosition` |
//! | [`path`]    | `Path`, `PathFinder` (A* over free, existing cells)            |
//! | [`error`]   | `SpaceError`, `SpaceResult<T>`                                 |
//!
//! # Occupancy model
//!
//! Every point of the infinite grid is in exactly one of three states:
//!
//! ```text
//! absent          the cell does not exist           Create → free
//! free            exists, nobody holds it           Take   → taken, Destroy → absent
//! taken(taker)    exists, held exclusively          Free   → free
//! ```
//!
//! All transitions report failure as `false` rather than an error: a refused
//! transition is an ordinary outcome of the game, not a fault.
//!
//! # Threading
//!
//! `Space` is an `Rc` handle and therefore `!Send`.  The whole simulation
//! runs on one thread, one tick at a time; nothing here needs a lock.

pub mod error;
pub mod path;
pub mod space;
pub mod taker;


pub use error::{SpaceError, SpaceResult};
pub use path::{Path, PathFinder};
pub use space::{Position, Space, WeakPosition};
pub use taker::{DummyTaker, OnePosTaker, SpaceTaker, TakePosition, dummy_taker};
