//! `gw-placement` — entities on the grid and how they move between cells.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`headed`]  | `HeadedPlacement` — current cell, reserved heading, move progress |
//! | [`planner`] | `plan_move` — route search + `follow_path` in one call           |
//! | [`error`]   | `PlacementError`, `PlacementResult<T>`                            |
//!
//! # Movement model (reserve, count down, arrive)
//!
//! A single-cell move is three actions run back to back:
//!
//! 1. **Reserve** the destination as the placement's *heading*.  If the cell
//!    is missing or taken, the move is interrupted before any time passes.
//! 2. **Count down** the step duration.  The placement still holds its old
//!    cell; [`HeadedPlacement::progress`] reports the fraction elapsed so a
//!    renderer can interpolate between the two cells.
//! 3. **Arrive**: release the heading and take it as the current cell, which
//!    in turn releases the old one.
//!
//! A path is a check that the placement is at the path's first cell followed
//! by one such move per remaining cell.  A blocked step interrupts the rest of
//! the path; the placement stays wherever it got to.

pub mod error;
pub mod headed;
pub mod planner;


pub use error::{PlacementError, PlacementResult};
pub use headed::HeadedPlacement;
pub use planner::plan_move;
