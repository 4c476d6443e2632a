//! Turning "go there" into a path-following action.

use std::time::Duration;

use log::debug;

use gw_action::BoxAction;
use gw_core::Point;
use gw_space::PathFinder;

use crate::{HeadedPlacement, PlacementError, PlacementResult};

/// Plan a walk for `placement` to `target`, one cell per `step`.
///
/// The placement is re-placed at its current cell first, which drops any
/// stale heading.  The route is searched through `finder`'s space as it is
/// now; cells taken later are handled by the walk itself, which stops at the
/// first step it cannot reserve.
///
/// # Errors
///
/// - [`PlacementError::NotPlaced`] if the placement is nowhere.
/// - [`PlacementError::AlreadyHeaded`] if it is in the middle of a move.
/// - [`PlacementError::Routing`] if the target is missing, foreign or
///   unreachable.
pub fn plan_move(
    placement: &HeadedPlacement,
    finder:    &PathFinder,
    target:    Point,
    step:      Duration,
) -> PlacementResult<BoxAction> {
    if !placement.placed() {
        return Err(PlacementError::NotPlaced);
    }
    if placement.headed() {
        return Err(PlacementError::AlreadyHeaded(placement.heading()));
    }

    let space = finder.space();
    let src = space.at(placement.at_point());
    let dst = space.at(target);
    placement.place(&src);

    let path = finder.route(&src, &dst)?;
    debug!("planned {} → {} in {} steps", src.at_point(), target, path.len() - 1);
    Ok(placement.follow_path(&path, step))
}
