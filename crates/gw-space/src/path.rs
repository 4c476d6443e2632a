//! A* path search over a [`Space`].
//!
//! # Graph
//!
//! Nodes are existing points; edges join 4-neighbours.  Every step costs 1
//! and the heuristic is Manhattan distance, which is admissible, so found
//! paths are shortest.  A neighbour is only entered if it exists and is not
//! taken; the source itself may be taken (it usually is, by the mover).
//!
//! Neighbours are expanded right, down, left, up.  Together with the
//! `(f, h, Point)` heap key this makes tie-breaking deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use gw_core::Point;

use crate::{Position, Space, SpaceError, SpaceResult};

/// A sequence of positions.
pub type Path = Vec<Position>;

// ── PathFinder ────────────────────────────────────────────────────────────────

/// Finds paths through one space.
///
/// The finder keeps a handle, not a snapshot: later changes to the space are
/// seen by later searches.
#[derive(Debug, Clone)]
pub struct PathFinder {
    space: Space,
}

impl PathFinder {
    pub fn new(space: &Space) -> Self {
        Self { space: space.clone() }
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Whether `path` is non-empty, stays within this finder's space, only
    /// visits existing positions, and only moves between neighbours.
    ///
    /// Occupancy is not checked.
    pub fn is_viable(&self, path: &[Position]) -> bool {
        if path.is_empty() {
            return false;
        }
        let in_space = path
            .iter()
            .all(|pos| pos.space().same_as(&self.space) && pos.exists());
        in_space
            && path
                .windows(2)
                .all(|pair| pair[0].at_point().is_neighbour(pair[1].at_point()))
    }

    /// Search for a path from `src` to `dst`.
    ///
    /// Returns the path and `true` on success.  On failure returns a path
    /// holding exactly `src` and `false`.
    pub fn find_path(&self, src: &Position, dst: &Position) -> (Path, bool) {
        let found = if self.owns(src) && self.owns(dst) {
            self.search(src.at_point(), dst.at_point())
        } else {
            None
        };

        match found {
            Some(points) => {
                debug!(
                    "path {} → {}: {} steps",
                    src.at_point(),
                    dst.at_point(),
                    points.len() - 1
                );
                (points.into_iter().map(|pt| self.space.at(pt)).collect(), true)
            }
            None => {
                debug!("no path {} → {}", src.at_point(), dst.at_point());
                (vec![src.clone()], false)
            }
        }
    }

    /// [`find_path`](Self::find_path) as a `Result`, telling apart why a
    /// search failed.
    pub fn route(&self, src: &Position, dst: &Position) -> SpaceResult<Path> {
        for pos in [src, dst] {
            if !pos.space().same_as(&self.space) {
                return Err(SpaceError::ForeignSpace(pos.at_point()));
            }
            if !pos.exists() {
                return Err(SpaceError::Missing(pos.at_point()));
            }
        }
        match self.find_path(src, dst) {
            (path, true) => Ok(path),
            (_, false) => Err(SpaceError::NoPath {
                from: src.at_point(),
                to:   dst.at_point(),
            }),
        }
    }

    fn owns(&self, pos: &Position) -> bool {
        pos.space().same_as(&self.space) && pos.exists()
    }

    fn enterable(&self, pt: Point) -> bool {
        let pos = self.space.at(pt);
        pos.exists() && !pos.taken()
    }

    // ── A* internals ─────────────────────────────────────────────────────────

    fn search(&self, src: Point, dst: Point) -> Option<Vec<Point>> {
        if src == dst {
            return Some(vec![src]);
        }

        // g[v] = best known step count from src to v.
        let mut g: FxHashMap<Point, u32> = FxHashMap::default();
        let mut came_from: FxHashMap<Point, Point> = FxHashMap::default();
        let mut closed: FxHashSet<Point> = FxHashSet::default();

        // Min-heap on (f, h, point).
        let mut open: BinaryHeap<Reverse<(u32, u32, Point)>> = BinaryHeap::new();
        g.insert(src, 0);
        let h0 = src.manhattan(dst);
        open.push(Reverse((h0, h0, src)));

        while let Some(Reverse((_, _, node))) = open.pop() {
            if node == dst {
                return Some(reconstruct(&came_from, dst));
            }
            if !closed.insert(node) {
                continue;
            }

            let cost = g.get(&node).copied().unwrap_or(u32::MAX);
            for next in node.neighbours() {
                if closed.contains(&next) || !self.enterable(next) {
                    continue;
                }
                let new_cost = cost.saturating_add(1);
                if new_cost < g.get(&next).copied().unwrap_or(u32::MAX) {
                    g.insert(next, new_cost);
                    came_from.insert(next, node);
                    let h = next.manhattan(dst);
                    open.push(Reverse((new_cost.saturating_add(h), h, next)));
                }
            }
        }

        None
    }
}

fn reconstruct(came_from: &FxHashMap<Point, Point>, dst: Point) -> Vec<Point> {
    let mut points = vec![dst];
    let mut cur = dst;
    while let Some(&prev) = came_from.get(&cur) {
        points.push(prev);
        cur = prev;
    }
    points.reverse();
    points
}
