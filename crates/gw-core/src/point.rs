//! Grid coordinates.
//!
//! A `Point` is a bare coordinate pair with no notion of whether the cell
//! exists; existence and occupancy live in `gw-space`.  Rows grow downwards
//! and columns grow to the right, matching the 4-neighbour expansion order
//! used by the path finder.

use std::fmt;

/// A point on a 2D grid.
///
/// Ordering is row-major (row first, then column), which gives path search a
/// stable tie-break and makes sorted point lists read naturally.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row:    i32,
    pub column: i32,
}

/// Shorthand for [`Point::new`].
#[inline]
pub fn p(row: i32, column: i32) -> Point {
    Point::new(row, column)
}

impl Point {
    pub const ZERO: Point = Point { row: 0, column: 0 };

    #[inline]
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Taxicab distance.  Exactly 1 for 4-neighbours; saturates at
    /// `u32::MAX` between opposite corners of the `i32` plane.
    #[inline]
    pub fn manhattan(self, other: Point) -> u32 {
        self.row.abs_diff(other.row).saturating_add(self.column.abs_diff(other.column))
    }

    /// `true` when `other` is one step away horizontally or vertically.
    #[inline]
    pub fn is_neighbour(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }

    /// The axis-aligned neighbours in order right, down, left, up.  Steps
    /// that would leave the `i32` range are skipped.
    pub fn neighbours(self) -> impl Iterator<Item = Point> {
        const STEPS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        let Point { row, column } = self;
        STEPS.into_iter().filter_map(move |(dr, dc)| {
            Some(Point::new(row.checked_add(dr)?, column.checked_add(dc)?))
        })
    }

    /// Component-wise minimum.
    #[inline]
    pub fn component_min(self, other: Point) -> Point {
        Point::new(self.row.min(other.row), self.column.min(other.column))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn component_max(self, other: Point) -> Point {
        Point::new(self.row.max(other.row), self.column.max(other.column))
    }

    /// `true` if `self` lies in the rectangle spanned by `min` and `max`
    /// (both inclusive).
    #[inline]
    pub fn within(self, min: Point, max: Point) -> bool {
        (min.row..=max.row).contains(&self.row)
            && (min.column..=max.column).contains(&self.column)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
