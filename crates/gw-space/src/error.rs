//! Space-subsystem error type.

use thiserror::Error;

use gw_core::Point;

/// Errors produced by `gw-space`.
///
/// Occupancy transitions themselves report `bool`; these errors only come
/// from the `Result`-returning helpers built on top of them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpaceError {
    #[error("no path from {from} to {to}")]
    NoPath { from: Point, to: Point },

    #[error("point {0} does not exist")]
    Missing(Point),

    #[error("position {0} belongs to a different space")]
    ForeignSpace(Point),
}

pub type SpaceResult<T> = Result<T, SpaceError>;
