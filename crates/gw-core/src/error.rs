//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `GwError` where a core
//! failure (bad configuration, I/O) can surface through them.

use thiserror::Error;

use crate::{EntityId, Point};

/// The top-level error type for `gw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GwError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gw-*` crates.
pub type GwResult<T> = Result<T, GwError>;
