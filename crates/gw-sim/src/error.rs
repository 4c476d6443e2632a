use gw_core::{GwError, Point};
use gw_placement::PlacementError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world setup error: {0}")]
    Core(#[from] GwError),

    #[error("cannot spawn an entity at {0}: the cell is missing or taken")]
    Spawn(Point),

    #[error("move rejected: {0}")]
    Placement(#[from] PlacementError),
}

pub type SimResult<T> = Result<T, SimError>;
