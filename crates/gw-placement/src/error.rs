use gw_core::Point;
use gw_space::SpaceError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("placement is heading to {0} already")]
    AlreadyHeaded(Point),

    #[error("placement has not been put on the grid")]
    NotPlaced,

    #[error("routing failed: {0}")]
    Routing(#[from] SpaceError),
}

pub type PlacementResult<T> = Result<T, PlacementError>;
