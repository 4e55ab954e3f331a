use thiserror::Error;

use crate::{entities::geo::CoordRangeError, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty description")]
    EmptyDescription,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Already voted")]
    AlreadyVoted,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<CoordRangeError> for Error {
    fn from(_: CoordRangeError) -> Self {
        Self::InvalidPosition
    }
}
