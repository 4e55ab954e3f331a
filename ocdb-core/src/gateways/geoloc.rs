use thiserror::Error;

use crate::entities::geo::MapPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("The position request timed out")]
    Timeout,
    #[error("No position available")]
    Unavailable,
}

/// One-shot device position lookup with a bounded timeout.
pub trait GeolocationGateway {
    fn current_position(&self) -> Result<MapPoint, GeolocationError>;
}
