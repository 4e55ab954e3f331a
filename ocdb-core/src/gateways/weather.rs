use thiserror::Error;

use crate::entities::{geo::MapPoint, weather::WeatherObservation};

#[derive(Debug, Error)]
pub enum WeatherGatewayError {
    #[error("The weather request timed out")]
    Timeout,
    #[error("Malformed weather response")]
    MalformedResponse,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Current-conditions lookup for a position.
///
/// Consumed once at startup and once per newly captured location;
/// results are display-only and never persisted.
pub trait WeatherGateway {
    fn current_weather(&self, pos: MapPoint) -> Result<WeatherObservation, WeatherGatewayError>;
}
