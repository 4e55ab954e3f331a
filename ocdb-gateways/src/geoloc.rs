use ocdb_core::gateways::geoloc::{GeolocationError, GeolocationGateway};
use ocdb_entities::geo::MapPoint;

/// Stand-in for a device positioning service: a position fixed by
/// configuration, typically the municipality's center.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPositionGateway {
    position: Option<MapPoint>,
}

impl FixedPositionGateway {
    pub fn new(position: Option<MapPoint>) -> Self {
        Self { position }
    }
}

impl GeolocationGateway for FixedPositionGateway {
    fn current_position(&self) -> Result<MapPoint, GeolocationError> {
        self.position.ok_or(GeolocationError::Unavailable)
    }
}
