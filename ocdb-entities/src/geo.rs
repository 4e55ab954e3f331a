use std::fmt;

use thiserror::Error;

/// Geographical position in degrees.
///
/// Values are validated on construction: latitude must lie within
/// [-90, 90] and longitude within [-180, 180], both finite.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Coordinates out of range")]
pub struct CoordRangeError;

impl MapPoint {
    pub const MIN_LAT_DEG: f64 = -90.0;
    pub const MAX_LAT_DEG: f64 = 90.0;
    pub const MIN_LNG_DEG: f64 = -180.0;
    pub const MAX_LNG_DEG: f64 = 180.0;

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, CoordRangeError> {
        if !lat.is_finite() || !(Self::MIN_LAT_DEG..=Self::MAX_LAT_DEG).contains(&lat) {
            return Err(CoordRangeError);
        }
        if !lng.is_finite() || !(Self::MIN_LNG_DEG..=Self::MAX_LNG_DEG).contains(&lng) {
            return Err(CoordRangeError);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_coordinates_within_range() {
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 0.0).is_ok());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_ok());
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_ok());
    }

    #[test]
    fn reject_coordinates_out_of_range() {
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(-90.1, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 180.1).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.1).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, f64::INFINITY).is_err());
    }
}
