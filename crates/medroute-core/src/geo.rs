//! Geographic coordinates and great-circle distance.
//!
//! Distances use the haversine formula on a spherical Earth with the mean
//! radius of 6371 km. Inputs are always interpreted as degrees; no range
//! check is applied by the distance functions themselves.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Errors raised when constructing a [`Coordinate`] from untrusted input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Builds a coordinate without validation.
    ///
    /// Intended for constant tables whose values are known to be in range.
    #[must_use]
    pub const fn from_degrees(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is out of range or
    /// not a finite number.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Great-circle distance to `other` in kilometres.
    #[must_use]
    pub fn distance_km(self, other: Coordinate) -> f64 {
        distance_km(self, other)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat, self.lon)
    }
}

/// Great-circle distance between two coordinates in kilometres.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    haversine_km(a.lat, a.lon, b.lat, b.lon)
}

/// Haversine distance between two raw degree pairs, in kilometres.
#[must_use]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
