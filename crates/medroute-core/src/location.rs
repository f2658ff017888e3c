//! Reference-location acquisition.
//!
//! The resolver never looks up a position itself. Callers obtain one from a
//! [`LocationProvider`] and, when the provider cannot deliver, substitute a
//! fixed default via [`resolve_location`].

use crate::geo::Coordinate;

/// Lower Manhattan; used whenever no device position is available.
pub const DEFAULT_LOCATION: Coordinate = Coordinate::from_degrees(40.712_8, -74.006_0);

/// Reasons a provider could not produce a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location capability unavailable")]
    Unavailable,
}

/// A source of the caller's current position.
pub trait LocationProvider {
    /// Returns the most recent known position.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] when no position can be produced.
    fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// A provider backed by an optional, manually supplied position.
///
/// `None` behaves like a device without positioning support.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualLocation(pub Option<Coordinate>);

impl LocationProvider for ManualLocation {
    fn current_position(&self) -> Result<Coordinate, LocationError> {
        self.0.ok_or(LocationError::Unavailable)
    }
}

/// Asks `provider` for a position, falling back to `default` on any failure.
pub fn resolve_location<P>(provider: &P, default: Coordinate) -> Coordinate
where
    P: LocationProvider + ?Sized,
{
    match provider.current_position() {
        Ok(position) => position,
        Err(err) => {
            tracing::warn!(error = %err, fallback = %default, "using default location");
            default
        }
    }
}
