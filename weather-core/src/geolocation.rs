use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::Coordinate;

/// Categorized position-acquisition failure.
///
/// Closed set: anything that is not a timeout or an unavailable position
/// is reported as a permission problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Permission denied")]
    PermissionDenied,

    #[error("Location unavailable")]
    PositionUnavailable,

    #[error("Location request timed out")]
    Timeout,
}

impl GeolocationError {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    /// Classify a W3C `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            Self::TIMEOUT => GeolocationError::Timeout,
            Self::POSITION_UNAVAILABLE => GeolocationError::PositionUnavailable,
            _ => GeolocationError::PermissionDenied,
        }
    }
}

/// Single-shot "get current position" capability of the host.
#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

/// Geolocator that always reports one configured coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition {
    coordinate: Coordinate,
}

impl FixedPosition {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl Geolocator for FixedPosition {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        Ok(self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_w3c_codes() {
        assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
        assert_eq!(GeolocationError::from_code(2), GeolocationError::PositionUnavailable);
        assert_eq!(GeolocationError::from_code(1), GeolocationError::PermissionDenied);
    }

    #[test]
    fn unrecognized_codes_default_to_permission_denied() {
        assert_eq!(GeolocationError::from_code(0), GeolocationError::PermissionDenied);
        assert_eq!(GeolocationError::from_code(42), GeolocationError::PermissionDenied);
    }

    #[test]
    fn messages() {
        assert_eq!(GeolocationError::Timeout.to_string(), "Location request timed out");
        assert_eq!(GeolocationError::PositionUnavailable.to_string(), "Location unavailable");
        assert_eq!(GeolocationError::PermissionDenied.to_string(), "Permission denied");
    }

    #[tokio::test]
    async fn fixed_position_reports_its_coordinate() {
        let coord = Coordinate::new(39.8, -89.6);
        let pos = FixedPosition::new(coord).current_position().await;
        assert_eq!(pos, Ok(coord));
    }
}
