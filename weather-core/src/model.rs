use serde::{Deserialize, Serialize};

/// Fallback place name used whenever reverse geocoding yields nothing.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Human-readable place name shown under the condition text.
pub type LocationName = String;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// WMO weather code as reported by Open-Meteo.
///
/// Any integer is accepted; codes missing from the tables fall back when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub i32);

impl std::fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current conditions for one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WeatherReading {
    pub temperature_2m: f64,
    pub weather_code: WeatherCode,
}

impl WeatherReading {
    /// Temperature rounded half away from zero.
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature_2m.round() as i64
    }
}

/// What a single widget run ends up showing.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    Success {
        reading: WeatherReading,
        location: LocationName,
    },
    Error(String),
}

impl RenderState {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderState::Success { .. })
    }
}
