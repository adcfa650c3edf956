use reqwest::StatusCode;

use crate::geolocation::GeolocationError;

/// Failure of the weather request. Fatal to a widget run.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("API request failed with status {status}")]
    Status { status: StatusCode },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why a widget run ended in the error block.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Geolocation not supported")]
    GeolocationUnsupported,

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    #[error("Failed to fetch weather data")]
    Weather(#[source] WeatherError),
}

impl WidgetError {
    /// Text placed in the error block. Weather detail stays out of it.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<WeatherError> for WidgetError {
    fn from(err: WeatherError) -> Self {
        WidgetError::Weather(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_failure_hides_detail_from_user() {
        let err = WidgetError::from(WeatherError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        });
        assert_eq!(err.user_message(), "Failed to fetch weather data");
    }

    #[test]
    fn geolocation_messages_pass_through() {
        assert_eq!(
            WidgetError::from(GeolocationError::Timeout).user_message(),
            "Location request timed out"
        );
        assert_eq!(
            WidgetError::GeolocationUnsupported.user_message(),
            "Geolocation not supported"
        );
    }

    #[test]
    fn parse_error_is_distinct_from_status_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WeatherError::from(parse);
        assert!(matches!(err, WeatherError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }
}
