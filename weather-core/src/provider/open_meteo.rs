use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::{
    error::WeatherError,
    model::{Coordinate, WeatherReading},
};

use super::{WeatherSource, endpoint};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

const FORECAST_PATH: &str = "v1/forecast";
const CURRENT_FIELDS: &str = "temperature_2m,weather_code";

/// Open-Meteo forecast client, asking only for the `current` block in Celsius.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    base_url: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }

    async fn fetch_current(&self, coordinate: Coordinate) -> Result<WeatherReading, WeatherError> {
        let url = endpoint(&self.base_url, FORECAST_PATH);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("temperature_unit", "celsius".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::Status { status });
        }

        let body = res.text().await?;
        let parsed: OmForecastResponse = serde_json::from_str(&body)?;

        debug!(
            temperature = parsed.current.temperature_2m,
            code = %parsed.current.weather_code,
            "Open-Meteo current conditions"
        );

        Ok(parsed.current)
    }
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: WeatherReading,
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn fetch_weather(&self, coordinate: Coordinate) -> Result<WeatherReading, WeatherError> {
        self.fetch_current(coordinate)
            .await
            .inspect_err(|err| error!(error = %err, "Weather fetch error"))
    }
}
