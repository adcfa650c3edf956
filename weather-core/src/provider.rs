use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

use crate::{
    Config,
    error::WeatherError,
    model::{Coordinate, LocationName, WeatherReading},
    provider::{nominatim::NominatimClient, open_meteo::OpenMeteoClient},
};

pub mod nominatim;
pub mod open_meteo;

/// Source of current weather for a coordinate. Failures are propagated.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_weather(&self, coordinate: Coordinate) -> Result<WeatherReading, WeatherError>;
}

/// Source of a display name for a coordinate.
///
/// Never fails: implementations degrade to [`crate::UNKNOWN_LOCATION`].
#[async_trait]
pub trait PlaceNameSource: Send + Sync + Debug {
    async fn fetch_location_name(&self, coordinate: Coordinate) -> LocationName;
}

/// Shared HTTP client carrying the configured user agent.
///
/// A timeout is applied only when the host configured one.
pub fn http_client(config: &Config) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

/// Build both clients from config, sharing one connection pool.
pub fn clients_from_config(
    config: &Config,
) -> anyhow::Result<(Box<dyn WeatherSource>, Box<dyn PlaceNameSource>)> {
    let http = http_client(config)?;

    let weather = OpenMeteoClient::with_client(config.weather_url.clone(), http.clone());
    let places = NominatimClient::with_client(config.geocoding_url.clone(), http);

    Ok((Box::new(weather), Box::new(places)))
}

#[cfg(test)]
pub(crate) fn test_client() -> Client {
    http_client(&Config::default()).expect("default http client")
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
