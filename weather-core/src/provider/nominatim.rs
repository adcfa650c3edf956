//! Reverse geocoding through Nominatim (OpenStreetMap).
//!
//! The place name is cosmetic, so every failure here degrades to
//! [`UNKNOWN_LOCATION`] instead of failing the widget.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::model::{Coordinate, LocationName, UNKNOWN_LOCATION};

use super::{PlaceNameSource, endpoint};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const REVERSE_PATH: &str = "reverse";

#[derive(Debug, Clone)]
pub struct NominatimClient {
    base_url: String,
    http: Client,
}

impl NominatimClient {
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }

    async fn fetch_address(&self, coordinate: Coordinate) -> Result<NominatimAddress> {
        let url = endpoint(&self.base_url, REVERSE_PATH);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Nominatim")?;

        let status = res.status();
        if !status.is_success() {
            return Err(anyhow!("Geocoding request failed with status {status}"));
        }

        let body = res.text().await.context("Failed to read Nominatim response body")?;
        let parsed: NominatimResponse =
            serde_json::from_str(&body).context("Failed to parse Nominatim JSON")?;

        Ok(parsed.address)
    }
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: NominatimAddress,
}

/// The subset of a Nominatim `address` object used for naming.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NominatimAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
}

impl NominatimAddress {
    /// City, then town, then village, then county. Empty values count as absent.
    pub fn place_name(&self) -> LocationName {
        [&self.city, &self.town, &self.village, &self.county]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
    }
}

#[async_trait]
impl PlaceNameSource for NominatimClient {
    async fn fetch_location_name(&self, coordinate: Coordinate) -> LocationName {
        match self.fetch_address(coordinate).await {
            Ok(address) => {
                let name = address.place_name();
                debug!(%name, "Reverse geocoded location");
                name
            }
            Err(err) => {
                warn!("Location fetch error: {err:#}");
                UNKNOWN_LOCATION.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::test_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header_exists, method, path, query_param},
    };

    fn address(json: serde_json::Value) -> NominatimAddress {
        serde_json::from_value(json).expect("valid address")
    }

    #[test]
    fn place_name_precedence() {
        let full = address(json!({
            "city": "Springfield", "town": "Shelbyville", "village": "Ogdenville", "county": "Sangamon"
        }));
        assert_eq!(full.place_name(), "Springfield");

        let town = address(json!({ "town": "Shelbyville", "county": "Sangamon" }));
        assert_eq!(town.place_name(), "Shelbyville");

        let village = address(json!({ "village": "Ogdenville", "county": "Sangamon" }));
        assert_eq!(village.place_name(), "Ogdenville");
    }

    #[test]
    fn county_only_and_empty_address() {
        assert_eq!(address(json!({ "county": "Orange" })).place_name(), "Orange");
        assert_eq!(address(json!({})).place_name(), "Unknown");
    }

    #[test]
    fn empty_strings_are_skipped() {
        let addr = address(json!({ "city": "", "town": "Shelbyville" }));
        assert_eq!(addr.place_name(), "Shelbyville");
    }

    #[tokio::test]
    async fn resolves_name_from_reverse_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .and(query_param("format", "json"))
            .and(query_param("lat", "33.7"))
            .and(query_param("lon", "-117.8"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "display_name": "Orange County, California",
                "address": { "county": "Orange", "state": "California" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let name = NominatimClient::with_client(server.uri(), test_client())
            .fetch_location_name(Coordinate::new(33.7, -117.8))
            .await;

        assert_eq!(name, "Orange");
    }

    #[tokio::test]
    async fn failed_status_degrades_to_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let name = NominatimClient::with_client(server.uri(), test_client())
            .fetch_location_name(Coordinate::new(0.0, 0.0))
            .await;

        assert_eq!(name, UNKNOWN_LOCATION);
    }

    #[tokio::test]
    async fn missing_address_degrades_to_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "error": "Unable to geocode" })),
            )
            .mount(&server)
            .await;

        let name = NominatimClient::with_client(server.uri(), test_client())
            .fetch_location_name(Coordinate::new(0.0, -30.0))
            .await;

        assert_eq!(name, UNKNOWN_LOCATION);
    }
}
