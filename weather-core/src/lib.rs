//! Core library for the weather widget.
//!
//! This crate defines:
//! - Static WMO weather code tables and their icon/description resolvers
//! - Open-Meteo weather and Nominatim reverse-geocoding clients
//! - Geolocation and display-surface seams supplied by the host
//! - The markup renderer and the one-shot widget orchestrator
//!
//! It is used by `weather-widget-cli`, but any host that can provide a
//! position and a mount point can drive it.

pub mod codes;
pub mod config;
pub mod error;
pub mod geolocation;
pub mod model;
pub mod provider;
pub mod render;
pub mod widget;

pub use codes::{resolve_description, resolve_icon};
pub use config::Config;
pub use error::{WeatherError, WidgetError};
pub use geolocation::{FixedPosition, GeolocationError, Geolocator};
pub use model::{Coordinate, LocationName, RenderState, UNKNOWN_LOCATION, WeatherCode, WeatherReading};
pub use provider::{PlaceNameSource, WeatherSource, clients_from_config};
pub use render::{DisplaySurface, MemorySurface, render_error, render_weather};
pub use widget::{WeatherWidget, WidgetRun, WidgetState};
