use tracing::{debug, info, warn};

use crate::{
    error::WidgetError,
    geolocation::Geolocator,
    model::RenderState,
    provider::{PlaceNameSource, WeatherSource},
    render::{DisplaySurface, render},
};

/// Lifecycle of one widget run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Locating,
    Fetching,
    Rendered,
    Failed,
}

/// What a finished run showed and the states it passed through.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRun {
    pub outcome: RenderState,
    /// Every state entered, starting at `Idle`.
    pub states: Vec<WidgetState>,
}

impl WidgetRun {
    /// Terminal state: `Rendered` or `Failed`.
    pub fn state(&self) -> WidgetState {
        self.states.last().copied().unwrap_or(WidgetState::Idle)
    }

    pub fn visited(&self, state: WidgetState) -> bool {
        self.states.contains(&state)
    }
}

/// One-shot orchestration: locate, fetch weather, then the place name, then render.
///
/// `run` consumes the widget, so a widget renders exactly once.
#[derive(Debug)]
pub struct WeatherWidget {
    geolocator: Option<Box<dyn Geolocator>>,
    weather: Box<dyn WeatherSource>,
    places: Box<dyn PlaceNameSource>,
    states: Vec<WidgetState>,
}

impl WeatherWidget {
    /// A `None` geolocator means the host has no geolocation capability.
    pub fn new(
        geolocator: Option<Box<dyn Geolocator>>,
        weather: Box<dyn WeatherSource>,
        places: Box<dyn PlaceNameSource>,
    ) -> Self {
        Self { geolocator, weather, places, states: vec![WidgetState::Idle] }
    }

    pub async fn run(mut self, surface: &mut dyn DisplaySurface) -> WidgetRun {
        let outcome = match self.resolve().await {
            Ok(state) => {
                self.transition(WidgetState::Rendered);
                state
            }
            Err(err) => {
                self.transition(WidgetState::Failed);
                if let WidgetError::Weather(source) = &err {
                    debug!(error = %source, "Weather data unavailable");
                } else {
                    warn!(error = %err, "Widget could not locate the user");
                }
                RenderState::Error(err.user_message())
            }
        };

        render(surface, &outcome);
        info!(element = surface.element_id(), success = outcome.is_success(), "Widget rendered");

        WidgetRun { outcome, states: self.states }
    }

    async fn resolve(&mut self) -> Result<RenderState, WidgetError> {
        self.transition(WidgetState::Locating);

        let geolocator = self.geolocator.as_deref().ok_or(WidgetError::GeolocationUnsupported)?;
        let coordinate = geolocator.current_position().await?;

        self.transition(WidgetState::Fetching);
        debug!(lat = coordinate.latitude, lon = coordinate.longitude, "Position acquired");

        let reading = self.weather.fetch_weather(coordinate).await?;
        let location = self.places.fetch_location_name(coordinate).await;

        Ok(RenderState::Success { reading, location })
    }

    fn transition(&mut self, next: WidgetState) {
        debug!(from = ?self.states.last(), to = ?next, "Widget state change");
        self.states.push(next);
    }
}
