//! Markup for the widget's single display surface.
//!
//! Every render call replaces the surface content wholesale.

use std::borrow::Cow;

use crate::{
    codes::{resolve_description, resolve_icon},
    model::{RenderState, WeatherReading},
};

/// Default id of the mount element in the host document.
pub const DEFAULT_ELEMENT_ID: &str = "weather-widget";

pub const ERROR_HEADLINE: &str = "Unable to load weather";

/// A mount point the widget writes into. Owned by the host and injected.
pub trait DisplaySurface {
    fn element_id(&self) -> &str;

    fn replace_content(&mut self, markup: String);
}

/// Surface that keeps the markup in memory, e.g. for printing it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    element_id: String,
    content: String,
}

impl MemorySurface {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self { element_id: element_id.into(), content: String::new() }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The mount element itself, with the current content inside.
    pub fn to_element(&self) -> String {
        format!(
            "<div id=\"{}\">{}</div>\n",
            escape_html(&self.element_id),
            self.content
        )
    }
}

impl DisplaySurface for MemorySurface {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn replace_content(&mut self, markup: String) {
        self.content = markup;
    }
}

pub fn weather_markup(reading: &WeatherReading, location: &str) -> String {
    let temp = reading.rounded_temperature();
    let condition = resolve_description(reading.weather_code);
    let icon = resolve_icon(reading.weather_code);

    format!(
        r#"
    <div class="weather-content">
      <div class="weather-temp">{temp}°</div>
      <div class="weather-details">
        <div class="weather-condition">{condition}</div>
        <div class="weather-location">{location}</div>
      </div>
      <div class="weather-icon">{icon}</div>
    </div>
  "#,
        location = escape_html(location),
    )
}

pub fn error_markup(message: &str) -> String {
    format!(
        r#"
    <div class="weather-error">
      <p>{ERROR_HEADLINE}</p>
      <p style="font-size: 12px; margin-top: 8px;">{message}</p>
    </div>
  "#,
        message = escape_html(message),
    )
}

pub fn render_weather(surface: &mut dyn DisplaySurface, reading: &WeatherReading, location: &str) {
    surface.replace_content(weather_markup(reading, location));
}

pub fn render_error(surface: &mut dyn DisplaySurface, message: &str) {
    surface.replace_content(error_markup(message));
}

pub fn render(surface: &mut dyn DisplaySurface, state: &RenderState) {
    match state {
        RenderState::Success { reading, location } => render_weather(surface, reading, location),
        RenderState::Error(message) => render_error(surface, message),
    }
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
