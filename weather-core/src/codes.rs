//! Static WMO weather code tables and the resolvers on top of them.
//!
//! Both the icon and the description table are derived from [`CODE_TABLE`],
//! so a code is present in one exactly when it is present in the other.

use std::{collections::HashMap, sync::LazyLock};

use crate::model::WeatherCode;

/// Glyph shown for codes missing from the table.
pub const FALLBACK_ICON: &str = "🌡️";

/// Label shown for codes missing from the table.
pub const FALLBACK_DESCRIPTION: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTableEntry {
    pub code: WeatherCode,
    pub icon: &'static str,
    pub description: &'static str,
}

const fn entry(code: i32, icon: &'static str, description: &'static str) -> CodeTableEntry {
    CodeTableEntry { code: WeatherCode(code), icon, description }
}

pub const CODE_TABLE: &[CodeTableEntry] = &[
    entry(0, "☀️", "Clear"),
    entry(1, "🌤️", "Mainly Clear"),
    entry(2, "⛅", "Partly Cloudy"),
    entry(3, "☁️", "Overcast"),
    entry(45, "🌫️", "Foggy"),
    entry(48, "🌫️", "Foggy"),
    entry(51, "🌧️", "Drizzle"),
    entry(53, "🌧️", "Drizzle"),
    entry(55, "🌧️", "Heavy Drizzle"),
    entry(61, "🌧️", "Rainy"),
    entry(63, "🌧️", "Rainy"),
    entry(65, "⛈️", "Heavy Rain"),
    entry(71, "❄️", "Snowy"),
    entry(73, "❄️", "Snowy"),
    entry(75, "❄️", "Heavy Snow"),
    entry(77, "❄️", "Snow"),
    entry(80, "🌧️", "Showers"),
    entry(81, "🌧️", "Heavy Showers"),
    entry(82, "⛈️", "Violent Showers"),
    entry(85, "❄️", "Snow Showers"),
    entry(86, "❄️", "Heavy Snow Showers"),
    entry(95, "⛈️", "Thunderstorm"),
    entry(96, "⛈️", "Thunderstorm"),
    entry(99, "⛈️", "Thunderstorm"),
];

static ICONS: LazyLock<HashMap<WeatherCode, &'static str>> =
    LazyLock::new(|| CODE_TABLE.iter().map(|e| (e.code, e.icon)).collect());

static DESCRIPTIONS: LazyLock<HashMap<WeatherCode, &'static str>> =
    LazyLock::new(|| CODE_TABLE.iter().map(|e| (e.code, e.description)).collect());

/// Icon table lookup without fallback.
pub fn icon_for(code: WeatherCode) -> Option<&'static str> {
    ICONS.get(&code).copied()
}

/// Description table lookup without fallback.
pub fn description_for(code: WeatherCode) -> Option<&'static str> {
    DESCRIPTIONS.get(&code).copied()
}

pub fn resolve_icon(code: WeatherCode) -> &'static str {
    icon_for(code).unwrap_or(FALLBACK_ICON)
}

pub fn resolve_description(code: WeatherCode) -> &'static str {
    description_for(code).unwrap_or(FALLBACK_DESCRIPTION)
}
