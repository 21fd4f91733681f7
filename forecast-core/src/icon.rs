/// Icon identifiers the feed uses that have a dedicated glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    ClearDay,
    PartlyCloudyDay,
    Cloudy,
    Rain,
    Snow,
    /// Anything the table does not know.
    Unknown,
}

const GLYPHS: &[(WeatherIcon, &str, &str)] = &[
    (WeatherIcon::ClearDay, "clear-day", "☀️"),
    (WeatherIcon::PartlyCloudyDay, "partly-cloudy-day", "⛅"),
    (WeatherIcon::Cloudy, "cloudy", "☁️"),
    (WeatherIcon::Rain, "rain", "🌧️"),
    (WeatherIcon::Snow, "snow", "❄️"),
];

pub const FALLBACK_GLYPH: &str = "🌈";

impl WeatherIcon {
    /// Exact, case-sensitive lookup; unrecognised names become `Unknown`.
    pub fn from_name(name: &str) -> Self {
        GLYPHS
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(icon, _, _)| *icon)
            .unwrap_or(WeatherIcon::Unknown)
    }

    pub fn as_str(&self) -> Option<&'static str> {
        self.entry().map(|(_, name, _)| *name)
    }

    pub fn glyph(&self) -> &'static str {
        self.entry().map(|(_, _, glyph)| *glyph).unwrap_or(FALLBACK_GLYPH)
    }

    pub const fn known() -> &'static [WeatherIcon] {
        &[
            WeatherIcon::ClearDay,
            WeatherIcon::PartlyCloudyDay,
            WeatherIcon::Cloudy,
            WeatherIcon::Rain,
            WeatherIcon::Snow,
        ]
    }

    fn entry(&self) -> Option<&'static (WeatherIcon, &'static str, &'static str)> {
        GLYPHS.iter().find(|(icon, _, _)| icon == self)
    }
}

/// Display glyph for a raw icon identifier.
pub fn glyph_for(name: &str) -> &'static str {
    WeatherIcon::from_name(name).glyph()
}
