//! Plain-text rendering of the filtered view.

use forecast_core::{DayForecast, WeatherPayload, glyph_for};
use std::fmt::Write;

pub fn heading(payload: Option<&WeatherPayload>) -> String {
    let Some(payload) = payload else {
        return String::new();
    };

    let mut out = String::new();
    if let Some(location) = payload.location() {
        let _ = writeln!(out, "{location}");
    }
    if let Some(description) = payload.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "{description}");
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

pub fn days(days: &[DayForecast]) -> String {
    if days.is_empty() {
        return "No days match.\n".to_string();
    }

    days.iter().fold(String::new(), |mut out, day| {
        let _ = writeln!(out, "{}", row(day));
        out
    })
}

fn row(day: &DayForecast) -> String {
    let weekday = day.date().map(|d| d.format("%a").to_string()).unwrap_or_default();
    format!(
        "{:<10} {:<3} {}  {}°C / {}°C  {}",
        day.datetime,
        weekday,
        glyph_for(&day.icon),
        day.tempmax,
        day.tempmin,
        day.description,
    )
}
