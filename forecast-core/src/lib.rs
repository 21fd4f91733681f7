//! Core library for the `forecast` dashboard.
//!
//! This crate defines:
//! - Configuration of the weather endpoint
//! - Acquisition of the weather payload over HTTP
//! - The day filter and the icon glyph table
//! - Session state tying the two together
//!
//! It is used by `forecast-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod filter;
pub mod icon;
pub mod model;
pub mod session;
pub mod source;

pub use config::Config;
pub use error::FetchError;
pub use filter::{FilterCriteria, apply_filter};
pub use icon::{WeatherIcon, glyph_for};
pub use model::{DayForecast, WeatherPayload};
pub use session::Session;
pub use source::{HttpWeatherSource, WeatherSource, fetch_weather};
