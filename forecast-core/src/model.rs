use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// The document returned by the weather endpoint.
///
/// Only `days` drives behaviour; the location fields are decoded when the feed
/// carries them and are used as a heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Server order is kept. A missing or null `days` decodes to an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub days: Vec<DayForecast>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DayForecast>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DayForecast>>::deserialize(deserializer)?.unwrap_or_default())
}

impl WeatherPayload {
    /// Best label for where this forecast is for, if the feed said.
    pub fn location(&self) -> Option<&str> {
        [&self.resolved_address, &self.address]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .find(|s| !s.trim().is_empty())
    }
}

/// One dated forecast entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub datetime: String,
    #[serde(default)]
    pub description: String,
    pub tempmax: f64,
    pub tempmin: f64,
    #[serde(default)]
    pub icon: String,
}

impl DayForecast {
    /// `datetime` as a calendar date, when it is in `YYYY-MM-DD` form.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.datetime.trim(), "%Y-%m-%d").ok()
    }
}
