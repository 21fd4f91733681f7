use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::{debug, instrument, warn};

use crate::{error::FetchError, model::WeatherPayload};

/// Something that can produce the session's weather payload.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<WeatherPayload, FetchError>;
}

/// Fetches the payload over HTTP from a single configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpWeatherSource {
    endpoint: String,
    http: Client,
}

impl HttpWeatherSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self { endpoint: endpoint.into(), http }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherSource for HttpWeatherSource {
    async fn fetch(&self) -> Result<WeatherPayload, FetchError> {
        fetch_weather(&self.http, &self.endpoint).await
    }
}

/// Issue one GET against `endpoint` and decode the body.
///
/// A blank endpoint fails with [`FetchError::Configuration`] before anything
/// touches the network.
#[instrument(skip(http))]
pub async fn fetch_weather(http: &Client, endpoint: &str) -> Result<WeatherPayload, FetchError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        warn!("weather endpoint is not configured");
        return Err(FetchError::Configuration);
    }

    debug!("fetching weather payload");

    let res = http.get(endpoint).send().await.map_err(|e| {
        warn!(error = %e, "weather request failed");
        FetchError::network(e)
    })?;

    let status = res.status();
    if !status.is_success() {
        warn!(%status, "weather endpoint returned non-success status");
        return Err(FetchError::status(status));
    }

    let body = res.text().await.map_err(FetchError::network)?;

    let payload: WeatherPayload = serde_json::from_str(&body).map_err(|e| {
        warn!(error = %e, body = %truncate_body(&body), "weather payload is not valid JSON");
        FetchError::from(e)
    })?;

    debug!(days = payload.days.len(), "weather payload decoded");
    Ok(payload)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
