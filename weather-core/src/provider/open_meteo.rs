use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    decode::{ForecastResponse, decode},
    error::{DecodeError, WeatherError},
    request::ForecastRequest,
};

use super::WeatherProvider;

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Like [`Self::with_base_url`], but every request gives up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, WeatherError> {
        debug!(url = %self.base_url, location = request.location.label, "requesting forecast");

        let res = self
            .http
            .get(&self.base_url)
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "forecast response received");

        decode(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            &body,
        )
        .map_err(|err| {
            if let DecodeError::HttpStatus { .. } = err {
                debug!(body = %truncate_body(&body), "forecast request rejected");
            }
            WeatherError::Decode(err)
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
