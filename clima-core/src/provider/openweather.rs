use async_trait::async_trait;
use reqwest::{Client, Request};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{error::FetchError, model::WeatherSnapshot};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, FetchError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Build the GET request; `city` is percent-encoded into `q`.
    pub fn build_request(&self, city: &str) -> Result<Request, FetchError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let request = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "pt_br"),
            ])
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        info!(city, "Fetching current weather from OpenWeather");

        let request = self.build_request(city)?;
        let res = self.http.execute(request).await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(city, %status, "OpenWeather request failed");
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let body = res.text().await?;
        let snapshot = WeatherSnapshot::from_json(&body)?;
        debug!(?snapshot, "OpenWeather response parsed");
        Ok(snapshot)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
