use crate::{Config, WeatherSnapshot, error::FetchError, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one lookup for `city`.
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the OpenWeather provider from config (API key, endpoint, timeout).
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key()?;

    let mut provider = OpenWeatherProvider::new(api_key);
    if let Some(endpoint) = &config.endpoint {
        provider = provider.with_base_url(endpoint.trim_end_matches('/'));
    }
    if let Some(timeout) = config.request_timeout() {
        provider = provider.with_timeout(timeout)?;
    }

    Ok(Box::new(provider))
}
