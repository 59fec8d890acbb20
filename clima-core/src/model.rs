use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::FetchError;

/// One observed weather condition (description + icon id).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

/// The most recently fetched weather for one city.
///
/// The condition list is split into its first record and the rest, so a
/// snapshot always has a condition to display and classify.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub primary_condition: Condition,
    pub other_conditions: Vec<Condition>,
    pub observation_time: Option<DateTime<Utc>>,
}

impl WeatherSnapshot {
    /// Parse an OpenWeather "current weather" body.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let parsed: OwCurrentResponse = serde_json::from_str(body)?;
        parsed.try_into()
    }

    /// All condition records in provider order, the primary one first.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        std::iter::once(&self.primary_condition).chain(&self.other_conditions)
    }

    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind_speed_mps * 3.6
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<Condition>,
    wind: OwWind,
    #[serde(default)]
    dt: Option<i64>,
}

impl TryFrom<OwCurrentResponse> for WeatherSnapshot {
    type Error = FetchError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let mut weather = parsed.weather.into_iter();
        let primary_condition = weather.next().ok_or(FetchError::MissingCondition)?;

        Ok(Self {
            location_name: parsed.name,
            country_code: parsed.sys.country,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            primary_condition,
            other_conditions: weather.collect(),
            observation_time: parsed.dt.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}
