//! Pure projection of widget state into a displayable panel.

use chrono::{DateTime, Utc};

use crate::{error::LOOKUP_FAILED_MESSAGE, theme::Theme, widget::WeatherWidget};

pub const HEADING: &str = "Verificar clima da cidade:";
pub const PLACEHOLDER_MESSAGE: &str = "Pesquise uma cidade para ver o clima";

/// Everything a front end needs to draw the widget. The theme travels with the
/// panel; front ends style their container from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub theme: Theme,
    pub heading: &'static str,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Placeholder(&'static str),
    Error(&'static str),
    Weather(WeatherView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub location_name: String,
    pub flag_url: String,
    pub temperature: String,
    pub icon_url: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub observed_at: Option<String>,
}

pub fn render(widget: &WeatherWidget) -> Panel {
    let body = match (widget.snapshot(), widget.has_error()) {
        (_, true) => PanelBody::Error(LOOKUP_FAILED_MESSAGE),
        (Some(snap), false) => {
            let condition = &snap.primary_condition;
            PanelBody::Weather(WeatherView {
                location_name: snap.location_name.clone(),
                flag_url: flag_url(&snap.country_code),
                temperature: format!("{}°C", round_half_up(snap.temperature_c)),
                icon_url: icon_url(&condition.icon),
                description: condition.description.clone(),
                humidity: format!("{}%", snap.humidity_pct),
                wind: format!("{} km/h", round_half_up(snap.wind_speed_kmh())),
                observed_at: snap.observation_time.map(format_observed_at),
            })
        }
        (None, false) => PanelBody::Placeholder(PLACEHOLDER_MESSAGE),
    };

    Panel {
        theme: widget.theme(),
        heading: HEADING,
        body,
    }
}

pub fn flag_url(country_code: &str) -> String {
    format!("https://flagsapi.com/{}/flat/64.png", urlencoding::encode(country_code))
}

pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{}@2x.png", urlencoding::encode(icon))
}

/// Halves round towards positive infinity (`-2.5` → `-2`).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn format_observed_at(at: DateTime<Utc>) -> String {
    format!("atualizado às {} UTC", at.format("%H:%M"))
}
