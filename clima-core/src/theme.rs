//! Background theme derived from the current weather.

use std::fmt;

use crate::model::WeatherSnapshot;

/// Substrings of a (lower-cased, pt_br) condition description that mean rain or overcast.
pub const RAINY_KEYWORDS: &[&str] = &["chuva", "nublado"];

/// At or above this temperature the theme is [`Theme::Hot`].
pub const HOT_THRESHOLD_C: f64 = 28.0;

/// At or below this temperature the theme is [`Theme::Cold`].
pub const COLD_THRESHOLD_C: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Neutral,
    Rainy,
    Hot,
    Cold,
    Mild,
}

impl Theme {
    /// Classify a snapshot; rules are checked in order and the first match wins.
    pub fn classify(snapshot: Option<&WeatherSnapshot>) -> Self {
        let Some(snapshot) = snapshot else {
            return Theme::Neutral;
        };

        let description = snapshot.primary_condition.description.to_lowercase();
        if RAINY_KEYWORDS.iter().any(|kw| description.contains(kw)) {
            return Theme::Rainy;
        }

        let temp = snapshot.temperature_c;
        if temp >= HOT_THRESHOLD_C {
            Theme::Hot
        } else if temp <= COLD_THRESHOLD_C {
            Theme::Cold
        } else {
            Theme::Mild
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Neutral => "neutral",
            Theme::Rainy => "rainy",
            Theme::Hot => "hot",
            Theme::Cold => "cold",
            Theme::Mild => "mild",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;

    fn snapshot(temp: f64, description: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "Curitiba".into(),
            country_code: "BR".into(),
            temperature_c: temp,
            humidity_pct: 60,
            wind_speed_mps: 2.0,
            primary_condition: Condition {
                description: description.into(),
                icon: "01d".into(),
            },
            other_conditions: Vec::new(),
            observation_time: None,
        }
    }

    #[test]
    fn no_snapshot_is_neutral() {
        assert_eq!(Theme::classify(None), Theme::Neutral);
    }

    #[test]
    fn clear_sky_at_30_is_hot() {
        assert_eq!(Theme::classify(Some(&snapshot(30.0, "céu limpo"))), Theme::Hot);
    }

    #[test]
    fn overcast_beats_temperature() {
        assert_eq!(Theme::classify(Some(&snapshot(15.0, "nublado"))), Theme::Rainy);
        assert_eq!(Theme::classify(Some(&snapshot(35.0, "chuva moderada"))), Theme::Rainy);
        assert_eq!(Theme::classify(Some(&snapshot(24.0, "Chuva Forte"))), Theme::Rainy);
        assert_eq!(Theme::classify(Some(&snapshot(24.0, "parcialmente NUBLADO"))), Theme::Rainy);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Theme::classify(Some(&snapshot(28.0, "céu limpo"))), Theme::Hot);
        assert_eq!(Theme::classify(Some(&snapshot(20.0, "céu limpo"))), Theme::Cold);
        assert_eq!(Theme::classify(Some(&snapshot(27.99, "céu limpo"))), Theme::Mild);
        assert_eq!(Theme::classify(Some(&snapshot(20.01, "céu limpo"))), Theme::Mild);
    }

    #[test]
    fn temperature_bands_without_keywords() {
        for tenths in -100..=450 {
            let temp = f64::from(tenths) / 10.0;
            let theme = Theme::classify(Some(&snapshot(temp, "poucas nuvens")));
            let expected = if temp >= 28.0 {
                Theme::Hot
            } else if temp <= 20.0 {
                Theme::Cold
            } else {
                Theme::Mild
            };
            assert_eq!(theme, expected, "temp {temp}");
        }
    }

    #[test]
    fn only_first_condition_is_inspected() {
        let mut snap = snapshot(30.0, "céu limpo");
        snap.other_conditions.push(Condition {
            description: "chuva leve".into(),
            icon: "10d".into(),
        });
        assert_eq!(Theme::classify(Some(&snap)), Theme::Hot);
    }

    #[test]
    fn labels_are_distinct() {
        let all = [Theme::Neutral, Theme::Rainy, Theme::Hot, Theme::Cold, Theme::Mild];
        let labels: std::collections::HashSet<_> = all.iter().map(Theme::as_str).collect();
        assert_eq!(labels.len(), all.len());
        assert_eq!(Theme::Rainy.to_string(), "rainy");
    }

    #[test]
    fn parsed_snapshot_always_classifies() {
        let body = r#"{
            "name": "Fortaleza",
            "sys": {"country": "BR"},
            "main": {"temp": 29.0, "humidity": 65},
            "wind": {"speed": 6.0},
            "weather": [
                {"description": "céu limpo", "icon": "01d"},
                {"description": "chuva leve", "icon": "10d"}
            ]
        }"#;
        let snap = WeatherSnapshot::from_json(body).expect("valid body");
        assert_eq!(Theme::classify(Some(&snap)), Theme::Hot);

        let no_conditions = r#"{
            "name": "Fortaleza",
            "sys": {"country": "BR"},
            "main": {"temp": 29.0, "humidity": 65},
            "wind": {"speed": 6.0},
            "weather": []
        }"#;
        assert!(WeatherSnapshot::from_json(no_conditions).is_err());
    }
}
