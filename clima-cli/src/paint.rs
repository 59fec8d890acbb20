//! Terminal rendering of a [`Panel`]. The panel's theme picks the background.

use clima_core::{Panel, PanelBody, Theme};
use console::Style;

fn container_style(theme: Theme) -> Style {
    let base = Style::new().black();
    match theme {
        Theme::Neutral => base.on_white(),
        Theme::Rainy => Style::new().white().on_blue(),
        Theme::Hot => Style::new().white().on_red(),
        Theme::Cold => base.on_cyan(),
        Theme::Mild => base.on_yellow(),
    }
}

/// Lay the panel out as text lines, padded to a common width.
pub fn panel_lines(panel: &Panel) -> Vec<String> {
    let mut lines = vec![panel.heading.to_string(), String::new()];

    match &panel.body {
        PanelBody::Placeholder(msg) | PanelBody::Error(msg) => lines.push(msg.to_string()),
        PanelBody::Weather(view) => {
            lines.push(format!("{}  [{}]", view.location_name, view.flag_url));
            lines.push(view.temperature.clone());
            lines.push(format!("{}  [{}]", view.description, view.icon_url));
            lines.push(format!("umidade: {}", view.humidity));
            lines.push(format!("vento: {}", view.wind));
            if let Some(at) = &view.observed_at {
                lines.push(at.clone());
            }
        }
    }

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    lines
        .into_iter()
        .map(|l| {
            let pad = width - l.chars().count();
            format!(" {l}{} ", " ".repeat(pad))
        })
        .collect()
}

pub fn print_panel(panel: &Panel) {
    let style = container_style(panel.theme);
    println!();
    for line in panel_lines(panel) {
        println!("{}", style.apply_to(line));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_core::{WeatherView, render::HEADING};

    #[test]
    fn lines_share_a_width() {
        let panel = Panel {
            theme: Theme::Cold,
            heading: HEADING,
            body: PanelBody::Weather(WeatherView {
                location_name: "Gramado".into(),
                flag_url: "https://flagsapi.com/BR/flat/64.png".into(),
                temperature: "12°C".into(),
                icon_url: "https://openweathermap.org/img/wn/01n@2x.png".into(),
                description: "céu limpo".into(),
                humidity: "88%".into(),
                wind: "7 km/h".into(),
                observed_at: None,
            }),
        };

        let lines = panel_lines(&panel);
        assert_eq!(lines.len(), 7);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert!(lines.iter().any(|l| l.contains("vento: 7 km/h")));
    }

    #[test]
    fn error_body_is_a_single_message_line() {
        let panel = Panel {
            theme: Theme::Neutral,
            heading: HEADING,
            body: PanelBody::Error(clima_core::LOOKUP_FAILED_MESSAGE),
        };

        let lines = panel_lines(&panel);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("Cidade não encontrada, tente novamente"));
    }
}
