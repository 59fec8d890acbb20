use anyhow::Context;
use clap::{Parser, Subcommand};
use clima_core::{Config, WeatherWidget, provider_from_config, render};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::info;

use crate::paint;

/// Typing this at the prompt leaves interactive mode.
const QUIT: &str = ":q";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Weather lookup widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show the current weather for a city.
    Show {
        /// City name, e.g. "São Paulo".
        city: String,
    },

    /// Prompt for cities until `:q`, Esc or Ctrl-C (default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city } => {
                let mut widget = build_widget()?;
                widget.set_city(city);
                widget.search().await;
                paint::print_panel(&render(&widget));
                Ok(())
            }
            Command::Interactive => interactive().await,
        }
    }
}

fn build_widget() -> anyhow::Result<WeatherWidget> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    Ok(WeatherWidget::new(provider))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "Saved configuration");
    println!("API key saved to {}", path.display());
    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let mut widget = build_widget()?;
    paint::print_panel(&render(&widget));

    loop {
        let input = match Text::new(render::HEADING)
            .with_placeholder("Digite o nome da cidade")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        if input.trim() == QUIT {
            break;
        }

        widget.set_city(input);
        widget.search().await;
        paint::print_panel(&render(&widget));
    }

    Ok(())
}
