//! Core library for the `clima` weather widget.
//!
//! This crate defines:
//! - Configuration & API key resolution
//! - The OpenWeather provider behind the [`WeatherProvider`] trait
//! - The weather snapshot model and its background [`Theme`]
//! - Widget view state and the pure [`render`] projection
//!
//! It is used by `clima-cli`, but any other front end can drive a
//! [`WeatherWidget`] and draw the resulting [`Panel`].

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod theme;
pub mod widget;

pub use config::Config;
pub use error::{FetchError, LOOKUP_FAILED_MESSAGE};
pub use model::{Condition, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use render::{Panel, PanelBody, WeatherView, render};
pub use theme::Theme;
pub use widget::{PendingSearch, SearchOutcome, WeatherWidget};
