//! View state of the weather widget: search text, last snapshot, error flag.
//!
//! A lookup is split in two halves so that overlapping requests can be
//! reasoned about: [`WeatherWidget::begin_search`] hands out a
//! [`PendingSearch`] tagged with a sequence number, and
//! [`WeatherWidget::finish_search`] commits a result only if it belongs to the
//! most recently issued search.

use tracing::{debug, warn};

use crate::{error::FetchError, model::WeatherSnapshot, provider::WeatherProvider, theme::Theme};

/// A lookup that has been issued but not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    seq: u64,
    city: String,
}

impl PendingSearch {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Input was empty; nothing was requested and nothing changed.
    Skipped,
    /// The result was written to the view state.
    Committed,
    /// A newer search was issued meanwhile; the result was dropped.
    Stale,
}

#[derive(Debug)]
pub struct WeatherWidget {
    provider: Box<dyn WeatherProvider>,
    city: String,
    snapshot: Option<WeatherSnapshot>,
    error: bool,
    issued: u64,
}

impl WeatherWidget {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            city: String::new(),
            snapshot: None,
            error: false,
            issued: 0,
        }
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn theme(&self) -> Theme {
        Theme::classify(self.snapshot.as_ref())
    }

    /// Start a lookup for the current input. Returns `None` (and touches
    /// nothing) when the input is blank.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        let city = self.city.trim();
        if city.is_empty() {
            return None;
        }

        self.error = false;
        self.issued += 1;

        Some(PendingSearch {
            seq: self.issued,
            city: city.to_string(),
        })
    }

    /// Commit the result of `pending` unless a newer search has been issued.
    pub fn finish_search(
        &mut self,
        pending: &PendingSearch,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> SearchOutcome {
        if pending.seq != self.issued {
            warn!(
                city = %pending.city,
                seq = pending.seq,
                latest = self.issued,
                "Discarding result of superseded weather lookup"
            );
            return SearchOutcome::Stale;
        }

        match result {
            Ok(snapshot) => {
                debug!(
                    city = %pending.city,
                    location = %snapshot.location_name,
                    "Weather lookup committed"
                );
                self.snapshot = Some(snapshot);
                self.error = false;
            }
            Err(err) => {
                warn!(
                    city = %pending.city,
                    not_found = err.is_not_found(),
                    error = %err,
                    "Weather lookup failed"
                );
                self.snapshot = None;
                self.error = true;
            }
        }

        SearchOutcome::Committed
    }

    /// Look up the current input: at most one request, then commit.
    pub async fn search(&mut self) -> SearchOutcome {
        let Some(pending) = self.begin_search() else {
            return SearchOutcome::Skipped;
        };

        let result = self.provider.current_weather(pending.city()).await;
        self.finish_search(&pending, result)
    }
}
