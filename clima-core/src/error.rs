use reqwest::StatusCode;
use thiserror::Error;

/// Message shown to the user for any failed lookup.
pub const LOOKUP_FAILED_MESSAGE: &str = "Cidade não encontrada, tente novamente";

/// Why a weather lookup did not produce a snapshot.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The provider answered with a non-success status (e.g. 404 for an unknown city).
    #[error("weather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The request never completed (DNS, connect, TLS, timeout, body read).
    #[error("weather request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("weather response contained no condition records")]
    MissingCondition,
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
