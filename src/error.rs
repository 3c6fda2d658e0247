use thiserror::Error;

/// Failures of the fetch, persistence and configuration layers
///
/// Extraction itself never fails; these only come from the I/O around it.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("url must be a URL address: {0}")]
    InvalidUrl(String),

    #[error("Unable to reach the specified URL")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ScrapeError {
    /// Whether the failure is attributable to the requested URL rather than
    /// to this service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ScrapeError::InvalidUrl(_)
                | ScrapeError::Unreachable { .. }
                | ScrapeError::HttpStatus { .. }
        )
    }
}
