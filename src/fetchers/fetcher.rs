use crate::error::ScrapeError;
use std::future::Future;

/// Source of raw page HTML
pub trait Fetcher {
    /// Fetch the body of `url` as text
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScrapeError>> + Send;
}

/// Serves canned bodies by URL, failing for anything it does not know
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct StaticFetcher {
    pages: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl StaticFetcher {
    pub(crate) fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

#[cfg(test)]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::HttpStatus {
                status: 404,
                reason: "Not Found".to_string(),
            })
    }
}
