use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetchers::Fetcher;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Fetches static HTML over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self::with_client(client_builder(config).build()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Client settings derived from the configuration
pub fn client_builder(config: &ScraperConfig) -> ClientBuilder {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let start = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_send_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            ::log::warn!("{} answered HTTP {}", url, status);
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        ::log::debug!(
            "Fetched {} bytes from {} in {:.2} seconds",
            body.len(),
            url,
            start.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}

/// Connection-level failures (DNS, refused connections) mean the host is unreachable
///
/// `is_connect` alone also covers TLS handshake failures, which are reported
/// as generic request errors instead.
fn classify_send_error(url: &str, error: reqwest::Error) -> ScrapeError {
    if error.is_connect() && is_unreachable(&error) {
        ScrapeError::Unreachable {
            url: url.to_string(),
            source: error,
        }
    } else {
        ScrapeError::Request(error)
    }
}

/// Walks the source chain looking for a failed lookup or TCP connect
fn is_unreachable(error: &(dyn std::error::Error + 'static)) -> bool {
    use std::io::ErrorKind;

    let mut current = Some(error);
    while let Some(error) = current {
        if let Some(io) = error.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionRefused
                    | ErrorKind::TimedOut
                    | ErrorKind::HostUnreachable
                    | ErrorKind::NetworkUnreachable
                    | ErrorKind::AddrNotAvailable
            ) {
                return true;
            }
        }
        let message = error.to_string();
        if message.contains("dns error") || message.contains("failed to lookup address") {
            return true;
        }
        current = error.source();
    }
    false
}
