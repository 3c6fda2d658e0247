use crate::config::ScraperConfig;
use crate::document::ScrapedDocument;
use crate::error::ScrapeError;
use crate::extract;
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::store::RecordStore;
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Result of a successful scrape-and-save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeOutcome {
    pub message: String,
    pub file_path: PathBuf,
    pub data_extracted: ScrapedDocument,
}

/// Checks that `url` is an absolute http(s) URL with a host
pub fn validate_url(url: &str) -> Result<Url, ScrapeError> {
    let parsed = Url::parse(url).map_err(|e| ScrapeError::InvalidUrl(format!("{} ({})", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScrapeError::InvalidUrl(format!(
            "{} (unsupported scheme {})",
            url,
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ScrapeError::InvalidUrl(format!("{} (missing host)", url)));
    }

    Ok(parsed)
}

/// Fetches a page, extracts it and persists the result
pub struct ScrapeService<F = HttpFetcher> {
    fetcher: F,
    store: RecordStore,
}

impl ScrapeService<HttpFetcher> {
    /// Build a service that fetches over HTTP and stores under `config.output_dir`
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let fetcher = HttpFetcher::new(config)?;
        let store = RecordStore::new(config.output_dir.clone(), &config.record_prefix)?;
        Ok(Self::new(fetcher, store))
    }
}

impl<F: Fetcher> ScrapeService<F> {
    pub fn new(fetcher: F, store: RecordStore) -> Self {
        Self { fetcher, store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Scrape `url` and write the extracted document to the record store
    pub async fn scrape_and_save(&self, url: &str) -> Result<ScrapeOutcome, ScrapeError> {
        ::log::info!("Starting scrape operation for the url {}", url);

        match self.scrape_and_save_inner(url).await {
            Ok(outcome) => {
                ::log::info!(
                    "Scrape operation completed successfully. Data saved to: {}",
                    outcome.file_path.display()
                );
                Ok(outcome)
            }
            Err(e) => {
                ::log::error!("Error during scrape operation for {}: {}", url, e);
                Err(e)
            }
        }
    }

    async fn scrape_and_save_inner(&self, url: &str) -> Result<ScrapeOutcome, ScrapeError> {
        validate_url(url)?;

        let body = self.fetcher.fetch(url).await?;
        let document = parse_and_extract(&body, url);
        let file_path = self.store.save(&document).await?;

        Ok(ScrapeOutcome {
            message: "Data scraped and saved successfully".to_string(),
            file_path,
            data_extracted: document,
        })
    }

    /// Names of previously saved records
    pub async fn scraped_files(&self) -> Vec<String> {
        self.store.list().await
    }

    pub async fn load_record(&self, name: &str) -> Result<ScrapedDocument, ScrapeError> {
        self.store.load(name).await
    }
}

// `Html` is not `Send`, so it must not live across an await point
fn parse_and_extract(body: &str, url: &str) -> ScrapedDocument {
    let html = Html::parse_document(body);
    extract::extract(&html, url)
}
