use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `output_dir`
pub const OUTPUT_DIR_ENV: &str = "SCRAPER_OUTPUT_DIR";

/// Configuration for fetching, storing and serving scraped pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Directory scraped records are written to and listed from
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name prefix of every record
    #[serde(default = "default_record_prefix")]
    pub record_prefix: String,

    /// Request timeout for fetching a page
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Socket address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            record_prefix: default_record_prefix(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_output_dir_override(std::env::var(OUTPUT_DIR_ENV).ok())
    }

    /// An unset or empty value leaves `output_dir` untouched
    fn with_output_dir_override(mut self, value: Option<String>) -> Self {
        if let Some(output_dir) = value.filter(|dir| !dir.is_empty()) {
            self.output_dir = PathBuf::from(output_dir);
        }
        self
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_record_prefix() -> String {
    "scraped-data-".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}
