// Re-export modules
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetchers;
pub mod server;
pub mod service;
pub mod store;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use document::{Headings, Image, Link, Meta, PLACEHOLDERS, Placeholders, ScrapedDocument};
pub use error::ScrapeError;
pub use extract::resolve::{Resolution, resolve};
pub use extract::{LIMITS, extract};
pub use service::{ScrapeOutcome, ScrapeService};
