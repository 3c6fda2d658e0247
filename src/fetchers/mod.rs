pub mod fetcher;
pub mod http;

pub use fetcher::Fetcher;
pub use http::HttpFetcher;

#[cfg(test)]
pub(crate) use fetcher::StaticFetcher;
