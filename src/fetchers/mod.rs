mod request;

pub use request::RequestFetcher;

use crate::error::ScrapeError;
use async_trait::async_trait;

/// Source of page bodies for the scraper.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the body of `url` as text
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}
