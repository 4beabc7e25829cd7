use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::config::ScraperConfig;
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::pipeline::RecipeScraper;
use crate::ScrapeError;

/// Builder for configuring a [`RecipeScraper`]
///
/// Starts from [`ScraperConfig::default`] unless a configuration is given;
/// individual setters override single fields of it.
#[derive(Default)]
pub struct RecipeScraperBuilder {
    config: Option<ScraperConfig>,
    base_url: Option<String>,
    output_path: Option<PathBuf>,
    delay: Option<Duration>,
    timeout: Option<Duration>,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl RecipeScraperBuilder {
    /// Use a full configuration, e.g. one from [`ScraperConfig::load`]
    pub fn config(mut self, config: ScraperConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the site root that the index path and recipe links resolve against
    ///
    /// # Example
    /// ```
    /// use alchplanner_scraper::RecipeScraper;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .base_url("https://alchemy-factory-codex.com/");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set where the JSON document is written
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the pause between successive page fetches
    ///
    /// # Example
    /// ```
    /// use alchplanner_scraper::RecipeScraper;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .delay(Duration::from_millis(500));
    /// ```
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// Ignored when a custom fetcher is supplied.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Fetch pages through a custom [`Fetcher`] instead of HTTP
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Build the scraper
    ///
    /// # Errors
    /// Returns `ScrapeError` if:
    /// - The request timeout is zero
    /// - The base URL is not an absolute address that paths can be joined to
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<RecipeScraper, ScrapeError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(path) = self.output_path {
            config.output_path = path.to_string_lossy().into_owned();
        }
        if let Some(delay) = self.delay {
            config.delay_ms = delay.as_millis().try_into().unwrap_or(u64::MAX);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_ms = timeout.as_millis().try_into().unwrap_or(u64::MAX);
        }
        if config.timeout_ms == 0 {
            return Err(ScrapeError::BuilderError(
                "Request timeout must be at least one millisecond".to_string(),
            ));
        }

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ScrapeError::BuilderError(format!(
                "Base URL cannot have paths joined to it: {}",
                config.base_url
            )));
        }

        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(RequestFetcher::new(config.timeout(), &config.user_agent)?),
        };

        Ok(RecipeScraper::new(config, base_url, fetcher))
    }
}
