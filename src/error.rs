use thiserror::Error;

/// Errors that can occur while scraping recipes
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch a page (connection error, timeout or non-2xx status)
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// A configured or discovered address could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Reading or writing the output document failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serializing or deserializing the recipe collection failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
