use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Settings for a scraping run
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScraperConfig {
    /// Site root every recipe link is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the recipe index page, relative to `base_url`
    #[serde(default = "default_index_path")]
    pub index_path: String,
    /// Path prefix identifying recipe detail pages
    #[serde(default = "default_recipe_prefix")]
    pub recipe_prefix: String,
    /// Where the JSON document is written
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Pause between successive page fetches in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            index_path: default_index_path(),
            recipe_prefix: default_recipe_prefix(),
            output_path: default_output_path(),
            timeout_ms: default_timeout_ms(),
            delay_ms: default_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://alchemy-factory-codex.com/".to_string()
}

fn default_index_path() -> String {
    "recipes/".to_string()
}

fn default_recipe_prefix() -> String {
    "/recipe/".to_string()
}

fn default_output_path() -> String {
    "public/recipes.json".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_delay_ms() -> u64 {
    200
}

fn default_user_agent() -> String {
    "alchplanner (personal use)".to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with ALCHPLANNER__ prefix
    /// 2. scraper.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: ALCHPLANNER__DELAY_MS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("scraper").required(false))
            .add_source(
                Environment::with_prefix("ALCHPLANNER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Absolute address of the recipe index page
    pub fn index_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.index_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
