use crate::builder::RecipeScraperBuilder;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extractors::{discover_links, parse_recipe};
use crate::fetchers::Fetcher;
use crate::model::{FailedRecipe, Recipe, RunSummary};
use crate::output::write_recipes;
use log::{info, warn};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tokio::time::sleep;
use url::Url;

/// Scrapes every recipe linked from the codex index.
///
/// Pages are fetched one at a time with a fixed pause between requests.
/// Anything that goes wrong with a single page is recorded as a failure
/// entry and the run moves on.
pub struct RecipeScraper {
    config: ScraperConfig,
    base_url: Url,
    fetcher: Box<dyn Fetcher>,
    parser: fn(&str, &str) -> Recipe,
}

impl RecipeScraper {
    /// Create a new builder for configuring a scraper
    ///
    /// # Example
    /// ```
    /// use alchplanner_scraper::RecipeScraper;
    ///
    /// let scraper = RecipeScraper::builder()
    ///     .output_path("out/recipes.json")
    ///     .build();
    /// assert!(scraper.is_ok());
    /// ```
    pub fn builder() -> RecipeScraperBuilder {
        RecipeScraperBuilder::default()
    }

    pub(crate) fn new(config: ScraperConfig, base_url: Url, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            config,
            base_url,
            fetcher,
            parser: parse_recipe,
        }
    }

    #[cfg(test)]
    fn with_parser(mut self, parser: fn(&str, &str) -> Recipe) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetch the index page and list the recipe pages it links to.
    pub async fn discover(&self) -> Result<Vec<String>, ScrapeError> {
        let index_url = self.config.index_url()?;
        info!("Fetching recipe index {}", index_url);
        let html = self.fetcher.fetch(index_url.as_str()).await?;
        Ok(discover_links(&html, &self.base_url, &self.config.recipe_prefix))
    }

    /// Scrape every discovered page without writing anything.
    ///
    /// Only a failure to fetch the index aborts; each page yields exactly
    /// one entry, in link order.
    pub async fn collect(&self) -> Result<Vec<Recipe>, ScrapeError> {
        let links = self.discover().await?;
        let total = links.len();
        info!("Found {} recipe links", total);

        let mut recipes = Vec::with_capacity(total);
        for (i, url) in links.iter().enumerate() {
            if i > 0 {
                sleep(self.config.delay()).await;
            }
            recipes.push(self.scrape_page(url).await);
            info!("[{}/{}] {}", i + 1, total, url);
        }

        Ok(recipes)
    }

    /// Scrape every discovered page and write the collection to the
    /// configured output path.
    pub async fn run(&self) -> Result<Vec<Recipe>, ScrapeError> {
        let recipes = self.collect().await?;
        write_recipes(&self.config.output_path, &recipes).await?;
        info!(
            "{} written to {}",
            RunSummary::of(&recipes),
            self.config.output_path
        );
        Ok(recipes)
    }

    async fn scrape_page(&self, url: &str) -> Recipe {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                return FailedRecipe::errored(url, e).into();
            }
        };

        match panic::catch_unwind(AssertUnwindSafe(|| (self.parser)(&html, url))) {
            Ok(recipe) => {
                if let Recipe::Failed(failure) = &recipe {
                    warn!("Could not parse {}: {:?}", url, failure.cause);
                }
                recipe
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!("Parsing {} panicked: {}", url, message);
                FailedRecipe::errored(url, message).into()
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "parser panicked".to_string()
    }
}
