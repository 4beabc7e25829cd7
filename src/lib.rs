pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod planner;

pub use builder::RecipeScraperBuilder;
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use extractors::{discover_recipe_links, extract_section, parse_recipe};
pub use fetchers::{Fetcher, RequestFetcher};
pub use model::{FailedRecipe, FailureCause, Ingredient, MissingField, ParsedRecipe, Recipe};
pub use output::{load_recipes, write_recipes};
pub use pipeline::RecipeScraper;
pub use planner::{build_plan, PlanError, PlanResult, PlanTotals, PlannerConfig};

/// Scrape the codex with settings from `scraper.toml` / `ALCHPLANNER__*`
/// (falling back to defaults) and write the JSON document.
///
/// Returns the collection that was written.
pub async fn scrape_recipes() -> Result<Vec<Recipe>, ScrapeError> {
    let config = ScraperConfig::load()?;
    RecipeScraper::builder().config(config).build()?.run().await
}
