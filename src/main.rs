use alchplanner_scraper::{RecipeScraper, ScraperConfig};
use env_logger::Env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ScraperConfig::load()?;
    let scraper = RecipeScraper::builder().config(config).build()?;
    scraper.run().await?;

    println!("Wrote {}", scraper.config().output_path);
    Ok(())
}
