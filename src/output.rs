use crate::error::ScrapeError;
use crate::model::Recipe;
use log::debug;
use std::path::Path;
use tokio::fs;

/// Write the collection as one pretty-printed JSON array.
///
/// Parent directories are created as needed. Non-ASCII text is written
/// as-is.
pub async fn write_recipes(path: impl AsRef<Path>, recipes: &[Recipe]) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_vec_pretty(recipes)?;
    fs::write(path, json).await?;
    debug!("Wrote {} recipes to {}", recipes.len(), path.display());
    Ok(())
}

/// Read a collection previously written by [`write_recipes`].
pub async fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<Recipe>, ScrapeError> {
    let bytes = fs::read(path.as_ref()).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
