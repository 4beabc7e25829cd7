use scraper::Html;

mod links;
mod recipe;
mod section;
mod text;

pub use links::{discover_links, discover_recipe_links, RECIPE_PREFIX};
pub use recipe::{parse_context, parse_recipe, slug_from_url};
pub use section::{extract_section, parse_ingredient};
pub use text::{element_text, page_text};

/// A fetched page together with the address it came from.
pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}
