use super::section::extract_section;
use super::text::{element_text, page_text};
use super::ParsingContext;
use crate::model::{FailedRecipe, MissingField, ParsedRecipe, Recipe, UNKNOWN_DEVICE};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("Invalid title selector"));

static CRAFTING_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Crafting Time\s+([0-9]+)\s*s").expect("Invalid crafting time regex")
});

// A line reading exactly "Device", then the device name on the next line
static DEVICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^Device\n\s*([^\n]+)").expect("Invalid device regex"));

/// Extract a recipe from a fetched page.
///
/// Never fails: a page without a crafting time or without any outputs comes
/// back as a failure record naming the missing field.
pub fn parse_recipe(html: &str, url: &str) -> Recipe {
    parse_context(&ParsingContext::new(url, html))
}

pub fn parse_context(context: &ParsingContext) -> Recipe {
    let url = context.url.as_str();
    let slug = slug_from_url(url);
    let name = context
        .document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| element_text(title, " "))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| slug.clone());

    let text = page_text(&context.document);

    let Some(crafting_s) = crafting_time(&text) else {
        debug!("{}: no crafting time", url);
        return FailedRecipe::missing(url, slug, name, MissingField::CraftingTime).into();
    };

    let device = device(&text);
    let inputs = extract_section(&context.document, "Inputs");
    let outputs = extract_section(&context.document, "Outputs");

    if outputs.is_empty() {
        debug!("{}: no outputs", url);
        return FailedRecipe::missing(url, slug, name, MissingField::Outputs).into();
    }

    ParsedRecipe {
        name,
        slug,
        device,
        crafting_s,
        inputs,
        outputs,
        url: url.to_string(),
    }
    .into()
}

/// Last non-empty path segment of a URL, ignoring trailing slashes.
pub fn slug_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn crafting_time(text: &str) -> Option<u64> {
    CRAFTING_TIME_PATTERN
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
}

fn device(text: &str) -> String {
    DEVICE_PATTERN
        .captures(text)
        .map(|captures| captures[1].trim().to_lowercase())
        .filter(|device| !device.is_empty())
        .unwrap_or_else(|| UNKNOWN_DEVICE.to_string())
}
