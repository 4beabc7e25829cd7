use super::text::element_text;
use crate::model::Ingredient;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Heading levels that open and close an ingredient section.
const SECTION_HEADINGS: [&str; 2] = ["h2", "h3"];

static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2, h3").expect("Invalid heading selector"));

// "3 × iron ore (" in lowercased element text
static INGREDIENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*×\s*([a-z0-9 '\-]+)\s*\(").expect("Invalid ingredient regex")
});

/// Collect the ingredients listed under the first heading containing
/// `heading_title`.
///
/// Every element after the heading is inspected up to the next `h2`/`h3`.
/// Elements whose text does not read like `3 × iron ore (...)` are skipped,
/// and repeated `(item, amount)` pairs keep only their first occurrence.
/// A missing heading yields an empty list.
pub fn extract_section(document: &Html, heading_title: &str) -> Vec<Ingredient> {
    let Some(heading) = find_heading(document, heading_title) else {
        debug!("No '{}' heading found", heading_title);
        return Vec::new();
    };

    let mut ingredients = Vec::new();
    let following = document
        .root_element()
        .descendants()
        .skip_while(|node| *node != *heading)
        .skip(1)
        .filter_map(ElementRef::wrap);

    for element in following {
        if SECTION_HEADINGS.contains(&element.value().name()) {
            break;
        }
        let text = element_text(element, " ").to_lowercase();
        if let Some(ingredient) = parse_ingredient(&text) {
            ingredients.push(ingredient);
        }
    }

    dedup_ingredients(ingredients)
}

fn find_heading<'a>(document: &'a Html, heading_title: &str) -> Option<ElementRef<'a>> {
    let needle = heading_title.to_lowercase();
    document
        .select(&HEADING_SELECTOR)
        .find(|heading| element_text(*heading, " ").to_lowercase().contains(&needle))
}

/// Parse the first `quantity × item (` phrase out of lowercased text.
pub fn parse_ingredient(text: &str) -> Option<Ingredient> {
    let captures = INGREDIENT_PATTERN.captures(text)?;
    let amount = captures[1].parse().ok()?;
    let item = captures[2].trim();
    Some(Ingredient::new(item, amount))
}

fn dedup_ingredients(ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    let mut seen = HashSet::new();
    ingredients
        .into_iter()
        .filter(|ingredient| seen.insert(ingredient.clone()))
        .collect()
}
