use log::debug;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Path prefix of recipe detail pages on the codex site.
pub const RECIPE_PREFIX: &str = "/recipe/";

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("Invalid anchor selector"));

/// Find every recipe page linked from an index page.
///
/// Returns absolute addresses, deduplicated and sorted ascending.
pub fn discover_recipe_links(html: &str, base: &Url) -> Vec<String> {
    discover_links(html, base, RECIPE_PREFIX)
}

/// Like [`discover_recipe_links`] with a custom path prefix.
///
/// Links are resolved against `base`; links to another origin (scheme, host
/// or port), unparseable links and links outside `prefix` are dropped.
/// Fragments are removed.
pub fn discover_links(html: &str, base: &Url, prefix: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = BTreeSet::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(mut url) = base.join(href.trim()) else {
            debug!("Skipping unparseable link: {}", href);
            continue;
        };
        if url.origin() != base.origin() || !url.path().starts_with(prefix) {
            continue;
        }
        url.set_fragment(None);
        links.insert(url.to_string());
    }

    links.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://alchemy-factory-codex.com/").unwrap()
    }

    #[test]
    fn test_dedup_sort_and_filter() {
        let html = r#"
            <nav><a href="/about">About</a></nav>
            <ul>
                <li><a href="/recipe/iron-ingot/">Iron Ingot</a></li>
                <li><a href="/recipe/iron-ingot/">Iron Ingot (again)</a></li>
                <li><a href="/recipe/copper-wire">Copper Wire</a></li>
            </ul>
        "#;

        assert_eq!(
            discover_recipe_links(html, &base()),
            vec![
                "https://alchemy-factory-codex.com/recipe/copper-wire",
                "https://alchemy-factory-codex.com/recipe/iron-ingot/",
            ]
        );
    }

    #[test]
    fn test_absolute_and_foreign_links() {
        let html = r##"
            <a href="https://alchemy-factory-codex.com/recipe/glass/">Glass</a>
            <a href="https://elsewhere.example/recipe/glass/">Mirror site</a>
            <a href="/recipe/salt/#inputs">Salt inputs</a>
            <a href="/recipes/">All recipes</a>
            <a>No address</a>
        "##;

        assert_eq!(
            discover_recipe_links(html, &base()),
            vec![
                "https://alchemy-factory-codex.com/recipe/glass/",
                "https://alchemy-factory-codex.com/recipe/salt/",
            ]
        );
    }

    #[test]
    fn test_other_scheme_or_port_is_dropped() {
        let html = r#"
            <a href="http://alchemy-factory-codex.com/recipe/glass/">Plain http</a>
            <a href="https://alchemy-factory-codex.com:8080/recipe/glass/">Other port</a>
            <a href="https://alchemy-factory-codex.com:443/recipe/salt/">Default port</a>
        "#;

        assert_eq!(
            discover_recipe_links(html, &base()),
            vec!["https://alchemy-factory-codex.com/recipe/salt/"]
        );
    }

    #[test]
    fn test_custom_prefix() {
        let html = r#"<a href="/item/salt">Salt</a><a href="/recipe/salt">Salt recipe</a>"#;

        assert_eq!(
            discover_links(html, &base(), "/item/"),
            vec!["https://alchemy-factory-codex.com/item/salt"]
        );
    }

    #[test]
    fn test_no_links() {
        assert!(discover_recipe_links("<p>Nothing here</p>", &base()).is_empty());
    }
}
