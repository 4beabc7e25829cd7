#[cfg(test)]
mod tests {
    use alchplanner_scraper::model::UNKNOWN_DEVICE;
    use alchplanner_scraper::{
        discover_recipe_links, extract_section, parse_recipe, FailedRecipe, FailureCause,
        Ingredient, MissingField, Recipe,
    };
    use scraper::Html;
    use std::collections::HashSet;
    use url::Url;

    fn reason(recipe: &Recipe) -> Option<MissingField> {
        match recipe {
            Recipe::Failed(FailedRecipe {
                cause: FailureCause::Reason(field),
                ..
            }) => Some(*field),
            _ => None,
        }
    }

    #[test]
    fn test_repeated_entries_keep_first_seen_order() {
        let html = Html::parse_document(
            r#"
            <h2>Inputs</h2>
            <div>3 × iron ore (common)</div>
            <div>2 × iron ore (common)</div>
            <div>2 × iron ore (common)</div>
            "#,
        );

        assert_eq!(
            extract_section(&html, "Inputs"),
            vec![Ingredient::new("iron ore", 3), Ingredient::new("iron ore", 2)]
        );
    }

    #[test]
    fn test_large_section_has_no_duplicate_identities() {
        let items: String = (0..40)
            .map(|i| format!("<li>{} × item {} (x)</li>", i % 4, i % 7))
            .collect();
        let html = Html::parse_document(&format!("<h3>Outputs</h3><ul>{items}</ul>"));

        let outputs = extract_section(&html, "Outputs");
        let unique: HashSet<_> = outputs.iter().collect();
        assert_eq!(unique.len(), outputs.len());
        assert_eq!(outputs.len(), 28);
        assert_eq!(outputs[0], Ingredient::new("item 0", 0));
        assert_eq!(outputs[1], Ingredient::new("item 1", 1));
    }

    #[test]
    fn test_crafting_time_is_checked_before_outputs() {
        let html = "<h1>Nothing</h1><h2>Outputs</h2><p>Nothing</p>";
        let recipe = parse_recipe(html, "https://example.com/recipe/nothing/");
        assert_eq!(reason(&recipe), Some(MissingField::CraftingTime));
    }

    #[test]
    fn test_device_block_in_definition_table() {
        let html = r#"
            <h1>Copper Wire</h1>
            <table>
                <tr><th>Device</th><td>Wire Drawer</td></tr>
                <tr><th>Crafting Time</th><td>2 s</td></tr>
            </table>
            <h2>Outputs</h2>
            <p>4 × Copper Wire (conductive)</p>
        "#;

        let recipe = parse_recipe(html, "https://example.com/recipe/copper-wire");
        let parsed = recipe.as_parsed().unwrap();
        assert_eq!(parsed.device, "wire drawer");
        assert_eq!(parsed.crafting_s, 2);
    }

    #[test]
    fn test_inline_device_label_is_not_a_device_block() {
        let html = r#"
            <h1>Copper Wire</h1>
            <p>Device: Wire Drawer</p>
            <p>Crafting Time 2 s</p>
            <h2>Outputs</h2>
            <p>4 × Copper Wire (conductive)</p>
        "#;

        let recipe = parse_recipe(html, "https://example.com/recipe/copper-wire");
        assert_eq!(recipe.as_parsed().unwrap().device, UNKNOWN_DEVICE);
    }

    #[test]
    fn test_link_discovery() {
        let html = r#"
            <a href="/recipe/iron-ingot/">Iron Ingot</a>
            <a href="/recipe/iron-ingot/">Iron Ingot</a>
            <a href="/recipe/copper-wire">Copper Wire</a>
            <a href="/about">About</a>
        "#;
        let base = Url::parse("https://alchemy-factory-codex.com/").unwrap();

        assert_eq!(
            discover_recipe_links(html, &base),
            vec![
                "https://alchemy-factory-codex.com/recipe/copper-wire",
                "https://alchemy-factory-codex.com/recipe/iron-ingot/",
            ]
        );
    }
}
