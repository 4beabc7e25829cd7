use scraper::{ElementRef, Html};

const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Visible text of an element: every text node trimmed, empty ones dropped,
/// the rest joined with `separator`.
pub fn element_text(element: ElementRef, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Whole-page text with one trimmed text node per line.
///
/// Script and style contents are not visible text and are left out.
pub fn page_text(document: &Html) -> String {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|parent| HIDDEN_ELEMENTS.contains(&parent.value().name()));
            (!hidden).then(|| text.trim())
        })
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_element_text_joins_trimmed_pieces() {
        let html = Html::parse_fragment("<li> 3 <b>×</b>\n  <a>Iron Ore</a> (common) </li>");
        let selector = Selector::parse("li").unwrap();
        let li = html.select(&selector).next().unwrap();

        assert_eq!(element_text(li, " "), "3 × Iron Ore (common)");
    }

    #[test]
    fn test_page_text_is_newline_joined() {
        let html = Html::parse_document(
            r#"
            <html>
            <head><style>h1 { color: red; }</style></head>
            <body>
                <h1>Iron Ingot</h1>
                <dl><dt>Device</dt><dd> Smelting Forge </dd></dl>
                <script>var craftingTime = 99;</script>
            </body>
            </html>
            "#,
        );

        assert_eq!(page_text(&html), "Iron Ingot\nDevice\nSmelting Forge");
    }
}
