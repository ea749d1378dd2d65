use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("static selector"));

/// All text under `node`, trimmed.
pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// `href` of the first anchor inside `node`, if any.
pub fn first_anchor_href(node: ElementRef) -> Option<String> {
    node.select(&ANCHOR_SELECTOR)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
}
