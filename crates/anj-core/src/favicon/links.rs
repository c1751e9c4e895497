//! `<link rel="...icon...">` discovery in fetched markup.

use scraper::{Html, Selector};
use std::sync::OnceLock;

/// `rel` values that mark an icon link. Matched as substrings, so
/// `apple-touch-icon-precomposed` and `mask-icon` qualify too.
const ICON_RELS: [&str; 3] = ["icon", "shortcut icon", "apple-touch-icon"];

fn link_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("link[rel]").expect("constant selector parses"))
}

/// `href` values of icon links, in document order. Empty hrefs are dropped.
///
/// The HTML parser recovers from any input, so this never fails.
pub fn icon_link_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(link_selector())
        .filter(|link| link.value().attr("rel").is_some_and(is_icon_rel))
        .filter_map(|link| link.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(String::from)
        .collect()
}

fn is_icon_rel(rel: &str) -> bool {
    let rel = rel.to_ascii_lowercase();
    ICON_RELS.iter().any(|token| rel.contains(token))
}
