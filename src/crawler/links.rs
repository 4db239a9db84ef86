//! Anchor extraction for link discovery
//!
//! A minimal scan over `<a href>` elements, resolving each href to an
//! absolute URL against the source page. Downstream content extraction is a
//! separate concern; this module only feeds the frontier.

use scraper::{Html, Selector};
use url::Url;

/// Extracts outbound links from an HTML page
///
/// Hrefs are resolved against `page_url`. Links that can never be crawled are
/// dropped here: `javascript:`, `mailto:`, `tel:` and `data:` targets,
/// fragment-only same-page anchors, `download` links, and anything that is
/// not http(s) after resolution.
pub fn extract_links(html: &str, page_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                if let Some(url) = resolve_href(href, page_url) {
                    links.push(url);
                }
            }
        }
    }

    links
}

/// Resolves one href to an absolute crawlable URL, or None if it is excluded
fn resolve_href(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Same-page anchors never reach the frontier
    if href.starts_with('#') {
        return None;
    }

    match page_url.join(href) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(url),
        _ => None,
    }
}
