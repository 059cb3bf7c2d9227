//! HTML extraction for the disclosure sources.
//!
//! Extraction is deliberately tolerant: each helper pulls its target block out
//! of whatever markup came back and returns `None` when the block is absent,
//! so callers can substitute an explanatory message instead of failing.

use scraper::{Html, Selector};

/// Joined text of the first `count` paragraphs, whitespace-collapsed.
///
/// Returns `None` when the document has no non-empty paragraphs.
pub fn first_paragraphs(html: &str, count: usize) -> Option<String> {
    let document = Html::parse_document(html);
    let paragraphs = Selector::parse("p").expect("static selector");

    let joined = document
        .select(&paragraphs)
        .map(|p| collapse_whitespace(&p.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .take(count)
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() { None } else { Some(joined) }
}

/// Text of the first `div.content` block, truncated to `limit` characters.
///
/// Returns `None` when no such block exists or it carries no text.
pub fn content_div_excerpt(html: &str, limit: usize) -> Option<String> {
    let document = Html::parse_document(html);
    let content = Selector::parse("div.content").expect("static selector");

    let block = document.select(&content).next()?;
    let text = collapse_whitespace(&block.text().collect::<String>());
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(limit).collect())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
