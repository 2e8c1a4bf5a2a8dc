// Best-effort title and body extraction. This function never fails outward:
// a page we cannot make sense of degrades to empty strings and the check
// proceeds with reduced confidence.

use scraper::{ElementRef, Html, Selector};

const MAX_PARAGRAPHS: usize = 6;
const FALLBACK_TITLE_MAX_CHARS: usize = 140;

/// Minimum text mass before a candidate region is trusted as main content.
const MIN_CANDIDATE_CHARS: usize = 80;

/// Selectors tried as main-content candidates, most specific first.
const CANDIDATE_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    "#content",
    ".post",
    ".article-body",
    ".entry-content",
    ".story-body",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedContent {
    pub title: String,
    pub body: String,
}

/// Derive a title and short body from page HTML.
///
/// Primary path: readability-style candidate scoring — regions are ranked
/// by text mass penalized by link density, and the best region's first six
/// paragraphs become the body. When no region qualifies or the body comes
/// out empty, fall back to the raw `<title>` (truncated to 140 chars) plus
/// the first six `<p>` elements of the full document.
pub fn extract(html: &str) -> ExtractedContent {
    let document = Html::parse_document(html);

    if let Some(content) = extract_main_content(&document) {
        return content;
    }

    fallback_extract(&document)
}

fn extract_main_content(document: &Html) -> Option<ExtractedContent> {
    let mut best: Option<ElementRef> = None;
    let mut best_score = i64::MIN;

    for candidate in CANDIDATE_SELECTORS {
        let selector = Selector::parse(candidate).unwrap();
        for element in document.select(&selector) {
            let score = score_candidate(&element);
            if score > best_score {
                best_score = score;
                best = Some(element);
            }
        }
    }

    let region = best?;
    if best_score < MIN_CANDIDATE_CHARS as i64 {
        return None;
    }

    let body = collect_paragraphs(region);
    if body.trim().is_empty() {
        return None;
    }

    let title = page_title(document).unwrap_or_default();
    Some(ExtractedContent { title, body })
}

/// Text mass minus a link-density penalty: navigation-shaped regions carry
/// lots of anchor text and little else, so anchors count double against.
fn score_candidate(element: &ElementRef) -> i64 {
    let text_len: usize = element.text().map(str::len).sum();

    let link_selector = Selector::parse("a").unwrap();
    let link_len: usize = element
        .select(&link_selector)
        .flat_map(|a| a.text())
        .map(str::len)
        .sum();

    text_len as i64 - 2 * link_len as i64
}

fn fallback_extract(document: &Html) -> ExtractedContent {
    let title_selector = Selector::parse("title").unwrap();
    let title = document
        .select(&title_selector)
        .next()
        .map(|t| collapse_whitespace(&t.text().collect::<Vec<_>>().join(" ")))
        .unwrap_or_default()
        .chars()
        .take(FALLBACK_TITLE_MAX_CHARS)
        .collect();

    let body = collect_paragraphs_from_root(document);

    ExtractedContent { title, body }
}

/// The page title for the primary path: og:title when present, else <title>,
/// else the first <h1>.
fn page_title(document: &Html) -> Option<String> {
    let og_selector = Selector::parse("meta[property=\"og:title\"]").unwrap();
    if let Some(meta) = document.select(&og_selector).next() {
        if let Some(content) = meta.value().attr("content") {
            let title = collapse_whitespace(content);
            if !title.is_empty() {
                return Some(title);
            }
        }
    }

    for tag in ["title", "h1"] {
        let selector = Selector::parse(tag).unwrap();
        if let Some(element) = document.select(&selector).next() {
            let title = collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "));
            if !title.is_empty() {
                return Some(title);
            }
        }
    }

    None
}

fn collect_paragraphs(region: ElementRef) -> String {
    let selector = Selector::parse("p").unwrap();
    let paragraphs: Vec<String> = region
        .select(&selector)
        .map(|p| collapse_whitespace(&p.text().collect::<Vec<_>>().join(" ")))
        .filter(|text| !text.is_empty())
        .take(MAX_PARAGRAPHS)
        .collect();

    paragraphs.join("\n\n")
}

fn collect_paragraphs_from_root(document: &Html) -> String {
    let selector = Selector::parse("p").unwrap();
    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|p| collapse_whitespace(&p.text().collect::<Vec<_>>().join(" ")))
        .filter(|text| !text.is_empty())
        .take(MAX_PARAGRAPHS)
        .collect();

    paragraphs.join("\n\n")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
