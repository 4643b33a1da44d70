//! Fragment extraction.
//!
//! Responses to modal loads and submits are full HTML documents; only the
//! designated content region is shown inside the dialog. Extraction is a pure
//! string-to-string function so it can be unit tested without a DOM, and it
//! leans on html5ever's error recovery: malformed or partial input never
//! fails, it just degrades to the body fallback.

use scraper::{Html, Selector};

/// Extracts the meaningful region of an HTML document.
///
/// Returns the inner markup of the first element matching
/// `content_selector`. When the selector matches nothing (or does not parse),
/// the inner markup of `<body>` is returned instead, so a response that does
/// not follow the fragment contract still renders in full.
pub fn extract_fragment(html: &str, content_selector: &str) -> String {
	let document = Html::parse_document(html);

	if let Ok(selector) = Selector::parse(content_selector)
		&& let Some(region) = document.select(&selector).next()
	{
		return region.inner_html();
	}

	body_markup(&document).unwrap_or_else(|| html.to_string())
}

// html5ever always synthesizes a body for a document parse, so the fallback
// only fires for a selector engine failure.
fn body_markup(document: &Html) -> Option<String> {
	let body = Selector::parse("body").ok()?;
	document.select(&body).next().map(|body| body.inner_html())
}
