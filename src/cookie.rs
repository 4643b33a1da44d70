//! Cookie store access.
//!
//! [`cookie_value`] is a pure scan over a raw `Cookie`-header-shaped string
//! and is what unit tests exercise; [`read_cookie`] is the thin browser
//! wrapper over `document.cookie`.

/// Looks up `name` in a `"a=1; b=2"`-shaped cookie string.
///
/// Matches the cookie name exactly (surrounding whitespace is ignored) and
/// returns the percent-decoded value of the first match. Returns `None` for
/// an empty store or when no cookie of that name exists. A value that fails
/// to decode is returned verbatim rather than dropped.
pub fn cookie_value(cookie_str: &str, name: &str) -> Option<String> {
	for part in cookie_str.split(';') {
		if let Some((key, value)) = part.split_once('=')
			&& key.trim() == name
		{
			let value = value.trim();
			return Some(
				urlencoding::decode(value)
					.map(|decoded| decoded.into_owned())
					.unwrap_or_else(|_| value.to_string()),
			);
		}
	}
	None
}

/// Reads a named cookie from the ambient `document.cookie` store.
#[cfg(target_arch = "wasm32")]
pub fn read_cookie(name: &str) -> Option<String> {
	use wasm_bindgen::JsCast;
	use web_sys::{HtmlDocument, window};

	let document = window()?.document()?;
	let html_doc = document.dyn_ref::<HtmlDocument>()?;
	let cookie_str = html_doc.cookie().ok()?;
	cookie_value(&cookie_str, name)
}

/// Reads a named cookie (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub fn read_cookie(_name: &str) -> Option<String> {
	None
}
