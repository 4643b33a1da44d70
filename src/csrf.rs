//! Anti-forgery token retrieval.
//!
//! State-changing requests carry a CSRF token in a request header. The token
//! itself is issued by the server; this module only locates it in the page.
//! Lookup tries three sources in order:
//!
//! 1. **Cookie**: the `csrftoken` cookie
//! 2. **Meta tag**: `<meta name="csrf-token" content="...">`
//! 3. **Hidden input**: `<input name="csrfmiddlewaretoken">`

use crate::cookie::read_cookie;

/// The cookie name carrying the CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// The meta tag name carrying the CSRF token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// The header name used to send CSRF tokens with asynchronous submits.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// The hidden form field name carrying the CSRF token.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// Retrieves the CSRF token from the page.
///
/// Tries the cookie first, then the meta tag, then a hidden form input.
/// Returns `None` when no source holds a token.
#[cfg(target_arch = "wasm32")]
pub fn csrf_token() -> Option<String> {
	if let Some(token) = read_cookie(CSRF_COOKIE_NAME) {
		return Some(token);
	}
	if let Some(token) = csrf_token_from_meta() {
		return Some(token);
	}
	csrf_token_from_input()
}

/// Retrieves the CSRF token (non-WASM stub; only the cookie source exists).
#[cfg(not(target_arch = "wasm32"))]
pub fn csrf_token() -> Option<String> {
	read_cookie(CSRF_COOKIE_NAME)
}

/// Header pair for asynchronous submits, if a token is available.
pub fn csrf_header() -> Option<(&'static str, String)> {
	csrf_token().map(|token| (CSRF_HEADER_NAME, token))
}

#[cfg(target_arch = "wasm32")]
fn csrf_token_from_meta() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let selector = format!("meta[name=\"{CSRF_META_NAME}\"]");
	let meta = document.query_selector(&selector).ok()??;
	meta.get_attribute("content")
}

#[cfg(target_arch = "wasm32")]
fn csrf_token_from_input() -> Option<String> {
	use wasm_bindgen::JsCast;

	let document = web_sys::window()?.document()?;
	let selector = format!("input[name=\"{CSRF_FORM_FIELD}\"]");
	let input = document.query_selector(&selector).ok()??;
	let input: web_sys::HtmlInputElement = input.dyn_into().ok()?;
	Some(input.value())
}
