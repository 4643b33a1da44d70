//! Submission transport and outcome classification.
//!
//! The transport is a thin wrapper over the fetch API. What matters to the
//! modal state machine is not the raw response but its classification: a
//! followed redirect means the server accepted the submission, anything else
//! is fragment HTML to re-render. Classification is pure so the routing rule
//! is testable without a browser.

use crate::error::ModalError;

/// The observable pieces of a completed submission response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
	/// Whether the transport followed a redirect to produce this response.
	pub redirected: bool,
	/// Final URL after any redirects.
	pub url: String,
	/// Response body.
	pub body: String,
}

/// Tagged result of a submission, consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
	/// The server redirected: the action succeeded, navigate top-level to
	/// the final URL and abandon the modal.
	Redirected {
		/// Navigation target.
		url: String,
	},
	/// Any non-redirect response: fragment HTML to re-render in place,
	/// typically a form with validation errors.
	Rerendered {
		/// Raw document to extract and inject.
		html: String,
	},
}

/// Classifies a submission response.
///
/// Server-side validation failure is not an error: it arrives as an ordinary
/// 200 document and becomes [`ResponseOutcome::Rerendered`]. Status codes are
/// deliberately not inspected, the redirect flag alone decides.
pub fn classify(response: SubmitResponse) -> ResponseOutcome {
	if response.redirected {
		ResponseOutcome::Redirected { url: response.url }
	} else {
		ResponseOutcome::Rerendered { html: response.body }
	}
}

/// Fetches a document for display in the modal.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_document(url: &str) -> Result<String, ModalError> {
	use gloo_net::http::Request;

	let response = Request::get(url)
		.send()
		.await
		.map_err(|err| ModalError::network(err.to_string()))?;

	response
		.text()
		.await
		.map_err(|err| ModalError::network(err.to_string()))
}

/// Fetches a document (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_document(_url: &str) -> Result<String, ModalError> {
	Err(ModalError::network("fetch is only available in the browser"))
}

/// Posts form data to `url` and reports the observable response pieces.
///
/// The body is multipart form data; no Content-Type is set so the browser
/// supplies the boundary. `csrf` is the optional anti-forgery header pair.
#[cfg(target_arch = "wasm32")]
pub async fn submit_form(
	url: &str,
	data: web_sys::FormData,
	csrf: Option<(&'static str, String)>,
) -> Result<SubmitResponse, ModalError> {
	use gloo_net::http::Request;

	let mut request = Request::post(url);
	if let Some((name, value)) = csrf {
		request = request.header(name, &value);
	}

	let response = request
		.body(data)
		.map_err(|err| ModalError::network(err.to_string()))?
		.send()
		.await
		.map_err(|err| ModalError::network(err.to_string()))?;

	let redirected = response.redirected();
	let final_url = response.url();
	let body = response
		.text()
		.await
		.map_err(|err| ModalError::network(err.to_string()))?;

	Ok(SubmitResponse {
		redirected,
		url: final_url,
		body,
	})
}

/// Posts form data (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub async fn submit_form(
	_url: &str,
	_data: web_sys::FormData,
	_csrf: Option<(&'static str, String)>,
) -> Result<SubmitResponse, ModalError> {
	Err(ModalError::network("submit is only available in the browser"))
}
