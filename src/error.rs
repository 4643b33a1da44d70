//! Error types for modal wiring and submission transport.

use wasm_bindgen::JsValue;

/// Unified error type for the modal layer.
///
/// Covers the failure classes a controller can hit: missing DOM anchors at
/// construction time, network failures during fetch/submit, and JS interop
/// failures surfaced as opaque `JsValue`s.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModalError {
	/// The dialog element was not found in the document.
	#[error("dialog element not found: #{0}")]
	DialogNotFound(String),

	/// The content slot was not found inside the dialog.
	#[error("content slot not found: {0}")]
	ContentSlotNotFound(String),

	/// No global `document` is available.
	#[error("document is not available")]
	NoDocument,

	/// Network error (connection failed, request not sent, body unreadable).
	#[error("network error: {0}")]
	Network(String),

	/// A browser API call failed.
	#[error("browser interop error: {0}")]
	Interop(String),
}

impl ModalError {
	/// Create a network error.
	pub fn network(msg: impl Into<String>) -> Self {
		Self::Network(msg.into())
	}

	/// Wrap an opaque JS error value.
	pub fn interop(value: JsValue) -> Self {
		Self::Interop(format!("{value:?}"))
	}
}
