//! Controller configuration.
//!
//! All DOM contracts the controller relies on are expressed as selectors so
//! that page markup and controller wiring can evolve independently. The
//! defaults match the markup contract used by the server-rendered templates:
//!
//! - `<a class="open-modal" href="...">` opens the modal with the fetched
//!   fragment,
//! - `.modal-close`, `.close-modal` and `.btn-cancel` elements inside the
//!   dialog close it,
//! - `<main class="container">` marks the meaningful region of a fetched
//!   document.

/// Configuration for a [`ModalController`](crate::ModalController).
///
/// Construct with [`ModalConfig::default`] and override individual selectors
/// as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalConfig {
	/// Id of the `<dialog>` element that hosts modal content.
	pub dialog_id: String,

	/// Selector for the content slot inside the dialog.
	pub content_slot_selector: String,

	/// Selector for anchors that open the modal.
	pub trigger_selector: String,

	/// Selector for close/cancel controls inside the dialog.
	pub close_selector: String,

	/// Selector for the meaningful content region of a fetched document.
	/// When absent from a response, the whole `<body>` is used instead.
	pub fragment_selector: String,
}

impl Default for ModalConfig {
	fn default() -> Self {
		Self {
			dialog_id: "generic-modal".to_string(),
			content_slot_selector: ".modal-content".to_string(),
			trigger_selector: ".open-modal".to_string(),
			close_selector: ".modal-close, .close-modal, .btn-cancel".to_string(),
			fragment_selector: "main.container".to_string(),
		}
	}
}
