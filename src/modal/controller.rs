//! Dialog lifecycle and event delegation.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlDialogElement, HtmlFormElement};

use super::FormInterceptor;
use crate::config::ModalConfig;
use crate::error::ModalError;
use crate::fragment::extract_fragment;
use crate::generation::Generation;
use crate::http::fetch_document;
use crate::{error_log, info_log, warn_log};

/// Controller for the page's single modal surface.
///
/// Holds the `<dialog>` handle, its content slot, the selector configuration,
/// and the shared injection epoch. Cloning copies the handles and shares the
/// epoch, which is how event closures capture the controller.
///
/// The dialog is a singleton per page by convention, but nothing here relies
/// on ambient lookups after construction: tests construct as many controllers
/// over as many dialogs as they like.
#[derive(Clone)]
pub struct ModalController {
	dialog: HtmlDialogElement,
	content: Element,
	config: Rc<ModalConfig>,
	generation: Generation,
}

impl ModalController {
	/// Creates a controller over an explicit dialog and content slot.
	pub fn new(dialog: HtmlDialogElement, content: Element, config: ModalConfig) -> Self {
		Self {
			dialog,
			content,
			config: Rc::new(config),
			generation: Generation::new(),
		}
	}

	/// Looks up the dialog and its content slot in `document` according to
	/// `config` and builds a controller over them.
	pub fn attach(document: &Document, config: ModalConfig) -> Result<Self, ModalError> {
		let dialog = document
			.get_element_by_id(&config.dialog_id)
			.ok_or_else(|| ModalError::DialogNotFound(config.dialog_id.clone()))?;
		let dialog: HtmlDialogElement = dialog
			.dyn_into()
			.map_err(|_| ModalError::DialogNotFound(config.dialog_id.clone()))?;
		let content = dialog
			.query_selector(&config.content_slot_selector)
			.map_err(ModalError::interop)?
			.ok_or_else(|| ModalError::ContentSlotNotFound(config.content_slot_selector.clone()))?;
		Ok(Self::new(dialog, content, config))
	}

	/// Installs click delegation: document-level for open triggers,
	/// dialog-level for the backdrop and close/cancel controls.
	///
	/// Delegation is installed once here; content injected later (including
	/// every re-render) is covered without any per-element registration.
	pub fn mount(&self, document: &Document) -> Result<(), ModalError> {
		let controller = self.clone();
		let on_dialog_click = Closure::wrap(Box::new(move |event: Event| {
			controller.handle_dialog_click(&event);
		}) as Box<dyn FnMut(_)>);
		self.dialog
			.add_event_listener_with_callback("click", on_dialog_click.as_ref().unchecked_ref())
			.map_err(ModalError::interop)?;
		on_dialog_click.forget();

		let controller = self.clone();
		let on_trigger_click = Closure::wrap(Box::new(move |event: Event| {
			controller.handle_trigger_click(&event);
		}) as Box<dyn FnMut(_)>);
		document
			.add_event_listener_with_callback("click", on_trigger_click.as_ref().unchecked_ref())
			.map_err(ModalError::interop)?;
		on_trigger_click.forget();

		Ok(())
	}

	/// Fetches `url`, injects its fragment, opens the dialog, and binds any
	/// contained form with `url` as the action URL.
	///
	/// All-or-nothing: on fetch failure (or a lost epoch race) the dialog
	/// stays closed and the slot keeps its prior state.
	pub async fn open_from_trigger(&self, url: &str) -> Result<(), ModalError> {
		let epoch = self.generation.advance();
		let html = fetch_document(url).await?;
		if !self.generation.is_current(epoch) {
			warn_log!("discarding stale modal content for {url}");
			return Ok(());
		}
		self.render_fragment(&html, url);
		if let Err(err) = self.dialog.show_modal() {
			self.content.set_inner_html("");
			return Err(ModalError::interop(err));
		}
		Ok(())
	}

	/// Extracts the fragment from `html`, replaces the slot content with it,
	/// and binds the first contained form (if any) to `action_url`.
	///
	/// This is the single render step shared by the initial open and every
	/// validation re-render. The action URL is carried through unchanged:
	/// re-renders change content, never the submission target. Each call
	/// starts a new injection epoch, so the replaced fragment's in-flight
	/// work can no longer touch the slot.
	pub fn render_fragment(&self, html: &str, action_url: &str) {
		self.generation.advance();
		let fragment = extract_fragment(html, &self.config.fragment_selector);
		self.content.set_inner_html(&fragment);
		if let Ok(Some(form)) = self.content.query_selector("form")
			&& let Ok(form) = form.dyn_into::<HtmlFormElement>()
		{
			FormInterceptor::bind(self.clone(), &form, action_url);
		}
	}

	/// Closes the dialog and empties the content slot.
	///
	/// Idempotent: closing an already-closed dialog leaves the same
	/// post-state. Also starts a new epoch, so responses still in flight are
	/// discarded instead of reviving discarded content.
	pub fn close(&self) {
		info_log!("closing modal");
		self.generation.advance();
		self.dialog.close();
		self.content.set_inner_html("");
	}

	/// Whether the dialog is currently open.
	pub fn is_open(&self) -> bool {
		self.dialog.open()
	}

	/// Current markup of the content slot.
	pub fn content_markup(&self) -> String {
		self.content.inner_html()
	}

	pub(crate) fn generation(&self) -> &Generation {
		&self.generation
	}

	fn handle_trigger_click(&self, event: &Event) {
		let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
			return;
		};
		let Ok(Some(trigger)) = target.closest(&self.config.trigger_selector) else {
			return;
		};
		event.prevent_default();
		let Some(url) = trigger.get_attribute("href") else {
			warn_log!("modal trigger without href ignored");
			return;
		};
		let controller = self.clone();
		spawn_local(async move {
			if let Err(err) = controller.open_from_trigger(&url).await {
				error_log!("failed to load modal content from {url}: {err}");
			}
		});
	}

	fn handle_dialog_click(&self, event: &Event) {
		let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
			return;
		};
		// The dialog surface itself is only hit by backdrop clicks; anything
		// inside the dialog reports an inner element as the target.
		if &target == AsRef::<Element>::as_ref(&self.dialog) {
			self.close();
			return;
		}
		if let Ok(Some(_)) = target.closest(&self.config.close_selector) {
			event.prevent_default();
			self.close();
		}
	}
}
