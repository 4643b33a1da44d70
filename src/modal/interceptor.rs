//! Form interception and submission routing.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, FormData, HtmlFormElement};

use super::ModalController;
use crate::csrf::csrf_header;
use crate::error::ModalError;
use crate::http::{ResponseOutcome, classify, submit_form};
use crate::{error_log, warn_log};

/// Turns submits of modal-injected forms into asynchronous round trips.
///
/// There is no unbind operation: a binding dies with its form element when
/// the slot content is replaced, and each injected fragment receives at most
/// one fresh binding.
pub struct FormInterceptor;

impl FormInterceptor {
	/// Registers a submit handler posting `form`'s data to `action_url`.
	///
	/// Default navigation is suppressed; fields (file fields included)
	/// travel as multipart form data with the anti-forgery header attached
	/// when a token is present. A followed redirect navigates top-level and
	/// abandons the modal; any other response re-renders the modal with the
	/// returned fragment, re-binding against the same `action_url`.
	///
	/// Network failure is logged and the modal keeps its pre-submit state;
	/// the user sees no explicit error from this layer.
	pub fn bind(controller: ModalController, form: &HtmlFormElement, action_url: &str) {
		let action_url = action_url.to_string();
		let form_handle = form.clone();
		let on_submit = Closure::wrap(Box::new(move |event: Event| {
			event.prevent_default();
			let data = match FormData::new_with_form(&form_handle) {
				Ok(data) => data,
				Err(err) => {
					error_log!("failed to read form fields: {err:?}");
					return;
				}
			};
			let controller = controller.clone();
			let action_url = action_url.clone();
			spawn_local(async move {
				if let Err(err) = submit(controller, &action_url, data).await {
					error_log!("failed to submit modal form to {action_url}: {err}");
				}
			});
		}) as Box<dyn FnMut(_)>);
		if let Err(err) = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref()) {
			error_log!("failed to bind modal form: {err:?}");
		}
		on_submit.forget();
	}
}

async fn submit(
	controller: ModalController,
	action_url: &str,
	data: FormData,
) -> Result<(), ModalError> {
	let epoch = controller.generation().advance();
	let response = submit_form(action_url, data, csrf_header()).await?;
	match classify(response) {
		ResponseOutcome::Redirected { url } => navigate(&url),
		ResponseOutcome::Rerendered { html } => {
			if !controller.generation().is_current(epoch) {
				warn_log!("discarding stale re-render for {action_url}");
				return Ok(());
			}
			controller.render_fragment(&html, action_url);
			Ok(())
		}
	}
}

// A redirect means the server already applied the action; navigation is not
// gated on the epoch the way slot writes are.
fn navigate(url: &str) -> Result<(), ModalError> {
	let window = web_sys::window().ok_or(ModalError::NoDocument)?;
	window.location().set_href(url).map_err(ModalError::interop)
}
