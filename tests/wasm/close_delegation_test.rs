//! Close/cancel delegation browser tests.
//!
//! Close affordances are wired by delegation on the dialog at mount time, so
//! controls inside freshly injected content must work without any
//! re-registration.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlDialogElement, MouseEvent, MouseEventInit};

use modal_pages::{ModalConfig, ModalController};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn build_mounted_controller(document: &Document) -> (ModalController, HtmlDialogElement, Element) {
	let dialog: HtmlDialogElement = document
		.create_element("dialog")
		.unwrap()
		.dyn_into()
		.unwrap();
	let content = document.create_element("div").unwrap();
	content.set_class_name("modal-content");
	dialog.append_child(&content).unwrap();
	document.body().unwrap().append_child(&dialog).unwrap();

	let controller = ModalController::new(dialog.clone(), content.clone(), ModalConfig::default());
	controller.mount(document).unwrap();
	(controller, dialog, content)
}

fn bubbling_click() -> MouseEvent {
	let init = MouseEventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn test_cancel_click_prevents_default_and_closes() {
	let document = document();
	let (controller, dialog, content) = build_mounted_controller(&document);

	controller.render_fragment(
		r#"<body><main class="container"><form action="" method="post"><a class="btn-cancel" href="/items/">Cancel</a></form></main></body>"#,
		"/items/5/edit/",
	);
	dialog.show_modal().unwrap();

	let cancel = content.query_selector(".btn-cancel").unwrap().unwrap();
	let event = bubbling_click();
	let default_not_prevented = cancel.dispatch_event(&event).unwrap();

	assert!(!default_not_prevented);
	assert!(!controller.is_open());
	assert_eq!(controller.content_markup(), "");
}

#[wasm_bindgen_test]
fn test_all_close_marker_classes_close() {
	let document = document();

	for marker in ["modal-close", "close-modal", "btn-cancel"] {
		let (controller, dialog, content) = build_mounted_controller(&document);
		controller.render_fragment(
			&format!(r#"<body><main class="container"><button class="{marker}">x</button></main></body>"#),
			"/items/5/edit/",
		);
		dialog.show_modal().unwrap();

		let control = content.query_selector(&format!(".{marker}")).unwrap().unwrap();
		control.dispatch_event(&bubbling_click()).unwrap();

		assert!(!controller.is_open(), "marker {marker} should close");
		assert_eq!(controller.content_markup(), "");
	}
}

#[wasm_bindgen_test]
fn test_click_on_nested_child_of_close_control_closes() {
	let document = document();
	let (controller, dialog, content) = build_mounted_controller(&document);

	controller.render_fragment(
		r#"<body><main class="container"><button class="modal-close"><span>dismiss</span></button></main></body>"#,
		"/items/5/edit/",
	);
	dialog.show_modal().unwrap();

	// The click lands on the inner span; delegation resolves it through
	// closest() to the marked ancestor.
	let span = content.query_selector(".modal-close span").unwrap().unwrap();
	span.dispatch_event(&bubbling_click()).unwrap();

	assert!(!controller.is_open());
}

#[wasm_bindgen_test]
fn test_backdrop_click_closes() {
	let document = document();
	let (controller, dialog, _content) = build_mounted_controller(&document);

	controller.render_fragment(
		r#"<body><main class="container"><p>open</p></main></body>"#,
		"/items/5/edit/",
	);
	dialog.show_modal().unwrap();

	// A click whose target is the dialog element itself is a backdrop click.
	dialog.dispatch_event(&MouseEvent::new("click").unwrap()).unwrap();

	assert!(!controller.is_open());
	assert_eq!(controller.content_markup(), "");
}

#[wasm_bindgen_test]
fn test_click_inside_content_keeps_modal_open() {
	let document = document();
	let (controller, dialog, content) = build_mounted_controller(&document);

	controller.render_fragment(
		r#"<body><main class="container"><p>plain text</p></main></body>"#,
		"/items/5/edit/",
	);
	dialog.show_modal().unwrap();

	let paragraph = content.query_selector("p").unwrap().unwrap();
	paragraph.dispatch_event(&bubbling_click()).unwrap();

	assert!(controller.is_open());
	assert_eq!(controller.content_markup(), "<p>plain text</p>");
}
