//! Fragment rendering and form binding browser tests.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, EventInit, HtmlDialogElement, HtmlFormElement};

use modal_pages::{ModalConfig, ModalController};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn build_controller(document: &Document) -> (ModalController, Element) {
	let dialog: HtmlDialogElement = document
		.create_element("dialog")
		.unwrap()
		.dyn_into()
		.unwrap();
	let content = document.create_element("div").unwrap();
	content.set_class_name("modal-content");
	dialog.append_child(&content).unwrap();
	document.body().unwrap().append_child(&dialog).unwrap();

	let controller = ModalController::new(dialog, content.clone(), ModalConfig::default());
	(controller, content)
}

#[wasm_bindgen_test]
fn test_injects_extracted_fragment() {
	let document = document();
	let (controller, content) = build_controller(&document);

	let html = r#"<html><body><nav>chrome</nav><main class="container"><p>payload</p></main></body></html>"#;
	controller.render_fragment(html, "/items/5/edit/");

	assert_eq!(content.inner_html(), "<p>payload</p>");
}

#[wasm_bindgen_test]
fn test_injects_body_when_container_is_absent() {
	let document = document();
	let (controller, content) = build_controller(&document);

	controller.render_fragment("<html><body><p>bare</p></body></html>", "/items/5/edit/");

	assert_eq!(content.inner_html(), "<p>bare</p>");
}

#[wasm_bindgen_test]
fn test_reinjection_replaces_prior_content() {
	let document = document();
	let (controller, content) = build_controller(&document);

	controller.render_fragment(
		r#"<body><main class="container"><p>first</p></main></body>"#,
		"/items/5/edit/",
	);
	controller.render_fragment(
		r#"<body><main class="container"><p>second</p></main></body>"#,
		"/items/5/edit/",
	);

	assert_eq!(content.inner_html(), "<p>second</p>");
}

#[wasm_bindgen_test]
fn test_injected_form_submit_is_intercepted() {
	let document = document();
	let (controller, content) = build_controller(&document);

	let html = r#"<html><body><main class="container"><form action="" method="post"><input name="title" value="draft"></form></main></body></html>"#;
	controller.render_fragment(html, "/items/5/edit/");

	let form: HtmlFormElement = content
		.query_selector("form")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();

	let init = EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();

	// dispatch_event returns false when a handler called prevent_default,
	// which is exactly the interception contract.
	let default_not_prevented = form.dispatch_event(&event).unwrap();
	assert!(!default_not_prevented);
}

#[wasm_bindgen_test]
fn test_fragment_without_form_renders_plain_content() {
	let document = document();
	let (controller, content) = build_controller(&document);

	let html = r#"<html><body><main class="container"><p>Deleted.</p></main></body></html>"#;
	controller.render_fragment(html, "/items/5/delete/");

	assert_eq!(content.inner_html(), "<p>Deleted.</p>");
	assert!(content.query_selector("form").unwrap().is_none());
}
