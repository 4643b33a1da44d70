//! Modal Pages - In-Page Modal Workflows for WASM Frontends
//!
//! Turns ordinary server-rendered hyperlinks and forms into an in-page modal
//! workflow: clicking a marked-up link fetches an HTML fragment into a shared
//! `<dialog>`, and submitting a form inside that fragment performs an
//! asynchronous round trip instead of a full page navigation. Validation
//! errors re-render inside the dialog until the server answers with a
//! redirect, which completes the workflow with a real navigation.
//!
//! ## Features
//!
//! - **Markup-driven**: behavior hangs off marker classes
//!   (`.open-modal`, `.btn-cancel`, ...) configured in [`ModalConfig`]
//! - **Event delegation**: close/cancel affordances are wired once at mount
//!   and survive every re-render
//! - **Validation loop**: non-redirect responses re-render in place and
//!   re-bind the fresh form against the same action URL
//! - **Stale-response protection**: an injection epoch discards responses
//!   that lost the race against a newer open, submit, or close
//! - **Low-level only**: built on wasm-bindgen and web-sys, no framework
//!   dependency
//!
//! ## Architecture
//!
//! - [`modal`]: the [`ModalController`] lifecycle and the [`FormInterceptor`]
//! - [`fragment`]: pure extraction of the meaningful region of a response
//! - [`http`]: submission transport and [`ResponseOutcome`] classification
//! - [`cookie`] / [`csrf`]: anti-forgery token lookup
//! - [`config`]: the markup contract
//! - [`generation`]: injection epochs
//! - [`logging`]: console logging macros
//!
//! ## Example
//!
//! ```ignore
//! use modal_pages::{ModalConfig, ModalController};
//!
//! let document = web_sys::window().unwrap().document().unwrap();
//! let controller = ModalController::attach(&document, ModalConfig::default())?;
//! controller.mount(&document)?;
//! // From here on, clicks on `.open-modal` anchors drive the modal.
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod cookie;
pub mod csrf;
pub mod error;
pub mod fragment;
pub mod generation;
pub mod http;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod modal;

pub use config::ModalConfig;
pub use cookie::{cookie_value, read_cookie};
pub use csrf::{CSRF_COOKIE_NAME, CSRF_FORM_FIELD, CSRF_HEADER_NAME, CSRF_META_NAME, csrf_header, csrf_token};
pub use error::ModalError;
pub use fragment::extract_fragment;
pub use generation::Generation;
pub use http::{ResponseOutcome, SubmitResponse, classify, fetch_document, submit_form};

#[cfg(target_arch = "wasm32")]
pub use modal::{FormInterceptor, ModalController};
