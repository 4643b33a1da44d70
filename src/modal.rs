//! Modal workflow wiring.
//!
//! [`ModalController`] owns the page's single dialog surface and drives the
//! open/inject/close lifecycle; [`FormInterceptor`] turns submits of injected
//! forms into asynchronous round trips. The two cooperate through one
//! explicit step, [`ModalController::render_fragment`]: extract, inject,
//! re-bind. Both the initial open and every validation re-render go through
//! it, so the re-render loop is a loop over that step rather than a tower of
//! nested closures.

mod controller;
mod interceptor;

pub use controller::ModalController;
pub use interceptor::FormInterceptor;
