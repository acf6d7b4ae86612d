//! # portal
//!
//! Client-side controller for a signup / login / dashboard flow backed by a
//! single JSON-over-HTTP endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net` owns the wire schema and the retrying client, `state` owns the
//! session record, `util` holds pure validation and greeting helpers, and
//! `pages` wires them into per-page controllers that talk to the host only
//! through view, navigator and storage traits. The `web` module (behind the
//! `hydrate` feature) implements those traits over the browser DOM.

pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    web::boot::on_load();
}
