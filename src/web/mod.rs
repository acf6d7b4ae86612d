//! Browser host (hydrate only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the controller seams over `web-sys`: `sessionStorage` for the
//! session record, element ids from the static pages for views, and
//! `location.href` for navigation. `boot` wires everything at page load.

pub mod boot;
pub mod dom;
pub mod storage;
