//! Networking modules for the single JSON action endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema and per-attempt errors, `backoff` decides
//! whether and when to retry, `transport` performs one POST on the host's
//! HTTP stack, and `client` composes them into the retrying `send`.

pub mod backoff;
pub mod client;
pub mod transport;
pub mod types;
