//! Client-held state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only state that outlives a request is the session record written on
//! login and cleared on logout; controllers receive it explicitly.

pub mod session;
