//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor performs a single read-only fetch (the stage list); `api`
//! holds that call and its response envelope.

pub mod api;
