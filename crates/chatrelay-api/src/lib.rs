//! HTTP application layer for chatrelay.
//!
//! Exposes the router and application state so the binary and integration
//! tests build the exact same service.

pub mod http;
pub mod state;
