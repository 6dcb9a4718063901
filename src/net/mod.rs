//! Networking for the single query/response exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema and parse boundary, `api` owns the HTTP
//! transport, and `dispatch` runs one submission end to end against the
//! shared chat state.

pub mod api;
pub mod dispatch;
pub mod types;
