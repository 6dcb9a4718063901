//! # chat-widget
//!
//! Leptos + WASM chat widget embedded into a storefront page.
//!
//! The widget toggles a chat panel, renders user and bot messages plus product
//! cards, and forwards each query to a fixed HTTP endpoint as a single JSON
//! POST. Conversation logic (state, transcript, rendering, dispatch, wire
//! parsing) is plain Rust and tested natively; DOM lookup, HTTP and task
//! spawning are only live with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod mount;
pub mod net;
pub mod render;
pub mod state;
pub mod util;
