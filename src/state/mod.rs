//! Client-side widget state.
//!
//! DESIGN
//! ======
//! `conversation` holds the visibility machine and turn tracking, `transcript`
//! holds what is on screen, and `chat` combines the two into the single value
//! that components share through an `RwSignal`.

pub mod chat;
pub mod conversation;
pub mod transcript;
