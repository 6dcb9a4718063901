//! Leptos view components.
//!
//! All components read `RwSignal<ChatState>` and `WidgetConfig` from context;
//! none of them own state beyond their own input fields.

pub mod chat_widget;
pub mod composer;
pub mod product_card;
pub mod quick_actions;
pub mod transcript_view;
