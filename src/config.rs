//! Widget configuration.
//!
//! DESIGN
//! ======
//! Nothing here is configurable at runtime. The endpoint is baked in at
//! compile time from `CHAT_WIDGET_ENDPOINT`; everything else comes from
//! `WidgetConfig::default()` and is provided to components via context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::transcript::QuickAction;

/// Endpoint used when `CHAT_WIDGET_ENDPOINT` is unset at build time.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";

/// Chat endpoint compiled into this build.
pub const CHAT_ENDPOINT: &str = match option_env!("CHAT_WIDGET_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_ENDPOINT,
};

/// Id of the page element the widget mounts into.
pub const HOST_ELEMENT_ID: &str = "chat-widget-root";

/// Shown in place of a bot reply when an exchange fails.
pub const FALLBACK_MESSAGE: &str = "Sorry, I'm having trouble connecting. Please try again later.";

/// First bot message, rendered once per page session.
pub const GREETING: &str = "Hi! I'm V, your shopping assistant. How can I help you today?";

pub const TITLE: &str = "Chat with V";

pub const INPUT_PLACEHOLDER: &str = "Type your message...";

/// Static widget settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Absolute URL the query POST is sent to.
    pub endpoint: String,
    /// Element id the widget mounts into.
    pub host_element_id: String,
    /// Header text of the chat panel.
    pub title: String,
    /// Bot greeting shown on the first open.
    pub greeting: String,
    /// Bot text shown when an exchange fails.
    pub fallback_message: String,
    /// Placeholder of the composer input.
    pub input_placeholder: String,
    /// Quick actions offered with the greeting.
    pub quick_actions: Vec<QuickAction>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: CHAT_ENDPOINT.to_owned(),
            host_element_id: HOST_ELEMENT_ID.to_owned(),
            title: TITLE.to_owned(),
            greeting: GREETING.to_owned(),
            fallback_message: FALLBACK_MESSAGE.to_owned(),
            input_placeholder: INPUT_PLACEHOLDER.to_owned(),
            quick_actions: QuickAction::ALL.to_vec(),
        }
    }
}
