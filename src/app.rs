//! Root widget component and context providers.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;

/// Root component mounted into the host element.
///
/// Provides the shared chat state and the static config to every child.
#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());

    provide_context(chat);
    provide_context(config);

    view! { <ChatWidget/> }
}
