//! Widget shell: launcher button plus the collapsible chat panel.

use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::transcript_view::TranscriptView;
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;

/// Floating launcher that opens a panel with transcript and composer.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<WidgetConfig>();

    let title = config.title.clone();
    let on_toggle = move |_| {
        chat.update(|c| {
            let transition = c.toggle(&config);
            log::debug!("chat widget {transition:?}");
        });
    };
    let on_close = move |_| {
        chat.update(|c| {
            c.close();
        });
    };

    let is_open = move || chat.with(|c| c.conversation.is_open());
    let is_closed = move || !is_open();

    view! {
        <div class="chat-widget" class:chat-widget--open=is_open>
            <button
                class="chat-widget__launcher"
                type="button"
                aria-label="Toggle chat"
                aria-expanded=move || is_open().to_string()
                on:click=on_toggle
            >
                "💬"
            </button>

            <section class="chat-widget__panel" class:chat-widget__panel--hidden=is_closed>
                <header class="chat-widget__header">
                    <span class="chat-widget__title">{title}</span>
                    <button class="chat-widget__close" type="button" aria-label="Close chat" on:click=on_close>
                        "×"
                    </button>
                </header>

                <TranscriptView/>
                <Composer/>
            </section>
        </div>
    }
}
