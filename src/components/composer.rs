//! Text input and send button at the bottom of the panel.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::dispatch::spawn_submit;
use crate::state::chat::ChatState;

/// Input box that submits on Enter or on the send button.
///
/// Blank input is ignored and the input is cleared as soon as a query is
/// accepted, before the reply arrives.
#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = StoredValue::new(expect_context::<WidgetConfig>());
    let input = RwSignal::new(String::new());
    let placeholder = config.with_value(|cfg| cfg.input_placeholder.clone());

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());
        config.with_value(|cfg| spawn_submit(chat, cfg, text));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let is_blank = move || input.with(|text| text.trim().is_empty());

    view! {
        <div class="chat-widget__composer">
            <input
                class="chat-widget__input"
                type="text"
                placeholder=placeholder
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="chat-widget__send" type="button" disabled=is_blank on:click=move |_| do_send()>
                "Send"
            </button>
        </div>
    }
}
