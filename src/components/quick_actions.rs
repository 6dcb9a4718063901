//! Quick-action button row shown under the greeting.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::dispatch::spawn_quick_action;
use crate::state::chat::ChatState;

/// Buttons for the currently offered quick actions. Renders nothing once the
/// block has been cleared.
#[component]
pub fn QuickActions() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = StoredValue::new(expect_context::<WidgetConfig>());

    let actions = Memo::new(move |_| chat.with(|c| c.transcript.quick_actions().to_vec()));

    view! {
        <Show when=move || actions.with(|a| !a.is_empty())>
            <div class="chat-widget__quick-actions">
                {move || {
                    actions
                        .get()
                        .into_iter()
                        .map(|action| {
                            let on_click = move |_| {
                                config.with_value(|cfg| spawn_quick_action(chat, cfg, action));
                            };
                            view! {
                                <button class="chat-widget__quick-action" type="button" on:click=on_click>
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
