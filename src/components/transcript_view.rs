//! Scrolling message list: text bubbles, product cards, the typing
//! indicator, and the quick-action block.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::quick_actions::QuickActions;
use crate::state::chat::ChatState;
use crate::state::transcript::{Message, MessageBody, Node, Role};
use crate::util::time::format_clock;

/// Renders the transcript nodes in order and follows the newest one.
#[component]
pub fn TranscriptView() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_epoch = Memo::new(move |_| chat.with(|c| c.transcript.scroll_epoch()));
    let awaiting_reply = move || chat.with(|c| c.conversation.active_turn().is_some()).to_string();

    // Scroll to the bottom whenever the transcript asks for it.
    Effect::new(move || {
        scroll_epoch.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-widget__messages" aria-live="polite" aria-busy=awaiting_reply node_ref=messages_ref>
            {move || {
                chat.with(|c| c.transcript.nodes().to_vec())
                    .into_iter()
                    .map(node_view)
                    .collect::<Vec<_>>()
            }}
            <QuickActions/>
        </div>
    }
}

fn node_view(node: Node) -> AnyView {
    match node {
        Node::Typing => view! {
            <div class="chat-widget__typing" aria-label="Assistant is typing">
                <span></span>
                <span></span>
                <span></span>
            </div>
        }
        .into_any(),
        Node::Message(message) => message_view(message),
    }
}

fn message_view(message: Message) -> AnyView {
    let time = format_clock(&message.created_at);
    let is_user = message.role == Role::User;
    let is_bot = !is_user;

    match message.body {
        MessageBody::Text(text) => view! {
            <div
                class="chat-widget__message"
                class:chat-widget__message--user=is_user
                class:chat-widget__message--bot=is_bot
            >
                <div class="chat-widget__bubble">{text}</div>
                <span class="chat-widget__time">{time}</span>
            </div>
        }
        .into_any(),
        MessageBody::Product(product) => view! { <ProductCard product=product time=time/> }.into_any(),
    }
}
