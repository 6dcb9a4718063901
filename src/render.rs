//! Conversation renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The renderer never touches the DOM. It drives a `Surface`, the small set of
//! display capabilities the transcript needs. `Transcript` is the surface the
//! Leptos view draws from; tests can substitute their own.
//!
//! INVARIANTS
//! ==========
//! - Appends always land before the quick-actions block.
//! - At most one typing indicator exists at a time.
//! - Every append is followed by a scroll to the end.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::net::types::BotResponse;
use crate::state::transcript::{Message, Node, QuickAction, Role};
use crate::util::time;

/// Display capabilities required by the renderer.
pub trait Surface {
    /// Insert a node at the end of the transcript, before the quick actions.
    fn append(&mut self, node: Node);
    /// Remove the typing indicator, returning whether one was present.
    fn remove_typing_indicator(&mut self) -> bool;
    /// Replace the quick-actions block with one button per action.
    fn show_quick_actions(&mut self, actions: &[QuickAction]);
    fn clear_quick_actions(&mut self);
    fn scroll_to_end(&mut self);
}

/// Append a user text block stamped with the current time.
pub fn append_user_message<S: Surface + ?Sized>(surface: &mut S, text: &str) {
    surface.append(Node::Message(Message::text(Role::User, text, time::now())));
    surface.scroll_to_end();
}

/// Append a single bot text block.
pub fn append_bot_text<S: Surface + ?Sized>(surface: &mut S, text: &str) {
    surface.remove_typing_indicator();
    surface.append(Node::Message(Message::text(Role::Bot, text, time::now())));
    surface.scroll_to_end();
}

/// Render a bot reply: its text first, then one card per product.
///
/// Returns the number of nodes appended. Blank text and missing or empty
/// product lists render nothing.
pub fn append_bot_message<S: Surface + ?Sized>(surface: &mut S, response: &BotResponse) -> usize {
    surface.remove_typing_indicator();

    let created_at = time::now();
    let mut rendered = 0;

    if let Some(text) = response.display_text() {
        surface.append(Node::Message(Message::text(Role::Bot, text, created_at)));
        rendered += 1;
    }

    for product in response.products() {
        surface.append(Node::Message(Message::product(product.clone(), created_at)));
        rendered += 1;
    }

    if rendered > 0 {
        surface.scroll_to_end();
    }
    rendered
}

/// Show the pending-reply placeholder, replacing any existing one.
pub fn show_typing_indicator<S: Surface + ?Sized>(surface: &mut S) {
    surface.remove_typing_indicator();
    surface.append(Node::Typing);
    surface.scroll_to_end();
}

/// Replace the quick-actions block with `actions`.
pub fn render_quick_actions<S: Surface + ?Sized>(surface: &mut S, actions: &[QuickAction]) {
    surface.show_quick_actions(actions);
    surface.scroll_to_end();
}
