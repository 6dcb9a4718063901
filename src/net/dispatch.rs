//! Query dispatcher: one submission, end to end.
//!
//! SYSTEM CONTEXT
//! ==============
//! `submit_query` renders the user message and typing indicator
//! synchronously, awaits the transport, then renders the reply or the
//! fallback text. State is reached only through `ChatHandle::apply`, so the
//! same code drives the Leptos signal in the browser and a plain
//! `Rc<RefCell<_>>` in tests.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Exchange failures are logged and replaced by
//! the fallback message; replies for superseded turns are logged and dropped.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::api::{ChatTransport, ExchangeError, HttpTransport};
use super::types::BotResponse;
use crate::config::WidgetConfig;
use crate::render;
use crate::state::chat::ChatState;
use crate::state::conversation::TurnId;
use crate::state::transcript::QuickAction;
use crate::util::task;

/// Mutable access to the shared chat state.
pub trait ChatHandle {
    fn apply(&self, f: impl FnOnce(&mut ChatState));
}

impl ChatHandle for Rc<RefCell<ChatState>> {
    fn apply(&self, f: impl FnOnce(&mut ChatState)) {
        f(&mut self.borrow_mut());
    }
}

impl ChatHandle for leptos::prelude::RwSignal<ChatState> {
    fn apply(&self, f: impl FnOnce(&mut ChatState)) {
        leptos::prelude::Update::update(self, f);
    }
}

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing rendered or sent.
    Rejected,
    /// The reply was rendered.
    Answered,
    /// The exchange failed and the fallback text was rendered.
    Fallback,
    /// A newer submission took over; the reply was dropped.
    Superseded,
}

/// Submit `text` as a query.
pub async fn submit_query<H, T>(chat: &H, transport: &T, fallback: &str, text: &str) -> SubmitOutcome
where
    H: ChatHandle,
    T: ChatTransport,
{
    let Some((turn, query)) = begin(chat, text) else {
        return SubmitOutcome::Rejected;
    };
    let result = transport.send_query(&query).await;
    complete(chat, turn, result, fallback)
}

/// Submit a quick action's label, then clear the quick-actions block.
pub async fn submit_quick_action<H, T>(chat: &H, transport: &T, fallback: &str, action: QuickAction) -> SubmitOutcome
where
    H: ChatHandle,
    T: ChatTransport,
{
    let Some((turn, query)) = begin(chat, action.label()) else {
        return SubmitOutcome::Rejected;
    };
    chat.apply(|c| {
        c.take_quick_action(action);
    });
    let result = transport.send_query(&query).await;
    complete(chat, turn, result, fallback)
}

/// Run `submit_query` for typed text on the browser event loop.
pub fn spawn_submit<H: ChatHandle + 'static>(chat: H, config: &WidgetConfig, text: String) {
    let transport = HttpTransport::new(config.endpoint.clone());
    let fallback = config.fallback_message.clone();
    task::spawn(async move {
        let outcome = submit_query(&chat, &transport, &fallback, &text).await;
        log::debug!("query finished: {outcome:?}");
    });
}

/// Run `submit_quick_action` on the browser event loop.
pub fn spawn_quick_action<H: ChatHandle + 'static>(chat: H, config: &WidgetConfig, action: QuickAction) {
    let transport = HttpTransport::new(config.endpoint.clone());
    let fallback = config.fallback_message.clone();
    task::spawn(async move {
        let outcome = submit_quick_action(&chat, &transport, &fallback, action).await;
        log::debug!("quick action {action:?} finished: {outcome:?}");
    });
}

/// Synchronous half: render the user message and typing indicator and open
/// a turn. Returns `None` for blank input.
fn begin<H: ChatHandle>(chat: &H, text: &str) -> Option<(TurnId, String)> {
    let query = text.trim();
    if query.is_empty() {
        return None;
    }

    let mut turn = None;
    chat.apply(|c| {
        render::append_user_message(&mut c.transcript, query);
        render::show_typing_indicator(&mut c.transcript);
        turn = Some(c.conversation.begin_turn());
    });
    let turn = turn?;
    log::debug!("turn {turn}: dispatching query");
    Some((turn, query.to_owned()))
}

/// Asynchronous half: render the outcome of `turn` unless it was superseded.
fn complete<H: ChatHandle>(
    chat: &H,
    turn: TurnId,
    result: Result<BotResponse, ExchangeError>,
    fallback: &str,
) -> SubmitOutcome {
    let mut outcome = SubmitOutcome::Superseded;
    chat.apply(|c| {
        if !c.conversation.finish_turn(turn) {
            return;
        }
        match &result {
            Ok(response) => {
                if response.is_empty() {
                    log::debug!("turn {turn}: empty reply");
                }
                render::append_bot_message(&mut c.transcript, response);
                outcome = SubmitOutcome::Answered;
            }
            Err(err) => {
                log::warn!("turn {turn}: chat exchange failed: {err}");
                render::append_bot_text(&mut c.transcript, fallback);
                outcome = SubmitOutcome::Fallback;
            }
        }
    });
    if outcome == SubmitOutcome::Superseded {
        log::debug!("turn {turn}: superseded, reply dropped");
    }
    outcome
}
