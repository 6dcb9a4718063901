#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::WidgetConfig;
use crate::render::{self, Surface};
use crate::state::conversation::{ConversationState, Transition};
use crate::state::transcript::{QuickAction, Transcript};

/// State shared by the widget components through an `RwSignal`.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversation: ConversationState,
    pub transcript: Transcript,
}

impl ChatState {
    /// Open the panel. The first open of the session also renders the
    /// greeting and the quick actions.
    pub fn open(&mut self, config: &WidgetConfig) -> Transition {
        let transition = self.conversation.open();
        self.greet_on_first_open(transition, config);
        transition
    }

    pub fn close(&mut self) -> Transition {
        self.conversation.close()
    }

    pub fn toggle(&mut self, config: &WidgetConfig) -> Transition {
        let transition = self.conversation.toggle();
        self.greet_on_first_open(transition, config);
        transition
    }

    fn greet_on_first_open(&mut self, transition: Transition, config: &WidgetConfig) {
        if transition == Transition::FirstOpen {
            render::append_bot_text(&mut self.transcript, &config.greeting);
            render::render_quick_actions(&mut self.transcript, &config.quick_actions);
        }
    }

    /// Consume a quick action: the block is cleared and the label returned
    /// as the query to submit.
    pub fn take_quick_action(&mut self, action: QuickAction) -> &'static str {
        self.transcript.clear_quick_actions();
        action.label()
    }
}
