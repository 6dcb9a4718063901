//! Widget visibility and turn tracking.
//!
//! The widget starts `Closed` and un-greeted. The first Closed→Open
//! transition reports `FirstOpen` so the caller renders the greeting; every
//! later open is a plain visibility change.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use uuid::Uuid;

/// Identifies one submitted query and its awaited reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TurnId(Uuid);

impl TurnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Result of a visibility request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Closed→Open for the first time this session; greet now.
    FirstOpen,
    /// Closed→Open after an earlier greeting.
    Reopened,
    AlreadyOpen,
    Closed,
    AlreadyClosed,
}

/// Session-scoped conversation flags.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    visibility: Visibility,
    has_greeted: bool,
    active_turn: Option<TurnId>,
}

impl ConversationState {
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn open(&mut self) -> Transition {
        if self.is_open() {
            return Transition::AlreadyOpen;
        }
        self.visibility = Visibility::Open;
        if self.has_greeted {
            Transition::Reopened
        } else {
            self.has_greeted = true;
            Transition::FirstOpen
        }
    }

    pub fn close(&mut self) -> Transition {
        if !self.is_open() {
            return Transition::AlreadyClosed;
        }
        self.visibility = Visibility::Closed;
        Transition::Closed
    }

    pub fn toggle(&mut self) -> Transition {
        if self.is_open() { self.close() } else { self.open() }
    }

    /// Start a new turn; any earlier turn still in flight is superseded.
    pub fn begin_turn(&mut self) -> TurnId {
        let turn = TurnId::new();
        self.active_turn = Some(turn);
        turn
    }

    pub fn active_turn(&self) -> Option<TurnId> {
        self.active_turn
    }

    pub fn is_active_turn(&self, turn: TurnId) -> bool {
        self.active_turn == Some(turn)
    }

    /// Close `turn` if it is still the active one. Returns false for a
    /// superseded turn, whose reply must not be rendered.
    pub fn finish_turn(&mut self, turn: TurnId) -> bool {
        if !self.is_active_turn(turn) {
            return false;
        }
        self.active_turn = None;
        true
    }
}
