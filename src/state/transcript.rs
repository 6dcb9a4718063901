#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use crate::net::types::Product;
use crate::render::Surface;
use crate::util::time::Timestamp;

/// Who authored a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// Payload of a single message: a text block or one product card.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    Text(String),
    Product(Product),
}

/// A rendered message. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub body: MessageBody,
    pub created_at: Timestamp,
}

impl Message {
    pub fn text(role: Role, text: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            role,
            body: MessageBody::Text(text.into()),
            created_at,
        }
    }

    pub fn product(product: Product, created_at: Timestamp) -> Self {
        Self {
            role: Role::Bot,
            body: MessageBody::Product(product),
            created_at,
        }
    }

    /// Text content, if this is a text block.
    pub fn as_text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Text(text) => Some(text),
            MessageBody::Product(_) => None,
        }
    }

    /// Product, if this is a product card.
    pub fn as_product(&self) -> Option<&Product> {
        match &self.body {
            MessageBody::Product(product) => Some(product),
            MessageBody::Text(_) => None,
        }
    }
}

/// One entry of the transcript region.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Message(Message),
    /// Placeholder shown while a reply is pending.
    Typing,
}

/// Canned queries offered as one-shot buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuickAction {
    TrackOrder,
    ReturnPolicy,
    RecommendProduct,
    ShippingInfo,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::TrackOrder,
        QuickAction::ReturnPolicy,
        QuickAction::RecommendProduct,
        QuickAction::ShippingInfo,
    ];

    /// Button label, which is also the query submitted on click.
    pub fn label(self) -> &'static str {
        match self {
            QuickAction::TrackOrder => "Track my order",
            QuickAction::ReturnPolicy => "Return policy",
            QuickAction::RecommendProduct => "Recommend a product",
            QuickAction::ShippingInfo => "Shipping information",
        }
    }
}

/// The widget body: ordered nodes followed by the quick-actions block.
///
/// The quick-actions block is stored apart from `nodes` so every append
/// lands before it; views render `nodes` first and the block last.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    nodes: Vec<Node>,
    quick_actions: Vec<QuickAction>,
    scroll_epoch: u64,
}

impl Transcript {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn quick_actions(&self) -> &[QuickAction] {
        &self.quick_actions
    }

    /// Bumped on every scroll request; views scroll when it changes.
    pub fn scroll_epoch(&self) -> u64 {
        self.scroll_epoch
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Message(message) => Some(message),
            Node::Typing => None,
        })
    }

    /// Text blocks authored by `role`, in transcript order.
    pub fn texts(&self, role: Role) -> Vec<&str> {
        self.messages()
            .filter(|m| m.role == role)
            .filter_map(Message::as_text)
            .collect()
    }

    /// Product cards, in transcript order.
    pub fn products(&self) -> Vec<&Product> {
        self.messages().filter_map(Message::as_product).collect()
    }

    pub fn has_typing_indicator(&self) -> bool {
        self.nodes.iter().any(|node| matches!(node, Node::Typing))
    }
}

impl Surface for Transcript {
    fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn remove_typing_indicator(&mut self) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| !matches!(node, Node::Typing));
        self.nodes.len() != before
    }

    fn show_quick_actions(&mut self, actions: &[QuickAction]) {
        self.quick_actions = actions.to_vec();
    }

    fn clear_quick_actions(&mut self) {
        self.quick_actions.clear();
    }

    fn scroll_to_end(&mut self) {
        self.scroll_epoch = self.scroll_epoch.wrapping_add(1);
    }
}
