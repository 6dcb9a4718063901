//! Wire DTOs for the chat endpoint.
//!
//! DESIGN
//! ======
//! The endpoint answers with either a bare JSON string or an object carrying
//! optional `text` and `products`, and some deployments wrap either shape in
//! `{ "response": ... }`. All of that is resolved here, once, into
//! `BotResponse`; rendering never inspects raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of the outbound POST.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

/// A product returned by the backend, passed through to a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireProduct")]
pub struct Product {
    /// Display name.
    pub title: String,
    /// Thumbnail URL.
    pub image_url: Option<String>,
    /// Storefront page the card links to.
    pub product_url: Option<String>,
    /// Preformatted price, e.g. `"199.0 SEK"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Storefront placeholder for a product without a price.
const NO_PRICE: &str = "N/A";

impl Product {
    /// Title to show on the card; blank titles fall back to a generic label.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() { "View product" } else { title }
    }

    pub fn link(&self) -> Option<&str> {
        non_blank(self.product_url.as_deref())
    }

    pub fn image(&self) -> Option<&str> {
        non_blank(self.image_url.as_deref())
    }

    pub fn price(&self) -> Option<&str> {
        non_blank(self.price.as_deref()).filter(|p| !p.eq_ignore_ascii_case(NO_PRICE))
    }
}

/// Product as it appears on the wire. Both the long (`image_url`,
/// `product_url`) and the storefront (`image`, `url`) keys are accepted; the
/// long key wins when both are present.
#[derive(Deserialize)]
struct WireProduct {
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    title: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    product_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    price: Option<String>,
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        Self {
            title: wire.title,
            image_url: wire.image_url.or(wire.image),
            product_url: wire.product_url.or(wire.url),
            price: wire.price,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A parsed bot reply.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "WireResponse")]
pub enum BotResponse {
    /// Bare string body.
    Text(String),
    /// Object body; either part may be absent.
    Structured {
        text: Option<String>,
        products: Option<Vec<Product>>,
    },
}

impl BotResponse {
    /// A reply that renders nothing.
    pub fn empty() -> Self {
        Self::Structured {
            text: None,
            products: None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured { text, .. } => text.as_deref(),
        }
    }

    /// Text worth rendering: present and not blank.
    pub fn display_text(&self) -> Option<&str> {
        self.text().filter(|t| !t.trim().is_empty())
    }

    pub fn products(&self) -> &[Product] {
        match self {
            Self::Text(_) => &[],
            Self::Structured { products, .. } => products.as_deref().unwrap_or_default(),
        }
    }

    /// True when neither a non-blank text nor any product is present.
    pub fn is_empty(&self) -> bool {
        self.display_text().is_none() && self.products().is_empty()
    }
}

/// Shapes the endpoint may produce inside the envelope, in match order.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireResponse {
    Text(String),
    Structured {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        products: Option<Vec<Product>>,
    },
}

impl From<WireResponse> for BotResponse {
    fn from(wire: WireResponse) -> Self {
        match wire {
            WireResponse::Text(text) => Self::Text(text),
            WireResponse::Structured { text, products } => Self::Structured { text, products },
        }
    }
}

/// Key of the `{ "response": ... }` envelope.
const ENVELOPE_KEY: &str = "response";

/// Parse a response body. JSON `null` yields an empty reply.
///
/// An object carrying a `response` key is always an envelope: its value must
/// itself be a valid reply, or parsing fails.
///
/// # Errors
///
/// Returns the serde error when the body is not JSON or matches none of the
/// accepted shapes.
pub fn parse_bot_response(body: &str) -> Result<BotResponse, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    bot_response_from_value(value)
}

fn bot_response_from_value(value: Value) -> Result<BotResponse, serde_json::Error> {
    match value {
        Value::Null => Ok(BotResponse::empty()),
        Value::Object(mut map) => match map.remove(ENVELOPE_KEY) {
            Some(inner) => bot_response_from_value(inner),
            None => serde_json::from_value(Value::Object(map)),
        },
        other => serde_json::from_value(other),
    }
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
