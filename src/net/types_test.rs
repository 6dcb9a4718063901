use super::*;

// =============================================================
// Helpers
// =============================================================

fn product(title: &str) -> Product {
    Product {
        title: title.to_owned(),
        image_url: Some(format!("https://cdn.example.com/{title}.png")),
        product_url: Some(format!("https://shop.example.com/products/{title}")),
        price: None,
    }
}

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn chat_request_serializes_query_field() {
    let body = serde_json::to_value(ChatRequest { query: "Where is my order?" }).unwrap();
    assert_eq!(body, serde_json::json!({ "query": "Where is my order?" }));
}

// =============================================================
// parse_bot_response shapes
// =============================================================

#[test]
fn bare_string_parses_as_text() {
    let parsed = parse_bot_response("\"Hello\"").unwrap();
    assert_eq!(parsed, BotResponse::Text("Hello".to_owned()));
    assert_eq!(parsed.text(), Some("Hello"));
    assert!(parsed.products().is_empty());
}

#[test]
fn object_with_text_and_empty_products_parses_as_structured() {
    let parsed = parse_bot_response(r#"{"text":"Hi","products":[]}"#).unwrap();
    assert_eq!(
        parsed,
        BotResponse::Structured {
            text: Some("Hi".to_owned()),
            products: Some(Vec::new()),
        }
    );
}

#[test]
fn object_with_products_only_keeps_array_order() {
    let body = serde_json::json!({
        "products": [
            {"title": "A", "image_url": "https://cdn.example.com/A.png", "product_url": "https://shop.example.com/products/A"},
            {"title": "B", "image_url": "https://cdn.example.com/B.png", "product_url": "https://shop.example.com/products/B"}
        ]
    });
    let parsed = parse_bot_response(&body.to_string()).unwrap();
    assert_eq!(parsed.text(), None);
    assert_eq!(parsed.products(), &[product("A"), product("B")]);
}

#[test]
fn response_envelope_is_unwrapped() {
    let body = r#"{"response":{"text":"According to our policy, 30 days.","products":[]}}"#;
    let parsed = parse_bot_response(body).unwrap();
    assert_eq!(parsed.text(), Some("According to our policy, 30 days."));
}

#[test]
fn envelope_around_bare_string_is_unwrapped() {
    let parsed = parse_bot_response(r#"{"response":"Hej!"}"#).unwrap();
    assert_eq!(parsed, BotResponse::Text("Hej!".to_owned()));
}

#[test]
fn null_body_is_empty_reply() {
    let parsed = parse_bot_response("null").unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn empty_object_is_empty_reply() {
    let parsed = parse_bot_response("{}").unwrap();
    assert_eq!(parsed, BotResponse::empty());
    assert!(parsed.is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(parse_bot_response("<html>502 Bad Gateway</html>").is_err());
    assert!(parse_bot_response("").is_err());
}

#[test]
fn wrongly_typed_text_is_an_error() {
    assert!(parse_bot_response(r#"{"text": 42}"#).is_err());
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_accepts_storefront_aliases() {
    let body = r#"{"products":[{"id":"gid://1","title":"Kettle","price":"499.0 SEK","image":"https://cdn.example.com/k.png","url":"https://shop.example.com/products/kettle"}]}"#;
    let parsed = parse_bot_response(body).unwrap();
    let kettle = &parsed.products()[0];
    assert_eq!(kettle.image(), Some("https://cdn.example.com/k.png"));
    assert_eq!(kettle.link(), Some("https://shop.example.com/products/kettle"));
    assert_eq!(kettle.price(), Some("499.0 SEK"));
}

#[test]
fn product_without_image_still_parses() {
    let body = r#"{"text":"Try this","products":[{"title":"Electrolux Flaskhylla","product_url":"https://shop.example.com/products/flaskhylla"}]}"#;
    let parsed = parse_bot_response(body).unwrap();
    assert_eq!(parsed.products().len(), 1);
    assert_eq!(parsed.products()[0].image(), None);
}

#[test]
fn product_null_title_falls_back_to_generic_label() {
    let parsed = parse_bot_response(r#"{"products":[{"title":null}]}"#).unwrap();
    let item = &parsed.products()[0];
    assert_eq!(item.title, "");
    assert_eq!(item.display_title(), "View product");
    assert_eq!(item.link(), None);
}

#[test]
fn product_blank_fields_are_treated_as_absent() {
    let item = Product {
        title: "  Mug ".to_owned(),
        image_url: Some("   ".to_owned()),
        product_url: Some(String::new()),
        price: None,
    };
    assert_eq!(item.display_title(), "Mug");
    assert_eq!(item.image(), None);
    assert_eq!(item.link(), None);
}

// =============================================================
// BotResponse helpers
// =============================================================

#[test]
fn blank_text_counts_as_empty() {
    assert!(BotResponse::Text("   ".to_owned()).is_empty());
    assert!(!BotResponse::Text("ok".to_owned()).is_empty());
}

#[test]
fn products_without_text_are_not_empty() {
    let response = BotResponse::Structured {
        text: None,
        products: Some(vec![product("A")]),
    };
    assert!(!response.is_empty());
}

#[test]
fn display_text_skips_blank_text() {
    assert_eq!(BotResponse::Text(" \n".to_owned()).display_text(), None);
    assert_eq!(BotResponse::Text("Hej".to_owned()).display_text(), Some("Hej"));
}

// =============================================================
// Envelope strictness
// =============================================================

#[test]
fn envelope_with_malformed_products_is_an_error() {
    assert!(parse_bot_response(r#"{"response":{"products":[{"title":5}]}}"#).is_err());
}

#[test]
fn envelope_around_number_is_an_error() {
    assert!(parse_bot_response(r#"{"response":42}"#).is_err());
}

#[test]
fn envelope_commits_even_with_sibling_fields() {
    assert!(parse_bot_response(r#"{"response":42,"text":"ignored"}"#).is_err());
    let parsed = parse_bot_response(r#"{"response":"Hej","text":"ignored"}"#).unwrap();
    assert_eq!(parsed, BotResponse::Text("Hej".to_owned()));
}

#[test]
fn envelope_around_null_is_empty_reply() {
    let parsed = parse_bot_response(r#"{"response":null}"#).unwrap();
    assert_eq!(parsed, BotResponse::empty());
}

// =============================================================
// Product key variants and placeholders
// =============================================================

#[test]
fn product_with_both_key_spellings_prefers_long_keys() {
    let body = r#"{"products":[{"title":"Kettle","image":"https://cdn.example.com/short.png","image_url":"https://cdn.example.com/long.png","url":"https://shop.example.com/short","product_url":"https://shop.example.com/long"}]}"#;
    let parsed = parse_bot_response(body).unwrap();
    let kettle = &parsed.products()[0];
    assert_eq!(kettle.image(), Some("https://cdn.example.com/long.png"));
    assert_eq!(kettle.link(), Some("https://shop.example.com/long"));
}

#[test]
fn product_short_key_fills_in_when_long_key_is_null() {
    let body = r#"{"products":[{"title":"Kettle","image_url":null,"image":"https://cdn.example.com/k.png"}]}"#;
    let parsed = parse_bot_response(body).unwrap();
    assert_eq!(parsed.products()[0].image(), Some("https://cdn.example.com/k.png"));
}

#[test]
fn storefront_missing_price_placeholder_is_hidden() {
    let mut item = product("Mug");
    item.price = Some("N/A".to_owned());
    assert_eq!(item.price(), None);
    item.price = Some(" n/a ".to_owned());
    assert_eq!(item.price(), None);
    item.price = Some("129.0 SEK".to_owned());
    assert_eq!(item.price(), Some("129.0 SEK"));
}
