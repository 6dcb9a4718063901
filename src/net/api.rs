//! HTTP transport for the chat endpoint.
//!
//! Client-side (csr): a real POST via `gloo-net`.
//! Native builds: a stub that always fails with `ExchangeError::Unavailable`,
//! so the dispatcher's fallback path is what runs outside the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode of one exchange maps to an `ExchangeError`. The
//! dispatcher absorbs these into a single fallback message; the variants only
//! exist for logging.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::BotResponse;
#[cfg(any(test, feature = "csr"))]
use super::types::parse_bot_response;

/// Why a query exchange failed.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("chat transport unavailable outside the browser")]
    Unavailable,
}

/// Sends one query and returns the parsed reply.
pub trait ChatTransport {
    fn send_query(&self, query: &str) -> impl Future<Output = Result<BotResponse, ExchangeError>>;
}

/// POSTs `{ "query": ... }` as JSON to a fixed endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatTransport for HttpTransport {
    async fn send_query(&self, query: &str) -> Result<BotResponse, ExchangeError> {
        #[cfg(feature = "csr")]
        {
            use super::types::ChatRequest;

            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Content-Type", "application/json")
                .json(&ChatRequest { query })
                .map_err(|e| ExchangeError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ExchangeError::Network(e.to_string()))?;
            let body = resp
                .text()
                .await
                .map_err(|e| ExchangeError::Network(e.to_string()))?;
            decode_reply(resp.status(), &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("dropping query of {} chars for {}", query.len(), self.endpoint);
            Err(ExchangeError::Unavailable)
        }
    }
}

/// Turn a status code and body into a reply. Non-2xx fails regardless of body.
#[cfg(any(test, feature = "csr"))]
fn decode_reply(status: u16, body: &str) -> Result<BotResponse, ExchangeError> {
    if !is_success(status) {
        return Err(ExchangeError::Status(status));
    }
    Ok(parse_bot_response(body)?)
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
