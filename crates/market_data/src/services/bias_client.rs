use std::sync::Arc;

use async_trait::async_trait;
use common::{BiasError, models::BiasResult};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    remote::{BiasResponse, BiasTransport, CURRENCY_PAIR_FIELD, MARKET_BIAS_PATH},
    traits::RemoteResponse,
};

const UNSPECIFIED_REJECTION: &str = "The server rejected the request.";

/// Anything that can answer "what is the bias for this instrument".
#[async_trait]
pub trait BiasSource: Send + Sync {
    async fn fetch_bias(&self, symbol: &str) -> Result<BiasResult, BiasError>;
}

/// Stateless client for the analysis endpoint. One POST per call, no retries.
#[derive(Clone)]
pub struct BiasRequestClient {
    transport: Arc<dyn BiasTransport>,
}

impl BiasRequestClient {
    pub fn new(transport: Arc<dyn BiasTransport>) -> Self {
        Self { transport }
    }

    fn parse_reply(status: u16, body: &str) -> Result<BiasResult, BiasError> {
        let raw: Value = serde_json::from_str(body).map_err(|e| {
            BiasError::TransportError(format!("Failed to parse JSON response: {e}"))
        })?;

        // A rejection envelope wins over the HTTP status.
        if let Some(message) = rejection_message(&raw) {
            warn!("Market bias request rejected: {}", message);
            return Err(BiasError::ServerRejected(message));
        }

        if !(200..300).contains(&status) {
            return Err(BiasError::TransportError(format!("HTTP {status}")));
        }

        let response = serde_json::from_value::<BiasResponse>(raw).map_err(|e| {
            BiasError::TransportError(format!("Unexpected response shape: {e}"))
        })?;

        Ok(response.to_model())
    }
}

/// Only `status` decides whether a body is a rejection. A `message` that is
/// not a string is shown as its JSON text.
fn rejection_message(raw: &Value) -> Option<String> {
    if raw.get("status").and_then(Value::as_str) != Some("error") {
        return None;
    }
    let message = match raw.get("message") {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => UNSPECIFIED_REJECTION.to_string(),
        Some(other) => other.to_string(),
    };
    Some(message)
}

#[async_trait]
impl BiasSource for BiasRequestClient {
    async fn fetch_bias(&self, symbol: &str) -> Result<BiasResult, BiasError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(BiasError::InvalidInput);
        }

        debug!("Requesting market bias for {}", symbol);

        let form = vec![(CURRENCY_PAIR_FIELD.to_string(), symbol.to_string())];
        let reply = self
            .transport
            .post_form(MARKET_BIAS_PATH, form)
            .await
            .map_err(|e| {
                error!("Error fetching market bias for {}: {}", symbol, e);
                BiasError::TransportError(e.to_string())
            })?;

        Self::parse_reply(reply.status, &reply.body)
    }
}
