use std::sync::Arc;

use common::{BiasError, models::Instrument};
use tracing::{info, warn};

use crate::{
    remote::{BiasTransport, PairResponse, SUPPORTED_PAIRS_PATH},
    traits::RemoteResponse,
};

/// Fetches the list of instruments the service can analyse.
pub struct PairCatalogLoader {
    transport: Arc<dyn BiasTransport>,
}

impl PairCatalogLoader {
    pub fn new(transport: Arc<dyn BiasTransport>) -> Self {
        Self { transport }
    }

    /// Returns the catalog in server order. Any failure maps to
    /// `CatalogUnavailable`; callers fall back to free-text entry.
    pub async fn load_catalog(&self) -> Result<Vec<Instrument>, BiasError> {
        let reply = self
            .transport
            .get(SUPPORTED_PAIRS_PATH)
            .await
            .map_err(|e| Self::unavailable(e.to_string()))?;

        if !reply.is_success() {
            return Err(Self::unavailable(format!("HTTP {}", reply.status)));
        }

        let pairs = serde_json::from_str::<Vec<PairResponse>>(&reply.body)
            .map_err(|e| Self::unavailable(format!("malformed catalog: {e}")))?;

        info!("Loaded {} supported pairs", pairs.len());
        Ok(pairs.iter().map(RemoteResponse::to_model).collect())
    }

    fn unavailable(detail: String) -> BiasError {
        warn!("Error fetching supported pairs: {}", detail);
        BiasError::CatalogUnavailable(detail)
    }
}
