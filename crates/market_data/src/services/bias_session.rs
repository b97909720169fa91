use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use common::{BiasError, models::BiasResult};
use tokio::sync::watch;
use tracing::debug;

use crate::services::BiasSource;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The response belongs to the latest request and is now displayed.
    Loaded(Arc<BiasResult>),
    /// The latest request failed; the displayed result was cleared.
    Failed(BiasError),
    /// A newer request was issued while this one was in flight.
    Stale,
}

/// Tracks the currently displayed result and drops out-of-order responses.
///
/// Every submission takes the next sequence number. Only a response whose
/// number is still the latest when it arrives may touch the displayed state.
pub struct BiasSession {
    source: Arc<dyn BiasSource>,
    latest: AtomicU64,
    current: watch::Sender<Option<Arc<BiasResult>>>,
}

impl BiasSession {
    pub fn new(source: Arc<dyn BiasSource>) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            source,
            latest: AtomicU64::new(0),
            current,
        }
    }

    pub fn current(&self) -> Option<Arc<BiasResult>> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<BiasResult>>> {
        self.current.subscribe()
    }

    pub fn latest_sequence(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, symbol: &str) -> SessionOutcome {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let fetched = self.source.fetch_bias(symbol).await;

        let mut outcome = SessionOutcome::Stale;
        // The check and the write happen under the channel lock so two
        // completions cannot interleave.
        self.current.send_if_modified(|slot| {
            if self.latest.load(Ordering::SeqCst) != seq {
                return false;
            }
            match &fetched {
                Ok(result) => {
                    let result = Arc::new(result.clone());
                    *slot = Some(result.clone());
                    outcome = SessionOutcome::Loaded(result);
                }
                Err(err) => {
                    *slot = None;
                    outcome = SessionOutcome::Failed(err.clone());
                }
            }
            true
        });

        if outcome == SessionOutcome::Stale {
            debug!(
                "Discarding response #{} for {:?}, latest is #{}",
                seq,
                symbol.trim(),
                self.latest_sequence()
            );
        }
        outcome
    }
}
