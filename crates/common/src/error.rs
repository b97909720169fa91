use thiserror::Error;

/// Failures surfaced to the user. None of them are fatal and none are retried;
/// the `Display` text is what the view shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BiasError {
    #[error("Please enter a currency pair or select one from the list.")]
    InvalidInput,
    #[error("Failed to load popular pairs ({0}). Please type a currency pair directly.")]
    CatalogUnavailable(String),
    #[error("{0}")]
    ServerRejected(String),
    #[error("An error occurred: {0}")]
    TransportError(String),
}
