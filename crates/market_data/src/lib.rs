pub mod remote;
pub mod services;
pub mod traits;

pub use remote::{BiasTransport, HttpReply, HttpTransport, TransportFailure};
pub use services::{BiasRequestClient, BiasSession, BiasSource, PairCatalogLoader, SessionOutcome};
