pub mod bias_client;
pub mod bias_session;
pub mod catalog_loader;

pub use bias_client::{BiasRequestClient, BiasSource};
pub use bias_session::{BiasSession, SessionOutcome};
pub use catalog_loader::PairCatalogLoader;
