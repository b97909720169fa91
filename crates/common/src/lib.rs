pub mod config;
pub mod error;
pub mod logger;
pub mod models;

pub use config::{ClientConfig, ConfigError};
pub use error::BiasError;
