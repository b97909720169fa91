pub mod bias_response;
pub mod pairs_response;
pub mod transport;

pub use bias_response::BiasResponse;
pub use pairs_response::PairResponse;
pub use transport::{BiasTransport, HttpReply, HttpTransport, TransportFailure};

#[cfg(test)]
pub use transport::MockBiasTransport;

pub const SUPPORTED_PAIRS_PATH: &str = "/get_supported_pairs";
pub const MARKET_BIAS_PATH: &str = "/get_market_bias";
pub const CURRENCY_PAIR_FIELD: &str = "currency_pair";
