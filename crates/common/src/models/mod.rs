pub mod bias;
pub mod instrument;

pub use bias::{BiasResult, Direction, Indicators, Strength, TimeframeBias, Timeframes};
pub use instrument::Instrument;
