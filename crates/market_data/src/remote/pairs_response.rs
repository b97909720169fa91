use common::models::Instrument;
use serde::Deserialize;

use crate::traits::RemoteResponse;

#[derive(Debug, Deserialize)]
pub struct PairResponse {
    pub symbol: String,
    pub name: String,
}

impl RemoteResponse<Instrument> for PairResponse {
    fn to_model(&self) -> Instrument {
        Instrument::new(self.symbol.clone(), self.name.clone())
    }
}
