use common::{BiasError, models::Instrument};

pub const CATALOG_FALLBACK_NOTICE: &str =
    "Failed to load popular pairs. Please type a currency pair directly.";

/// One autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOption {
    pub value: String,
    pub label: String,
}

/// What the instrument picker shows. Free-text entry stays available in
/// both states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    Ready {
        options: Vec<CatalogOption>,
        quick_select: Vec<String>,
    },
    Unavailable {
        notice: &'static str,
    },
}

impl CatalogView {
    pub fn from_instruments(instruments: &[Instrument]) -> Self {
        let options = instruments
            .iter()
            .map(|instrument| CatalogOption {
                value: instrument.symbol.clone(),
                label: instrument.display_label(),
            })
            .collect();
        let quick_select = instruments.iter().map(|i| i.symbol.clone()).collect();

        Self::Ready {
            options,
            quick_select,
        }
    }

    pub fn from_result(result: &Result<Vec<Instrument>, BiasError>) -> Self {
        match result {
            Ok(instruments) => Self::from_instruments(instruments),
            Err(_) => Self::Unavailable {
                notice: CATALOG_FALLBACK_NOTICE,
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}
