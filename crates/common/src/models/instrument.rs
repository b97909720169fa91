/// A tradable symbol offered by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// Label used by autocomplete sources: `"EURUSD - Euro / US Dollar"`.
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.symbol, self.name)
    }
}
