#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Flat,
}

impl Direction {
    /// Anything other than exactly `up`/`down` (the service emits `neutral`) is flat.
    pub fn parse(value: &str) -> Self {
        match value {
            "up" => Self::Up,
            "down" => Self::Down,
            _ => Self::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strength {
    #[default]
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Unrecognised strengths (e.g. `conflicted`) land in the weak tier.
    /// Matching is case-sensitive.
    pub fn parse(value: &str) -> Self {
        match value {
            "strong" => Self::Strong,
            "moderate" => Self::Moderate,
            _ => Self::Weak,
        }
    }
}

/// Score and optional recommendation for one analysis horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeframeBias {
    pub score: f64,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeframes {
    pub daily: Option<TimeframeBias>,
    pub weekly: Option<TimeframeBias>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Indicators {
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub ema20: Option<f64>,
    pub ema50: Option<f64>,
    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,
}

/// Market bias analysis for a single instrument, as returned by the service.
///
/// Optional fields stay `None` when the service leaves them out; nothing here
/// is recomputed or defaulted on the client side.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BiasResult {
    pub symbol: String,
    pub bias: String,
    pub icon: String,
    pub direction: Direction,
    pub strength: Strength,
    pub score: Option<f64>,
    pub timeframes: Timeframes,
    pub indicators: Indicators,
    pub prev_price: Option<f64>,
    pub current_price: Option<f64>,
    pub change_percentage: Option<f64>,
    /// Legacy field, preferred over `timeframes.daily.recommendation`.
    pub tv_recommendation: Option<String>,
}
