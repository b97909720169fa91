/// Color emphasis understood by every renderer.
///
/// `Neutral` means "secondary" on badges and "no color at all" on text, which
/// a renderer must treat as clearing any emphasis it applied before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Danger,
    Info,
    Warning,
    Neutral,
}

impl Tone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Success => "bg-success",
            Self::Danger => "bg-danger",
            Self::Info => "bg-info",
            Self::Warning => "bg-warning",
            Self::Neutral => "bg-secondary",
        }
    }

    pub fn text_class(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("text-success"),
            Self::Danger => Some("text-danger"),
            Self::Info => Some("text-info"),
            Self::Warning => Some("text-warning"),
            Self::Neutral => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeIcon {
    ArrowUp,
    ArrowDown,
    Flat,
}

impl ChangeIcon {
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::ArrowUp => "fa-arrow-up",
            Self::ArrowDown => "fa-arrow-down",
            Self::Flat => "fa-minus",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::ArrowUp => "↑",
            Self::ArrowDown => "↓",
            Self::Flat => "→",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVisibility {
    Shown,
    Hidden,
}

/// Text and emphasis for one indicator cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorCell {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorDirectives {
    pub rsi: IndicatorCell,
    pub macd: IndicatorCell,
    pub ema20: IndicatorCell,
    pub ema50: IndicatorCell,
    pub stoch_k: IndicatorCell,
    pub stoch_d: IndicatorCell,
}

/// Everything a renderer needs to draw one bias result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDirective {
    pub symbol: String,
    pub icon: String,
    pub bias: String,

    pub strength_label: String,
    /// Badge text, e.g. `Strong Strength (70)`.
    pub strength_text: String,
    pub strength_class: Tone,

    pub recommendation: String,

    pub daily_label: String,
    /// Line text, e.g. `Daily: Bullish (35)`.
    pub daily_text: String,
    pub daily_class: Tone,

    pub weekly_label: Option<String>,
    pub weekly_text: Option<String>,
    pub weekly_class: Option<Tone>,
    pub weekly_row: RowVisibility,

    pub indicators: IndicatorDirectives,

    pub prev_price: String,
    pub current_price: String,
    pub change_text: String,
    pub change_class: Tone,
    pub change_icon: ChangeIcon,

    pub header_class: Tone,
}

impl DisplayDirective {
    pub fn recommendation_text(&self) -> String {
        format!("TradingView: {}", self.recommendation)
    }
}
