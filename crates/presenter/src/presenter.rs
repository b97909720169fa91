//! Pure mapping from a [`BiasResult`] to a [`DisplayDirective`].
//!
//! Nothing in here performs I/O or fails. Missing fields degrade to `N/A`
//! (or `0` for the strength badge score).

use common::models::{BiasResult, Direction, Strength, TimeframeBias};

use crate::directive::{
    ChangeIcon, DisplayDirective, IndicatorCell, IndicatorDirectives, RowVisibility, Tone,
};

pub const NOT_AVAILABLE: &str = "N/A";

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;

const STRONG_BIAS: f64 = 50.0;
const MILD_BIAS: f64 = 20.0;
// Color emphasis uses its own cut-off, independent of the label bands.
const EMPHASIS: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthTier {
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeframeClass {
    pub label: &'static str,
    pub tone: Tone,
}

pub fn strength_tier(strength: Strength, direction: Direction) -> StrengthTier {
    let (label, tone) = match (strength, direction) {
        (Strength::Strong, Direction::Up) => ("Strong Strength", Tone::Success),
        (Strength::Strong, Direction::Down) => ("Strong Strength", Tone::Danger),
        (Strength::Moderate, Direction::Up) => ("Moderate Strength", Tone::Info),
        (Strength::Moderate, Direction::Down) => ("Moderate Strength", Tone::Warning),
        _ => ("Weak Strength", Tone::Neutral),
    };
    StrengthTier { label, tone }
}

pub fn classify_timeframe(score: f64) -> TimeframeClass {
    let label = if score >= STRONG_BIAS {
        "Strong Bullish"
    } else if score >= MILD_BIAS {
        "Bullish"
    } else if score <= -STRONG_BIAS {
        "Strong Bearish"
    } else if score <= -MILD_BIAS {
        "Bearish"
    } else {
        "Sideways"
    };

    let tone = if score >= EMPHASIS {
        Tone::Success
    } else if score <= -EMPHASIS {
        Tone::Danger
    } else {
        Tone::Neutral
    };

    TimeframeClass { label, tone }
}

pub fn rsi_tone(rsi: f64) -> Tone {
    if rsi > RSI_OVERBOUGHT {
        Tone::Danger
    } else if rsi < RSI_OVERSOLD {
        Tone::Success
    } else {
        Tone::Neutral
    }
}

pub fn macd_tone(macd: f64, signal: f64) -> Tone {
    if macd > signal {
        Tone::Success
    } else if macd < signal {
        Tone::Danger
    } else {
        Tone::Neutral
    }
}

pub fn change_badge(direction: Direction) -> (Tone, ChangeIcon) {
    match direction {
        Direction::Up => (Tone::Success, ChangeIcon::ArrowUp),
        Direction::Down => (Tone::Danger, ChangeIcon::ArrowDown),
        Direction::Flat => (Tone::Neutral, ChangeIcon::Flat),
    }
}

pub fn header_tone(direction: Direction) -> Tone {
    change_badge(direction).0
}

/// Legacy `tv_recommendation` first, then the daily timeframe, then `N/A`.
pub fn resolve_recommendation(result: &BiasResult) -> &str {
    let provided = |text: &&str| !text.trim().is_empty();

    result
        .tv_recommendation
        .as_deref()
        .filter(provided)
        .or_else(|| {
            result
                .timeframes
                .daily
                .as_ref()
                .and_then(|daily| daily.recommendation.as_deref())
                .filter(provided)
        })
        .unwrap_or(NOT_AVAILABLE)
}

/// Shortest decimal form, so `70.0` prints as `70` and `1.0855` as-is.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    value.to_string()
}

fn format_opt(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn plain_cell(value: Option<f64>) -> IndicatorCell {
    IndicatorCell {
        text: format_opt(value),
        tone: Tone::Neutral,
    }
}

fn timeframe_line(name: &str, timeframe: &TimeframeBias) -> (String, String, Tone) {
    let class = classify_timeframe(timeframe.score);
    let text = format!(
        "{}: {} ({})",
        name,
        class.label,
        format_number(timeframe.score)
    );
    (class.label.to_string(), text, class.tone)
}

fn indicator_directives(result: &BiasResult) -> IndicatorDirectives {
    let indicators = &result.indicators;

    let rsi = IndicatorCell {
        text: format_opt(indicators.rsi),
        tone: indicators.rsi.map(rsi_tone).unwrap_or(Tone::Neutral),
    };

    let macd_emphasis = match (indicators.macd, indicators.macd_signal) {
        (Some(macd), Some(signal)) => macd_tone(macd, signal),
        _ => Tone::Neutral,
    };
    let macd = IndicatorCell {
        text: format!(
            "{} / {}",
            format_opt(indicators.macd),
            format_opt(indicators.macd_signal)
        ),
        tone: macd_emphasis,
    };

    IndicatorDirectives {
        rsi,
        macd,
        ema20: plain_cell(indicators.ema20),
        ema50: plain_cell(indicators.ema50),
        stoch_k: plain_cell(indicators.stoch_k),
        stoch_d: plain_cell(indicators.stoch_d),
    }
}

pub fn present(result: &BiasResult) -> DisplayDirective {
    let tier = strength_tier(result.strength, result.direction);
    let strength_text = format!(
        "{} ({})",
        tier.label,
        format_number(result.score.unwrap_or(0.0))
    );

    let (daily_label, daily_text, daily_class) = match &result.timeframes.daily {
        Some(daily) => timeframe_line("Daily", daily),
        None => (
            NOT_AVAILABLE.to_string(),
            format!("Daily: {NOT_AVAILABLE}"),
            Tone::Neutral,
        ),
    };

    let weekly = result
        .timeframes
        .weekly
        .as_ref()
        .map(|weekly| timeframe_line("Weekly", weekly));
    let weekly_row = if weekly.is_some() {
        RowVisibility::Shown
    } else {
        RowVisibility::Hidden
    };
    let (weekly_label, weekly_text, weekly_class) = match weekly {
        Some((label, text, tone)) => (Some(label), Some(text), Some(tone)),
        None => (None, None, None),
    };

    let (change_class, change_icon) = change_badge(result.direction);
    let change_text = match result.change_percentage {
        Some(pct) => format!("{}%", format_number(pct)),
        None => NOT_AVAILABLE.to_string(),
    };

    DisplayDirective {
        symbol: result.symbol.clone(),
        icon: result.icon.clone(),
        bias: result.bias.clone(),
        strength_label: tier.label.to_string(),
        strength_text,
        strength_class: tier.tone,
        recommendation: resolve_recommendation(result).to_string(),
        daily_label,
        daily_text,
        daily_class,
        weekly_label,
        weekly_text,
        weekly_class,
        weekly_row,
        indicators: indicator_directives(result),
        prev_price: format_opt(result.prev_price),
        current_price: format_opt(result.current_price),
        change_text,
        change_class,
        change_icon,
        header_class: header_tone(result.direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::{Indicators, Timeframes};

    fn timeframe(score: f64, recommendation: Option<&str>) -> TimeframeBias {
        TimeframeBias {
            score,
            recommendation: recommendation.map(str::to_string),
        }
    }

    fn sample() -> BiasResult {
        BiasResult {
            symbol: "EURUSD".into(),
            bias: "Bullish".into(),
            icon: "📈".into(),
            direction: Direction::Up,
            strength: Strength::Moderate,
            score: Some(35.0),
            timeframes: Timeframes {
                daily: Some(timeframe(35.0, Some("BUY"))),
                weekly: Some(timeframe(-45.0, Some("SELL"))),
            },
            indicators: Indicators {
                rsi: Some(61.2),
                macd: Some(0.0012),
                macd_signal: Some(0.0008),
                ema20: Some(1.0841),
                ema50: Some(1.0799),
                stoch_k: None,
                stoch_d: None,
            },
            prev_price: Some(1.0812),
            current_price: Some(1.0855),
            change_percentage: Some(0.4),
            tv_recommendation: None,
        }
    }

    #[test]
    fn timeframe_label_boundaries() {
        let cases = [
            (-50.0, "Strong Bearish"),
            (-49.0, "Bearish"),
            (-21.0, "Bearish"),
            (-20.0, "Bearish"),
            (-19.0, "Sideways"),
            (0.0, "Sideways"),
            (19.0, "Sideways"),
            (20.0, "Bullish"),
            (49.0, "Bullish"),
            (50.0, "Strong Bullish"),
            (95.0, "Strong Bullish"),
        ];

        for (score, expected) in cases {
            assert_eq!(classify_timeframe(score).label, expected, "score {score}");
        }
    }

    #[test]
    fn timeframe_color_uses_its_own_thresholds() {
        let bullish = classify_timeframe(45.0);
        assert_eq!(bullish.label, "Bullish");
        assert_eq!(bullish.tone, Tone::Success);

        let bearish = classify_timeframe(-45.0);
        assert_eq!(bearish.label, "Bearish");
        assert_eq!(bearish.tone, Tone::Danger);

        assert_eq!(classify_timeframe(39.0).tone, Tone::Neutral);
        assert_eq!(classify_timeframe(40.0).tone, Tone::Success);
        assert_eq!(classify_timeframe(-40.0).tone, Tone::Danger);
        assert_eq!(classify_timeframe(-39.0).tone, Tone::Neutral);
    }

    #[test]
    fn strength_tiers() {
        let tier = strength_tier(Strength::Strong, Direction::Down);
        assert_eq!(tier.label, "Strong Strength");
        assert_eq!(tier.tone, Tone::Danger);

        assert_eq!(
            strength_tier(Strength::Strong, Direction::Up).tone,
            Tone::Success
        );
        assert_eq!(
            strength_tier(Strength::Moderate, Direction::Up),
            StrengthTier {
                label: "Moderate Strength",
                tone: Tone::Info
            }
        );
        assert_eq!(
            strength_tier(Strength::Moderate, Direction::Down).tone,
            Tone::Warning
        );

        for (strength, direction) in [
            (Strength::Strong, Direction::Flat),
            (Strength::Moderate, Direction::Flat),
            (Strength::Weak, Direction::Up),
            (Strength::Weak, Direction::Down),
        ] {
            assert_eq!(
                strength_tier(strength, direction),
                StrengthTier {
                    label: "Weak Strength",
                    tone: Tone::Neutral
                }
            );
        }
    }

    #[test]
    fn strength_badge_shows_score_or_zero() {
        let mut result = sample();
        result.strength = Strength::Strong;
        result.direction = Direction::Down;
        result.score = Some(-70.0);

        let directive = present(&result);
        assert_eq!(directive.strength_text, "Strong Strength (-70)");
        assert_eq!(directive.strength_class, Tone::Danger);

        result.score = None;
        assert_eq!(present(&result).strength_text, "Strong Strength (0)");
    }

    #[test]
    fn rsi_bands() {
        assert_eq!(rsi_tone(75.0), Tone::Danger);
        assert_eq!(rsi_tone(25.0), Tone::Success);
        assert_eq!(rsi_tone(50.0), Tone::Neutral);
        assert_eq!(rsi_tone(70.0), Tone::Neutral);
        assert_eq!(rsi_tone(30.0), Tone::Neutral);
    }

    #[test]
    fn rsi_cell_in_directive() {
        let mut result = sample();
        result.indicators.rsi = Some(75.0);
        assert_eq!(present(&result).indicators.rsi.tone, Tone::Danger);

        result.indicators.rsi = Some(25.0);
        assert_eq!(present(&result).indicators.rsi.tone, Tone::Success);

        result.indicators.rsi = Some(50.0);
        let cell = present(&result).indicators.rsi;
        assert_eq!(cell.tone, Tone::Neutral);
        assert_eq!(cell.text, "50");

        result.indicators.rsi = None;
        let cell = present(&result).indicators.rsi;
        assert_eq!(cell.text, "N/A");
        assert_eq!(cell.tone, Tone::Neutral);
    }

    #[test]
    fn macd_against_signal() {
        assert_eq!(macd_tone(0.5, 0.2), Tone::Success);
        assert_eq!(macd_tone(-0.5, 0.2), Tone::Danger);
        assert_eq!(macd_tone(0.2, 0.2), Tone::Neutral);

        let mut result = sample();
        let cell = present(&result).indicators.macd;
        assert_eq!(cell.text, "0.0012 / 0.0008");
        assert_eq!(cell.tone, Tone::Success);

        result.indicators.macd_signal = None;
        let cell = present(&result).indicators.macd;
        assert_eq!(cell.text, "0.0012 / N/A");
        assert_eq!(cell.tone, Tone::Neutral);
    }

    #[test]
    fn ema_values_are_verbatim() {
        let mut result = sample();
        result.indicators.ema50 = None;

        let indicators = present(&result).indicators;
        assert_eq!(indicators.ema20.text, "1.0841");
        assert_eq!(indicators.ema20.tone, Tone::Neutral);
        assert_eq!(indicators.ema50.text, "N/A");
        assert_eq!(indicators.stoch_k.text, "N/A");
    }

    #[test]
    fn weekly_row_hidden_without_weekly_timeframe() {
        let mut result = sample();
        result.timeframes.weekly = None;

        let directive = present(&result);
        assert_eq!(directive.weekly_row, RowVisibility::Hidden);
        assert_eq!(directive.weekly_label, None);
        assert_eq!(directive.weekly_text, None);
        assert_eq!(directive.weekly_class, None);
    }

    #[test]
    fn timeframe_lines() {
        let directive = present(&sample());

        assert_eq!(directive.daily_label, "Bullish");
        assert_eq!(directive.daily_text, "Daily: Bullish (35)");
        assert_eq!(directive.daily_class, Tone::Neutral);

        assert_eq!(directive.weekly_row, RowVisibility::Shown);
        assert_eq!(directive.weekly_label.as_deref(), Some("Bearish"));
        assert_eq!(directive.weekly_text.as_deref(), Some("Weekly: Bearish (-45)"));
        assert_eq!(directive.weekly_class, Some(Tone::Danger));
    }

    #[test]
    fn missing_daily_timeframe_reads_not_available() {
        let mut result = sample();
        result.timeframes = Timeframes::default();

        let directive = present(&result);
        assert_eq!(directive.daily_text, "Daily: N/A");
        assert_eq!(directive.daily_class, Tone::Neutral);
        assert_eq!(directive.recommendation, "N/A");
    }

    #[test]
    fn recommendation_prefers_legacy_field() {
        let mut result = sample();
        result.tv_recommendation = Some("Buy".into());
        result.timeframes.daily = Some(timeframe(10.0, Some("Sell")));
        assert_eq!(resolve_recommendation(&result), "Buy");

        result.tv_recommendation = None;
        assert_eq!(resolve_recommendation(&result), "Sell");

        result.timeframes.daily = Some(timeframe(10.0, None));
        assert_eq!(resolve_recommendation(&result), "N/A");
        assert_eq!(present(&result).recommendation_text(), "TradingView: N/A");
    }

    #[test]
    fn change_badge_and_header_follow_direction() {
        let mut result = sample();

        let directive = present(&result);
        assert_eq!(directive.change_class, Tone::Success);
        assert_eq!(directive.change_icon, ChangeIcon::ArrowUp);
        assert_eq!(directive.change_text, "0.4%");
        assert_eq!(directive.header_class, Tone::Success);

        result.direction = Direction::Down;
        result.change_percentage = Some(-1.25);
        let directive = present(&result);
        assert_eq!(directive.change_class, Tone::Danger);
        assert_eq!(directive.change_icon, ChangeIcon::ArrowDown);
        assert_eq!(directive.change_text, "-1.25%");
        assert_eq!(directive.header_class, Tone::Danger);

        result.direction = Direction::Flat;
        let directive = present(&result);
        assert_eq!(directive.change_class, Tone::Neutral);
        assert_eq!(directive.change_icon, ChangeIcon::Flat);
        assert_eq!(directive.header_class, Tone::Neutral);
    }

    #[test]
    fn headline_fields_pass_through() {
        let directive = present(&sample());
        assert_eq!(directive.symbol, "EURUSD");
        assert_eq!(directive.icon, "📈");
        assert_eq!(directive.bias, "Bullish");
        assert_eq!(directive.prev_price, "1.0812");
        assert_eq!(directive.current_price, "1.0855");
    }

    #[test]
    fn presenting_twice_is_identical() {
        let result = sample();
        assert_eq!(present(&result), present(&result));

        let bare = BiasResult::default();
        assert_eq!(present(&bare), present(&bare));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(70.0), "70");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.0855), "1.0855");
        assert_eq!(format_number(-12.5), "-12.5");
    }
}
