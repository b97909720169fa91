use std::collections::BTreeMap;

use common::models::{BiasResult, Direction, Indicators, Strength, TimeframeBias, Timeframes};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::traits::RemoteResponse;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TimeframeResponse {
    #[serde(deserialize_with = "de_opt_f64")]
    pub score: Option<f64>,
    #[serde(deserialize_with = "de_opt_text")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndicatorsResponse {
    #[serde(deserialize_with = "de_opt_f64")]
    pub rsi: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub macd: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub macd_signal: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub ema20: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub ema50: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub stoch_k: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub stoch_d: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BiasResponse {
    pub symbol: Option<String>,
    pub bias: Option<String>,
    pub icon: Option<String>,
    pub direction: Option<String>,
    pub strength: Option<String>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub score: Option<f64>,
    pub timeframes: Option<BTreeMap<String, TimeframeResponse>>,
    pub indicators: Option<IndicatorsResponse>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub prev_price: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub current_price: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64")]
    pub change_percentage: Option<f64>,
    #[serde(deserialize_with = "de_opt_text")]
    pub tv_recommendation: Option<String>,
}

impl BiasResponse {
    fn timeframe(&self, name: &str) -> Option<TimeframeBias> {
        let entry = self.timeframes.as_ref()?.get(name)?;
        // An entry without a usable score is treated as missing.
        Some(TimeframeBias {
            score: entry.score?,
            recommendation: entry.recommendation.clone(),
        })
    }
}

impl RemoteResponse<BiasResult> for BiasResponse {
    fn to_model(&self) -> BiasResult {
        let indicators = self
            .indicators
            .as_ref()
            .map(|i| Indicators {
                rsi: i.rsi,
                macd: i.macd,
                macd_signal: i.macd_signal,
                ema20: i.ema20,
                ema50: i.ema50,
                stoch_k: i.stoch_k,
                stoch_d: i.stoch_d,
            })
            .unwrap_or_default();

        BiasResult {
            symbol: self.symbol.clone().unwrap_or_default(),
            bias: self.bias.clone().unwrap_or_default(),
            icon: self.icon.clone().unwrap_or_default(),
            direction: self
                .direction
                .as_deref()
                .map(Direction::parse)
                .unwrap_or_default(),
            strength: self
                .strength
                .as_deref()
                .map(Strength::parse)
                .unwrap_or_default(),
            score: self.score,
            timeframes: Timeframes {
                daily: self.timeframe("daily"),
                weekly: self.timeframe("weekly"),
            },
            indicators,
            prev_price: self.prev_price,
            current_price: self.current_price,
            change_percentage: self.change_percentage,
            tv_recommendation: self.tv_recommendation.clone(),
        }
    }
}

/// Accepts a finite JSON number, a numeric string, or null. Anything else is absent.
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(raw)) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// Empty strings count as "not provided".
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text),
        _ => None,
    })
}
