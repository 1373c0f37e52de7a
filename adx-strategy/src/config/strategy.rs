//! Strategy configuration
//!
//! Strategy-level constants the host reads once: ROI schedule, stoploss,
//! candle interval, warm-up row count and the short-side switch.

use crate::config::{HyperoptResult, IndicatorConfig};
use crate::error::ConfigError;
use crate::strategy::SignalPolicy;
use crate::Result;
use anyhow::Context;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Minimum profit by trade age: minutes since entry -> minimum ROI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoiTable(BTreeMap<u32, f64>);

impl RoiTable {
    pub fn new(entries: impl IntoIterator<Item = (u32, f64)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// ROI required for a trade open for `minutes`: the entry with the
    /// largest key not above `minutes`.
    pub fn roi_at(&self, minutes: u32) -> Option<f64> {
        self.0.range(..=minutes).next_back().map(|(_, roi)| *roi)
    }

    pub fn entries(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(minutes, roi)| (*minutes, *roi))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Strategy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Strategy name
    pub name: String,
    /// Timeframe (e.g., "15m", "1h")
    pub timeframe: String,
    /// Minimum ROI schedule
    pub minimal_roi: RoiTable,
    /// Stop loss (e.g., -0.25 = -25%)
    pub stoploss: f64,
    /// Rows that must precede the first trusted signal
    pub startup_candle_count: usize,
    /// Short-side signals; must stay false
    #[serde(default)]
    pub can_short: bool,
    /// Entry/exit rule family
    pub policy: SignalPolicy,
    /// Indicator periods
    #[serde(default)]
    pub indicators: IndicatorConfig,
}

impl StrategyConfig {
    /// ADX + momentum with static thresholds on the 1h timeframe
    pub fn adx_momentum() -> Self {
        Self {
            name: "ADXMomentum".to_string(),
            timeframe: "1h".to_string(),
            minimal_roi: RoiTable::new([(0, 0.01)]),
            stoploss: -0.25,
            startup_candle_count: 30,
            can_short: false,
            policy: SignalPolicy::Threshold,
            indicators: IndicatorConfig::default(),
        }
    }

    /// ADX with DI crossovers on the 15m timeframe
    pub fn adx_15m() -> Self {
        Self {
            name: "ADX_15M_USDT".to_string(),
            timeframe: "15m".to_string(),
            minimal_roi: RoiTable::new([(0, 0.26552), (30, 0.10255), (210, 0.03545), (540, 0.0)]),
            stoploss: -0.1255,
            startup_candle_count: 30,
            can_short: false,
            policy: SignalPolicy::Crossover,
            indicators: IndicatorConfig::default(),
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read strategy config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse strategy config {}", path.display()))
    }

    /// Candle interval width
    pub fn timeframe_duration(&self) -> std::result::Result<Duration, ConfigError> {
        parse_timeframe(&self.timeframe)
    }

    /// Apply ROI and stoploss found in an optimiser result.
    pub fn apply_hyperopt(&mut self, result: &HyperoptResult) {
        if let Some(roi) = result.roi_table() {
            self.minimal_roi = roi;
        }
        if let Some(stoploss) = result.stoploss() {
            self.stoploss = stoploss;
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::adx_momentum()
    }
}

/// Parse a timeframe such as "15m", "1h", "1d" or "1w"
pub fn parse_timeframe(timeframe: &str) -> std::result::Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidTimeframe(timeframe.to_string());

    let split = timeframe.len().checked_sub(1).ok_or_else(invalid)?;
    if !timeframe.is_char_boundary(split) {
        return Err(invalid());
    }
    let (amount, unit) = timeframe.split_at(split);
    let amount: i64 = amount.parse().map_err(|_| invalid())?;
    if amount <= 0 {
        return Err(invalid());
    }

    match unit {
        "m" => Ok(Duration::minutes(amount)),
        "h" => Ok(Duration::hours(amount)),
        "d" => Ok(Duration::days(amount)),
        "w" => Ok(Duration::weeks(amount)),
        _ => Err(invalid()),
    }
}
