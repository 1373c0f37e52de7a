//! Base strategy trait

use crate::config::StrategyConfig;
use crate::data::CandleSeries;
use crate::error::DataError;
use crate::indicators::IndicatorFrame;
use crate::strategy::SignalFrame;
use serde::Serialize;
use tracing::debug;

/// Indicator and signal columns for one analysed candle series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedFrame {
    pub indicators: IndicatorFrame,
    pub signals: SignalFrame,
}

impl AnalyzedFrame {
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// A strategy is a pure function of (candles, its own configuration).
///
/// Hosts call [`Strategy::analyze`] with the full candle history on every
/// update; nothing is carried between calls.
pub trait Strategy {
    /// Get strategy name
    fn name(&self) -> &str;

    /// Strategy-level constants read by the host
    fn config(&self) -> &StrategyConfig;

    /// Compute indicator columns. Never fails.
    fn populate_indicators(&self, candles: &CandleSeries) -> IndicatorFrame;

    /// Compute the `enter_long` column
    fn populate_entry_trend(&self, indicators: &IndicatorFrame) -> Vec<bool>;

    /// Compute the `exit_long` column
    fn populate_exit_trend(&self, indicators: &IndicatorFrame) -> Vec<bool>;

    /// Run the whole pipeline. Rows before `startup_candle_count` never
    /// carry a signal.
    fn analyze(&self, candles: &CandleSeries) -> Result<AnalyzedFrame, DataError> {
        candles.validate()?;

        let indicators = self.populate_indicators(candles);
        let mut signals = SignalFrame {
            enter_long: self.populate_entry_trend(&indicators),
            exit_long: self.populate_exit_trend(&indicators),
        };
        signals.clear_before(self.config().startup_candle_count);

        debug!(
            strategy = self.name(),
            rows = candles.len(),
            entries = signals.entry_count(),
            exits = signals.exit_count(),
            fallback = indicators.fallback,
            "Analyzed candle series"
        );

        Ok(AnalyzedFrame {
            indicators,
            signals,
        })
    }
}
