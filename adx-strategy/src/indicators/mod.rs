//! Technical indicators module
//!
//! Streaming directional-movement, parabolic SAR and momentum indicators,
//! plus the [`IndicatorDeriver`] that turns a candle series into the
//! aligned indicator columns the signal rules read.

pub mod deriver;
pub mod directional;
pub mod momentum;
pub mod sar;

pub use deriver::*;
pub use directional::*;
pub use momentum::*;
pub use sar::*;

use crate::data::Candle;

/// Indicator trait for all indicators
pub trait Indicator {
    /// Get the name of the indicator
    fn name(&self) -> &str;

    /// Update indicator with the next candle
    fn update(&mut self, candle: &Candle);

    /// Get current indicator value
    fn value(&self) -> Option<f64>;

    /// Check if indicator is ready (has enough data)
    fn is_ready(&self) -> bool;
}

/// Feed every candle through `indicator`, collecting its value after each one.
pub(crate) fn run_over<I: Indicator>(indicator: &mut I, candles: &[Candle]) -> Vec<Option<f64>> {
    candles
        .iter()
        .map(|candle| {
            indicator.update(candle);
            indicator.value()
        })
        .collect()
}
