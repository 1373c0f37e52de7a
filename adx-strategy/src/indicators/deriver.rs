//! Indicator derivation with whole-series fallback

use crate::config::IndicatorConfig;
use crate::data::{Candle, CandleSeries};
use crate::error::IndicatorError;
use crate::indicators::{
    calculate_adx, calculate_directional, calculate_momentum, calculate_sar, percent_change,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Indicator columns aligned index-for-index with a candle series.
///
/// Rows before an indicator's warm-up are `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorFrame {
    pub adx: Vec<f64>,
    pub plus_di: Vec<f64>,
    pub minus_di: Vec<f64>,
    pub sar: Vec<f64>,
    pub mom: Vec<f64>,
    /// Set when the columns hold fallback values instead of real indicators
    pub fallback: bool,
}

impl IndicatorFrame {
    /// Fallback columns: directional values pinned to 0, SAR copied from
    /// close, momentum replaced by percent change over `mom_period`.
    pub fn fallback(candles: &CandleSeries, mom_period: usize) -> Self {
        let closes = candles.closes();
        let zeros = vec![0.0; closes.len()];

        Self {
            adx: zeros.clone(),
            plus_di: zeros.clone(),
            minus_di: zeros,
            mom: percent_change(&closes, mom_period),
            sar: closes,
            fallback: true,
        }
    }

    /// Number of rows present in every column
    pub fn len(&self) -> usize {
        self.columns().iter().map(|column| column.len()).min().unwrap_or(0)
    }

    /// Check if the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn columns(&self) -> [&Vec<f64>; 5] {
        [&self.adx, &self.plus_di, &self.minus_di, &self.sar, &self.mom]
    }

    /// Whether every column is defined at `index`
    pub fn is_complete(&self, index: usize) -> bool {
        self.columns()
            .iter()
            .all(|column| column.get(index).is_some_and(|v| !v.is_nan()))
    }
}

fn to_column(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

fn check_inputs(candles: &[Candle]) -> Result<(), IndicatorError> {
    for (index, candle) in candles.iter().enumerate() {
        for (field, value) in [("high", candle.high), ("low", candle.low), ("close", candle.close)] {
            if !value.is_finite() {
                return Err(IndicatorError::NonFiniteInput { index, field });
            }
        }
        if candle.high < candle.low {
            return Err(IndicatorError::InvertedRange { index });
        }
    }
    Ok(())
}

/// Computes the indicator columns for a candle series
#[derive(Debug, Clone, Default)]
pub struct IndicatorDeriver {
    config: IndicatorConfig,
}

impl IndicatorDeriver {
    /// Create a deriver for the given periods
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    /// Get the indicator configuration
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Compute every column, failing on the first fault.
    pub fn try_derive(&self, candles: &CandleSeries) -> Result<IndicatorFrame, IndicatorError> {
        let config = &self.config;
        let rows = candles.candles();
        check_inputs(rows)?;

        let adx = calculate_adx(rows, config.adx_period)?;
        let (plus_di, minus_di) = calculate_directional(rows, config.di_period)?;
        let sar = calculate_sar(rows, config.sar_acceleration, config.sar_maximum)?;
        let mom = calculate_momentum(rows, config.mom_period)?;

        Ok(IndicatorFrame {
            adx: to_column(adx),
            plus_di: to_column(plus_di),
            minus_di: to_column(minus_di),
            sar: to_column(sar),
            mom: to_column(mom),
            fallback: false,
        })
    }

    /// Compute every column; any fault degrades the whole frame to
    /// [`IndicatorFrame::fallback`] so callers always get a full-length frame.
    pub fn derive(&self, candles: &CandleSeries) -> IndicatorFrame {
        match self.try_derive(candles) {
            Ok(frame) => {
                debug!(rows = frame.len(), "Derived indicator columns");
                frame
            }
            Err(e) => {
                warn!(
                    error = %e,
                    rows = candles.len(),
                    "Indicator computation failed, using fallback values"
                );
                IndicatorFrame::fallback(candles, self.config.mom_period)
            }
        }
    }
}
