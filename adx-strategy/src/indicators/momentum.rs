//! Momentum indicator and close-to-close percent change

use crate::data::Candle;
use crate::error::IndicatorError;
use crate::indicators::{run_over, Indicator};
use std::collections::VecDeque;

/// Momentum: `close[i] - close[i - period]`
#[derive(Debug)]
pub struct Momentum {
    period: usize,
    window: VecDeque<f64>,
    last_value: Option<f64>,
}

impl Momentum {
    /// Create new momentum indicator
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter {
                indicator: "MOM",
                reason: "period must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            period,
            window: VecDeque::with_capacity(period + 1),
            last_value: None,
        })
    }

    /// Get momentum period
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for Momentum {
    fn name(&self) -> &str {
        "MOM"
    }

    fn update(&mut self, candle: &Candle) {
        self.window.push_back(candle.close);
        if self.window.len() > self.period {
            if let Some(oldest) = self.window.pop_front() {
                self.last_value = Some(candle.close - oldest);
            }
        }
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.last_value.is_some()
    }
}

/// Calculate momentum over a series of candles
pub fn calculate_momentum(candles: &[Candle], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    let mut momentum = Momentum::new(period)?;
    Ok(run_over(&mut momentum, candles))
}

/// Percent change over `period` rows, scaled by 100.
///
/// Rows without a predecessor `period` rows back are `NaN`; a zero period
/// yields all zeros.
pub fn percent_change(values: &[f64], period: usize) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| match i.checked_sub(period) {
            Some(j) => (value / values[j] - 1.0) * 100.0,
            None => f64::NAN,
        })
        .collect()
}
