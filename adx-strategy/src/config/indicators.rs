//! Indicator lookback configuration

use crate::indicators::{DEFAULT_SAR_ACCELERATION, DEFAULT_SAR_MAXIMUM};
use serde::{Deserialize, Serialize};

/// Periods and constants for the derived indicator columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// ADX period
    pub adx_period: usize,
    /// +DI / -DI period
    pub di_period: usize,
    /// Momentum period (also the fallback percent-change lookback)
    pub mom_period: usize,
    /// Parabolic SAR acceleration step
    pub sar_acceleration: f64,
    /// Parabolic SAR acceleration ceiling
    pub sar_maximum: f64,
}

impl IndicatorConfig {
    /// Index of the first row where every column is defined
    pub fn lookback(&self) -> usize {
        let adx = (2 * self.adx_period).saturating_sub(1);
        adx.max(self.di_period).max(self.mom_period).max(1)
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            adx_period: 14,
            di_period: 25,
            mom_period: 14,
            sar_acceleration: DEFAULT_SAR_ACCELERATION,
            sar_maximum: DEFAULT_SAR_MAXIMUM,
        }
    }
}
