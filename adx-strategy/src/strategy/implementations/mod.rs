//! Strategy implementations

pub mod adx_strategy;

pub use adx_strategy::*;

use crate::config::{ParameterSet, StrategyConfig};
use crate::error::{ConfigError, StrategyError};
use std::fmt;
use std::str::FromStr;

/// Named strategy presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyPreset {
    /// Static thresholds, 1h candles
    AdxMomentum,
    /// DI crossovers, 15m candles
    Adx15m,
}

impl StrategyPreset {
    pub fn config(&self) -> StrategyConfig {
        match self {
            StrategyPreset::AdxMomentum => StrategyConfig::adx_momentum(),
            StrategyPreset::Adx15m => StrategyConfig::adx_15m(),
        }
    }

    /// Build the preset strategy with the given parameter values
    pub fn build(&self, params: &ParameterSet) -> Result<AdxStrategy, StrategyError> {
        AdxStrategy::new(self.config(), params)
    }
}

impl FromStr for StrategyPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADXMomentum" | "adx_momentum" => Ok(StrategyPreset::AdxMomentum),
            "ADX_15M_USDT" | "adx_15m" => Ok(StrategyPreset::Adx15m),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

impl fmt::Display for StrategyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyPreset::AdxMomentum => write!(f, "ADXMomentum"),
            StrategyPreset::Adx15m => write!(f, "ADX_15M_USDT"),
        }
    }
}
