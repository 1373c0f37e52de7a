//! Strategy validation

use crate::config::StrategyConfig;
use crate::error::ConfigError;
use tracing::warn;

/// Strategy validator
pub struct StrategyValidator;

impl StrategyValidator {
    /// Validate strategy configuration
    pub fn validate_config(config: &StrategyConfig) -> Result<(), ConfigError> {
        if config.can_short {
            return Err(ConfigError::ShortingUnsupported);
        }

        if !(config.stoploss > -1.0 && config.stoploss < 0.0) {
            return Err(ConfigError::InvalidStoploss(config.stoploss));
        }

        if config.minimal_roi.is_empty() {
            return Err(ConfigError::EmptyRoiTable);
        }
        if let Some((minutes, value)) = config.minimal_roi.entries().find(|(_, roi)| !(*roi >= 0.0)) {
            return Err(ConfigError::NegativeRoi { minutes, value });
        }

        config.timeframe_duration()?;

        let lookback = config.indicators.lookback();
        if config.startup_candle_count < lookback {
            warn!(
                strategy = %config.name,
                startup_candle_count = config.startup_candle_count,
                lookback,
                "Startup candle count is shorter than the indicator warm-up"
            );
        }

        Ok(())
    }
}
