//! Environment-driven settings
//!
//! Reads `.env` (if present) and then:
//! - `ADX_STRATEGY`: preset name, defaults to `ADXMomentum`
//! - `ADX_STRATEGY_CONFIG`: optional JSON config replacing the preset's
//! - `ADX_STRATEGY_PARAMS`: optional hyperopt result file

use crate::config::{HyperoptResult, ParameterSet, StrategyConfig};
use crate::strategy::StrategyPreset;
use crate::Result;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::info;

/// Configuration plus parameter values, ready to build a strategy
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySettings {
    pub config: StrategyConfig,
    pub params: ParameterSet,
}

impl StrategySettings {
    /// Resolve settings from explicit sources
    pub fn load(
        preset: StrategyPreset,
        config_path: Option<PathBuf>,
        params_path: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => StrategyConfig::from_file(&path)?,
            None => preset.config(),
        };

        let params = match params_path {
            Some(path) => {
                let result = HyperoptResult::from_file(&path)?;
                config.apply_hyperopt(&result);
                info!(
                    strategy = %result.strategy_name,
                    path = %path.display(),
                    "Loaded hyperopt parameters"
                );
                result.parameter_set()
            }
            None => ParameterSet::new(),
        };

        Ok(Self { config, params })
    }

    /// Resolve settings from environment variables
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let preset: StrategyPreset = std::env::var("ADX_STRATEGY")
            .unwrap_or_else(|_| "ADXMomentum".to_string())
            .parse()?;
        let config_path = std::env::var("ADX_STRATEGY_CONFIG").ok().map(PathBuf::from);
        let params_path = std::env::var("ADX_STRATEGY_PARAMS").ok().map(PathBuf::from);

        Self::load(preset, config_path, params_path)
    }
}
