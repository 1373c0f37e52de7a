//! ADX strategy implementation

use crate::config::{ParameterSet, StrategyConfig};
use crate::data::CandleSeries;
use crate::error::StrategyError;
use crate::indicators::{IndicatorDeriver, IndicatorFrame};
use crate::strategy::{SignalRuleEvaluator, Strategy, StrategyValidator};
use tracing::info;

/// Trend-strength strategy over ADX, +DI/-DI, SAR and momentum.
///
/// The rule family comes from `config.policy`; thresholds are resolved from
/// the parameter set at construction.
#[derive(Debug, Clone)]
pub struct AdxStrategy {
    config: StrategyConfig,
    deriver: IndicatorDeriver,
    evaluator: SignalRuleEvaluator,
}

impl AdxStrategy {
    /// Create new ADX strategy
    pub fn new(config: StrategyConfig, params: &ParameterSet) -> Result<Self, StrategyError> {
        StrategyValidator::validate_config(&config)?;
        let evaluator = SignalRuleEvaluator::new(config.policy, params)?;

        info!(
            strategy = %config.name,
            timeframe = %config.timeframe,
            policy = ?config.policy,
            rules = ?evaluator.rules(),
            "Initialized ADX strategy"
        );

        Ok(Self {
            deriver: IndicatorDeriver::new(config.indicators.clone()),
            config,
            evaluator,
        })
    }

    pub fn evaluator(&self) -> &SignalRuleEvaluator {
        &self.evaluator
    }
}

impl Strategy for AdxStrategy {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn config(&self) -> &StrategyConfig {
        &self.config
    }

    fn populate_indicators(&self, candles: &CandleSeries) -> IndicatorFrame {
        self.deriver.derive(candles)
    }

    fn populate_entry_trend(&self, indicators: &IndicatorFrame) -> Vec<bool> {
        self.evaluator.entries(indicators)
    }

    fn populate_exit_trend(&self, indicators: &IndicatorFrame) -> Vec<bool> {
        self.evaluator.exits(indicators)
    }
}
