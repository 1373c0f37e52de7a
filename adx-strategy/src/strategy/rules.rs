//! Entry / exit rules over the directional-movement columns
//!
//! Two rule families are supported:
//! - [`SignalPolicy::Threshold`]: static ADX/DI thresholds gated by momentum sign.
//! - [`SignalPolicy::Crossover`]: ADX/DI thresholds gated by a DI crossover.
//!
//! Thresholds are resolved from a [`ParameterSet`] once, when the evaluator
//! is built. Every comparison is strict, so undefined (`NaN`) rows never pass.

use crate::config::{report_unknown, IntParameter, ParameterSet};
use crate::error::ParameterError;
use crate::indicators::IndicatorFrame;
use crate::strategy::{crossed_above, SignalFrame};
use serde::{Deserialize, Serialize};

/// Rule family used to flag entries and exits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalPolicy {
    Threshold,
    Crossover,
}

impl SignalPolicy {
    /// Parameters this policy reads
    pub fn parameters(&self) -> &'static [IntParameter] {
        match self {
            SignalPolicy::Threshold => &ThresholdRules::PARAMETERS,
            SignalPolicy::Crossover => &CrossoverRules::PARAMETERS,
        }
    }
}

/// Static-threshold rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRules {
    /// Entry: ADX and -DI must both exceed this
    pub adx_threshold: f64,
    pub exit_adx_threshold: f64,
    pub exit_minus_di_threshold: f64,
}

impl ThresholdRules {
    pub const PARAMETERS: [IntParameter; 3] = [
        IntParameter::new("adx_threshold", 10, 50, 25),
        IntParameter::new("exit_adx_threshold", 10, 50, 25),
        IntParameter::new("exit_minus_di_threshold", 10, 50, 25),
    ];

    pub fn resolve(params: &ParameterSet) -> Result<Self, ParameterError> {
        let [adx, exit_adx, exit_minus_di] = &Self::PARAMETERS;
        Ok(Self {
            adx_threshold: adx.resolve(params)?,
            exit_adx_threshold: exit_adx.resolve(params)?,
            exit_minus_di_threshold: exit_minus_di.resolve(params)?,
        })
    }

    fn enters(&self, f: &IndicatorFrame, i: usize) -> bool {
        f.adx[i] > self.adx_threshold
            && f.mom[i] > 0.0
            && f.minus_di[i] > self.adx_threshold
            && f.plus_di[i] > f.minus_di[i]
    }

    fn exits(&self, f: &IndicatorFrame, i: usize) -> bool {
        f.adx[i] > self.exit_adx_threshold
            && f.mom[i] < 0.0
            && f.minus_di[i] > self.exit_minus_di_threshold
            && f.plus_di[i] < f.minus_di[i]
    }
}

/// Crossover rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossoverRules {
    pub adx_buy: f64,
    pub minus_di_buy: f64,
    pub plus_di_buy: f64,
    pub adx_sell: f64,
    pub minus_di_sell: f64,
    pub plus_di_sell: f64,
}

impl CrossoverRules {
    pub const PARAMETERS: [IntParameter; 6] = [
        IntParameter::new("adx_buy_threshold", 10, 25, 16),
        IntParameter::new("minus_di_buy_threshold", 2, 10, 4),
        IntParameter::new("plus_di_buy_threshold", 15, 30, 20),
        IntParameter::new("adx_sell_threshold", 35, 55, 43),
        IntParameter::new("minus_di_sell_threshold", 15, 35, 22),
        IntParameter::new("plus_di_sell_threshold", 15, 30, 20),
    ];

    pub fn resolve(params: &ParameterSet) -> Result<Self, ParameterError> {
        let [adx_buy, minus_di_buy, plus_di_buy, adx_sell, minus_di_sell, plus_di_sell] =
            &Self::PARAMETERS;
        Ok(Self {
            adx_buy: adx_buy.resolve(params)?,
            minus_di_buy: minus_di_buy.resolve(params)?,
            plus_di_buy: plus_di_buy.resolve(params)?,
            adx_sell: adx_sell.resolve(params)?,
            minus_di_sell: minus_di_sell.resolve(params)?,
            plus_di_sell: plus_di_sell.resolve(params)?,
        })
    }
}

/// Resolved rule set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rules {
    Threshold(ThresholdRules),
    Crossover(CrossoverRules),
}

/// Pure evaluator: indicator frame in, signal flags out
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRuleEvaluator {
    rules: Rules,
}

impl SignalRuleEvaluator {
    /// Resolve the policy's thresholds from `params`
    pub fn new(policy: SignalPolicy, params: &ParameterSet) -> Result<Self, ParameterError> {
        report_unknown(params, policy.parameters());
        let rules = match policy {
            SignalPolicy::Threshold => Rules::Threshold(ThresholdRules::resolve(params)?),
            SignalPolicy::Crossover => Rules::Crossover(CrossoverRules::resolve(params)?),
        };
        Ok(Self { rules })
    }

    pub fn policy(&self) -> SignalPolicy {
        match self.rules {
            Rules::Threshold(_) => SignalPolicy::Threshold,
            Rules::Crossover(_) => SignalPolicy::Crossover,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// `enter_long` column
    pub fn entries(&self, frame: &IndicatorFrame) -> Vec<bool> {
        match &self.rules {
            Rules::Threshold(rules) => (0..frame.len()).map(|i| rules.enters(frame, i)).collect(),
            Rules::Crossover(rules) => crossed_above(&frame.plus_di, &frame.minus_di)
                .into_iter()
                .take(frame.len())
                .enumerate()
                .map(|(i, crossed)| {
                    crossed
                        && frame.adx[i] > rules.adx_buy
                        && frame.minus_di[i] > rules.minus_di_buy
                        && frame.plus_di[i] > rules.plus_di_buy
                })
                .collect(),
        }
    }

    /// `exit_long` column
    pub fn exits(&self, frame: &IndicatorFrame) -> Vec<bool> {
        match &self.rules {
            Rules::Threshold(rules) => (0..frame.len()).map(|i| rules.exits(frame, i)).collect(),
            Rules::Crossover(rules) => crossed_above(&frame.minus_di, &frame.plus_di)
                .into_iter()
                .take(frame.len())
                .enumerate()
                .map(|(i, crossed)| {
                    crossed
                        && frame.adx[i] > rules.adx_sell
                        && frame.minus_di[i] > rules.minus_di_sell
                        && frame.plus_di[i] > rules.plus_di_sell
                })
                .collect(),
        }
    }

    /// Both signal columns
    pub fn evaluate(&self, frame: &IndicatorFrame) -> SignalFrame {
        SignalFrame {
            enter_long: self.entries(frame),
            exit_long: self.exits(frame),
        }
    }
}
