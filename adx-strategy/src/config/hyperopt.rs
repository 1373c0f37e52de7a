//! Optimiser result files
//!
//! Parameter values chosen by a hyperopt run are exported as JSON next to
//! the strategy. Only the buy/sell spaces, ROI and stoploss are read;
//! other spaces are ignored.

use crate::config::{ParameterSet, RoiTable};
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoplossSpace {
    pub stoploss: f64,
}

/// Parameter spaces of an optimiser result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HyperoptSpaces {
    #[serde(default)]
    pub buy: Option<ParameterSet>,
    #[serde(default)]
    pub sell: Option<ParameterSet>,
    #[serde(default)]
    pub roi: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub stoploss: Option<StoplossSpace>,
}

/// Exported optimiser result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperoptResult {
    pub strategy_name: String,
    pub params: HyperoptSpaces,
}

impl HyperoptResult {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse hyperopt result")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read hyperopt result {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid hyperopt result {}", path.display()))
    }

    /// Buy and sell spaces merged into one set
    pub fn parameter_set(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        for space in [&self.params.buy, &self.params.sell].into_iter().flatten() {
            params.extend(space.clone());
        }
        params
    }

    /// ROI space; entries whose key is not a minute count are skipped
    pub fn roi_table(&self) -> Option<RoiTable> {
        let roi = self.params.roi.as_ref()?;
        Some(RoiTable::new(roi.iter().filter_map(|(minutes, value)| {
            minutes.parse::<u32>().ok().map(|m| (m, *value))
        })))
    }

    pub fn stoploss(&self) -> Option<f64> {
        self.params.stoploss.as_ref().map(|s| s.stoploss)
    }
}
