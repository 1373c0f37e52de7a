//! Hyperparameter declarations and values
//!
//! A strategy declares each tunable threshold with a valid range and a
//! default. The host (or an optimiser run) supplies a [`ParameterSet`];
//! resolution substitutes the default for any absent name.

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A supplied parameter value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Int(i64),
    Decimal(f64),
}

impl ParameterValue {
    pub fn as_f64(self) -> f64 {
        match self {
            ParameterValue::Int(v) => v as f64,
            ParameterValue::Decimal(v) => v,
        }
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Int(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Int(value.into())
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Decimal(value)
    }
}

/// Named parameter values, read once when a strategy is built
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterSet {
    /// Create an empty set (every parameter resolves to its default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<ParameterValue> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Merge `other` into this set; `other` wins on conflicts.
    pub fn extend(&mut self, other: ParameterSet) {
        self.values.extend(other.values);
    }
}

/// Integer parameter with an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntParameter {
    pub name: &'static str,
    pub low: i64,
    pub high: i64,
    pub default: i64,
}

impl IntParameter {
    pub const fn new(name: &'static str, low: i64, high: i64, default: i64) -> Self {
        Self {
            name,
            low,
            high,
            default,
        }
    }

    /// Value from `params`, or the default when absent
    pub fn resolve(&self, params: &ParameterSet) -> Result<f64, ParameterError> {
        let Some(value) = params.get(self.name) else {
            return Ok(self.default as f64);
        };

        let value = value.as_f64();
        if value.fract() != 0.0 {
            return Err(ParameterError::NotAnInteger {
                name: self.name.to_string(),
                value,
            });
        }
        if value < self.low as f64 || value > self.high as f64 {
            return Err(ParameterError::OutOfRange {
                name: self.name.to_string(),
                value,
                low: self.low as f64,
                high: self.high as f64,
            });
        }
        Ok(value)
    }
}

/// Log supplied names no declaration consumes.
pub(crate) fn report_unknown(params: &ParameterSet, declared: &[IntParameter]) {
    for name in params.names() {
        if !declared.iter().any(|p| p.name == name) {
            debug!(parameter = name, "Ignoring undeclared parameter");
        }
    }
}
