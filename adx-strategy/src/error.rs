//! Error types
//!
//! Only [`DataError`] ever reaches the host from `Strategy::analyze`.
//! Indicator faults are absorbed by the deriver's fallback and parameter
//! faults surface once, when a strategy is built.

use thiserror::Error;

/// Structural problems with the candle series handed in by the host
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("candle timestamps must be strictly increasing (violated at index {index})")]
    NonMonotonicTimestamp { index: usize },
}

/// Faults raised while computing indicator columns
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("invalid parameter for {indicator}: {reason}")]
    InvalidParameter {
        indicator: &'static str,
        reason: String,
    },
    #[error("non-finite {field} value at index {index}")]
    NonFiniteInput { index: usize, field: &'static str },
    #[error("high is below low at index {index}")]
    InvertedRange { index: usize },
}

/// Problems resolving hyperparameter values against their declarations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("parameter {name} = {value} is outside [{low}, {high}]")]
    OutOfRange {
        name: String,
        value: f64,
        low: f64,
        high: f64,
    },
    #[error("parameter {name} expects an integer, got {value}")]
    NotAnInteger { name: String, value: f64 },
}

/// Strategy configuration problems
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown strategy preset: {0}")]
    UnknownPreset(String),
    #[error("invalid timeframe: {0}")]
    InvalidTimeframe(String),
    #[error("short signals are not supported")]
    ShortingUnsupported,
    #[error("stoploss must be in (-1, 0), got {0}")]
    InvalidStoploss(f64),
    #[error("minimal ROI table must not be empty")]
    EmptyRoiTable,
    #[error("minimal ROI at {minutes}m must be non-negative, got {value}")]
    NegativeRoi { minutes: u32, value: f64 },
}

/// Any error a strategy can produce
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Indicator(#[from] IndicatorError),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
