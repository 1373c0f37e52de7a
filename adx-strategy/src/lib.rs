//! ADX-Strategy: directional-movement signal engine for Freqtrade-style hosts
//!
//! Turns a candle series into ADX, +DI/-DI, parabolic SAR and momentum
//! columns, then into `enter_long` / `exit_long` flags using either static
//! thresholds or DI crossovers. Indicator primitives build on
//! [ta-rs](https://github.com/greyblake/ta-rs).
//!
//! # Features
//!
//! - **Indicators**: TA-Lib compatible ADX, DI, SAR and MOM with a
//!   whole-series fallback when computation faults
//! - **Signal Rules**: threshold and crossover policies over resolved hyperparameters
//! - **Configuration**: strategy presets, ROI tables, hyperopt result files
//!
//! # Example
//!
//! ```no_run
//! use adx_strategy::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let settings = StrategySettings::from_env()?;
//!     let strategy = AdxStrategy::new(settings.config, &settings.params)?;
//!     let candles = CandleSeries::new();
//!     let analyzed = strategy.analyze(&candles)?;
//!     println!("{} entries", analyzed.signals.entry_count());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod strategy;

// Re-export commonly used types
pub mod prelude {
    pub use crate::config::*;
    pub use crate::data::*;
    pub use crate::error::*;
    pub use crate::indicators::*;
    pub use crate::strategy::*;

    pub use anyhow::{Context, Result};
}

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
