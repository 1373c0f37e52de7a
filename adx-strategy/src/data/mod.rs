//! Candle data module
//!
//! OHLCV candles and the time-ordered series the strategy consumes.

pub mod candle;

pub use candle::*;
