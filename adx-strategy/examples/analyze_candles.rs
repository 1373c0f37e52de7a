//! Example: run the configured ADX strategy over a candle file
//!
//! Usage: `cargo run --example analyze_candles -- candles.json`
//!
//! Without a path a synthetic series is analyzed. Strategy selection follows
//! `ADX_STRATEGY`, `ADX_STRATEGY_CONFIG` and `ADX_STRATEGY_PARAMS`.

use ::adx_strategy::logging::init_tracing;
use ::adx_strategy::prelude::*;
use chrono::{Duration, TimeZone, Utc};
use tracing::info;

fn synthetic_candles(count: usize) -> CandleSeries {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.15).sin() * 8.0 + i as f64 * 0.05;
            Candle::new(
                close - 0.2,
                close + 0.8,
                close - 0.8,
                close,
                1000.0,
                base + Duration::hours(i as i64),
                "BTC/USDT".to_string(),
                "1h".to_string(),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

fn main() -> Result<()> {
    init_tracing();

    let settings = StrategySettings::from_env()?;
    let strategy = AdxStrategy::new(settings.config, &settings.params)?;

    let candles = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read candles from {}", path))?;
            serde_json::from_str::<CandleSeries>(&raw)
                .with_context(|| format!("Failed to parse candles from {}", path))?
        }
        None => synthetic_candles(500),
    };

    let analyzed = strategy.analyze(&candles)?;
    for (index, candle) in candles.iter().enumerate() {
        if let Some((enter, exit)) = analyzed.signals.row(index) {
            if enter == 1 || exit == 1 {
                info!(
                    timestamp = %candle.timestamp,
                    close = candle.close,
                    adx = analyzed.indicators.adx[index],
                    plus_di = analyzed.indicators.plus_di[index],
                    minus_di = analyzed.indicators.minus_di[index],
                    enter_long = enter,
                    exit_long = exit,
                    "Signal"
                );
            }
        }
    }

    info!(
        strategy = strategy.name(),
        rows = analyzed.len(),
        entries = analyzed.signals.entry_count(),
        exits = analyzed.signals.exit_count(),
        fallback = analyzed.indicators.fallback,
        "Analysis complete"
    );
    Ok(())
}
