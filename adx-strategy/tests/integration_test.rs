//! Integration tests for adx-strategy

use adx_strategy::config::{IndicatorConfig, ParameterSet, StrategyConfig};
use adx_strategy::data::{Candle, CandleSeries};
use adx_strategy::indicators::{IndicatorDeriver, IndicatorFrame};
use adx_strategy::strategy::{
    crossed_above, AdxStrategy, SignalPolicy, SignalRuleEvaluator, Strategy, StrategyPreset,
};
use chrono::{Duration, TimeZone, Utc};

/// Build candles from closes with a fixed half-range around each close
fn candles_from_closes(closes: &[f64], half_range: f64) -> CandleSeries {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                close,
                close + half_range,
                close - half_range,
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

/// Alternating bars: odd rows rise by `up`, even rows fall by `down`
fn zigzag(count: usize, start: f64, up: f64, down: f64) -> Vec<f64> {
    let mut price = start;
    (0..count)
        .map(|i| {
            if i > 0 {
                price += if i % 2 == 1 { up } else { -down };
            }
            price
        })
        .collect()
}

/// Steady move by `first` per row through row `turn`, then by `second`
fn turning(count: usize, start: f64, turn: usize, first: f64, second: f64) -> Vec<f64> {
    let mut price = start;
    (0..count)
        .map(|i| {
            if i > 0 {
                price += if i <= turn { first } else { second };
            }
            price
        })
        .collect()
}

fn strategy(config: StrategyConfig) -> AdxStrategy {
    AdxStrategy::new(config, &ParameterSet::new()).unwrap()
}

fn bits(column: &[f64]) -> Vec<u64> {
    column.iter().map(|v| v.to_bits()).collect()
}

#[test]
fn test_output_has_same_length_and_full_rows_after_warmup() {
    let candles = candles_from_closes(&zigzag(80, 100.0, 3.0, 1.5), 0.25);
    let strategy = strategy(StrategyConfig::adx_momentum());
    let analyzed = strategy.analyze(&candles).unwrap();

    assert_eq!(analyzed.indicators.len(), 80);
    assert_eq!(analyzed.signals.len(), 80);
    let startup = strategy.config().startup_candle_count;
    assert!((startup..80).all(|i| analyzed.indicators.is_complete(i)));
}

/// Strictly rising closes with a widening range whose wicks alternate sides
fn widening_uptrend(count: usize) -> CandleSeries {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64;
            let width = 1.0 + 0.3 * i as f64;
            let (high, low) = if i % 2 == 1 {
                (close + 2.0 * width, close - 0.2 * width)
            } else {
                (close + 0.2 * width, close - 1.5 * width)
            };
            Candle::new(
                close,
                high,
                low,
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

#[test]
fn test_monotonic_uptrend_enters_only_after_warmup() {
    let candles = widening_uptrend(50);
    let strategy = strategy(StrategyConfig::adx_momentum());
    let analyzed = strategy.analyze(&candles).unwrap();
    let startup = strategy.config().startup_candle_count;

    let entries: Vec<usize> = (0..50).filter(|&i| analyzed.signals.enter_long[i]).collect();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|&i| i >= startup));
    assert_eq!(entries, (30..=45).collect::<Vec<_>>());
    assert_eq!(analyzed.signals.exit_count(), 0);

    // The rule already holds from row 27; warm-up clearing removes those rows
    let raw = SignalRuleEvaluator::new(SignalPolicy::Threshold, &ParameterSet::new())
        .unwrap()
        .entries(&analyzed.indicators);
    assert!(raw[27] && raw[29]);

    let f = &analyzed.indicators;
    assert!((f.adx[40] - 26.4175).abs() < 1e-3);
    assert!((f.plus_di[40] - 48.0880).abs() < 1e-3);
    assert!((f.minus_di[40] - 31.3448).abs() < 1e-3);
    assert_eq!(f.mom[40], 14.0);
}

#[test]
fn test_threshold_entries_only_after_startup() {
    // Choppy uptrend: both DIs stay above 25 with +DI well ahead
    let candles = candles_from_closes(&zigzag(50, 100.0, 3.0, 1.5), 0.25);
    let strategy = strategy(StrategyConfig::adx_momentum());
    let analyzed = strategy.analyze(&candles).unwrap();
    let startup = strategy.config().startup_candle_count;

    assert!(analyzed.signals.enter_long[..startup].iter().all(|&e| !e));
    assert!(analyzed.signals.enter_long[startup..].iter().all(|&e| e));
    assert_eq!(analyzed.signals.exit_count(), 0);
}

#[test]
fn test_undefined_rows_are_never_flagged() {
    let candles = candles_from_closes(&zigzag(50, 100.0, 3.0, 1.5), 0.25);
    let frame = IndicatorDeriver::default().derive(&candles);
    let evaluator = SignalRuleEvaluator::new(SignalPolicy::Threshold, &ParameterSet::new()).unwrap();
    let entries = evaluator.entries(&frame);

    // ADX is first defined at row 27; the rule already passes there
    assert!(entries[..27].iter().all(|&e| !e));
    assert!(entries[27]);
}

#[test]
fn test_threshold_exits_in_choppy_downtrend() {
    let candles = candles_from_closes(&zigzag(50, 200.0, 1.5, 3.0), 0.25);
    let analyzed = strategy(StrategyConfig::adx_momentum()).analyze(&candles).unwrap();

    assert_eq!(analyzed.signals.entry_count(), 0);
    assert_eq!(analyzed.signals.exit_count(), 20);
    assert!(analyzed.signals.exit_long[30]);
}

#[test]
fn test_crossover_entry_when_trend_turns_up() {
    let candles = candles_from_closes(&turning(50, 100.0, 30, -1.0, 2.0), 1.0);
    let analyzed = strategy(StrategyConfig::adx_15m()).analyze(&candles).unwrap();

    let entries: Vec<usize> = (0..50).filter(|&i| analyzed.signals.enter_long[i]).collect();
    assert_eq!(entries, vec![40]);
    assert_eq!(analyzed.signals.exit_count(), 0);

    let f = &analyzed.indicators;
    assert!(f.plus_di[40] > f.minus_di[40]);
    assert!(f.plus_di[39] <= f.minus_di[39]);
}

#[test]
fn test_crossover_exit_when_trend_turns_down() {
    let candles = candles_from_closes(&turning(50, 100.0, 30, 1.0, -2.0), 1.0);
    let analyzed = strategy(StrategyConfig::adx_15m()).analyze(&candles).unwrap();

    let exits: Vec<usize> = (0..50).filter(|&i| analyzed.signals.exit_long[i]).collect();
    assert_eq!(exits, vec![40]);
    assert_eq!(analyzed.signals.entry_count(), 0);
}

#[test]
fn test_crossover_never_fires_on_first_row() {
    let candles = candles_from_closes(&turning(40, 100.0, 20, -1.0, 2.0), 1.0);
    let frame = IndicatorDeriver::default().derive(&candles);

    assert!(!crossed_above(&frame.plus_di, &frame.minus_di)[0]);
    assert!(!crossed_above(&frame.minus_di, &frame.plus_di)[0]);
    // Even when the first row is "above"
    assert!(!crossed_above(&[2.0, 3.0], &[1.0, 1.0])[0]);
}

#[test]
fn test_forced_fault_uses_fallback_for_whole_series() {
    let closes = zigzag(50, 100.0, 3.0, 1.5);
    let candles = candles_from_closes(&closes, 0.25);
    let mut config = StrategyConfig::adx_momentum();
    config.indicators = IndicatorConfig {
        adx_period: 0,
        ..IndicatorConfig::default()
    };

    let analyzed = strategy(config).analyze(&candles).unwrap();
    let f = &analyzed.indicators;

    assert!(f.fallback);
    assert_eq!(f.len(), 50);
    assert!(f.adx.iter().all(|&v| v == 0.0));
    assert!(f.plus_di.iter().all(|&v| v == 0.0));
    assert!(f.minus_di.iter().all(|&v| v == 0.0));
    assert_eq!(f.sar, closes);
    assert!(f.mom[..14].iter().all(|v| v.is_nan()));
    for i in 14..50 {
        let expected = 100.0 * (closes[i] / closes[i - 14] - 1.0);
        assert!((f.mom[i] - expected).abs() < 1e-9, "row {}", i);
    }
    // Zeroed ADX can never clear a threshold
    assert_eq!(analyzed.signals.entry_count(), 0);
}

#[test]
fn test_malformed_prices_fall_back_instead_of_failing() {
    let mut rows = candles_from_closes(&zigzag(40, 100.0, 3.0, 1.5), 0.25)
        .candles()
        .to_vec();
    rows[10].high = f64::INFINITY;
    let analyzed = strategy(StrategyConfig::adx_15m())
        .analyze(&CandleSeries::from_vec(rows))
        .unwrap();

    assert!(analyzed.indicators.fallback);
    assert_eq!(analyzed.len(), 40);
}

#[test]
fn test_analysis_is_deterministic() {
    let candles = candles_from_closes(&zigzag(60, 100.0, 3.0, 1.5), 0.25);
    for preset in [StrategyPreset::AdxMomentum, StrategyPreset::Adx15m] {
        let strategy = preset.build(&ParameterSet::new()).unwrap();
        let first = strategy.analyze(&candles).unwrap();
        let second = strategy.analyze(&candles).unwrap();

        let columns = |f: &IndicatorFrame| {
            vec![bits(&f.adx), bits(&f.plus_di), bits(&f.minus_di), bits(&f.sar), bits(&f.mom)]
        };
        assert_eq!(columns(&first.indicators), columns(&second.indicators));
        assert_eq!(first.signals, second.signals);
    }
}

#[test]
fn test_raising_entry_threshold_never_adds_entries() {
    let candles = candles_from_closes(&zigzag(60, 100.0, 3.0, 1.5), 0.25);
    let mut previous: Option<Vec<bool>> = None;

    for threshold in 10..=50 {
        let params = ParameterSet::new().with("adx_threshold", threshold);
        let strategy = AdxStrategy::new(StrategyConfig::adx_momentum(), &params).unwrap();
        let entries = strategy.analyze(&candles).unwrap().signals.enter_long;

        if let Some(prev) = &previous {
            for (now, before) in entries.iter().zip(prev) {
                assert!(!now || *before, "entry appeared at threshold {}", threshold);
            }
        }
        previous = Some(entries);
    }
    assert_eq!(previous.map(|e| e.iter().filter(|&&x| x).count()), Some(0));
}

#[test]
fn test_empty_parameter_set_uses_documented_defaults() {
    let frame = IndicatorFrame {
        adx: vec![f64::NAN, 30.0],
        plus_di: vec![f64::NAN, 35.0],
        minus_di: vec![f64::NAN, 30.0],
        sar: vec![f64::NAN, 100.0],
        mom: vec![f64::NAN, 1.0],
        fallback: false,
    };
    let evaluator = SignalRuleEvaluator::new(SignalPolicy::Threshold, &ParameterSet::new()).unwrap();
    assert_eq!(evaluator.entries(&frame), vec![false, true]);
}
