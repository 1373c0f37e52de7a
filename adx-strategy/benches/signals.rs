//! Criterion benchmarks for indicator derivation and signal evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use adx_strategy::config::ParameterSet;
use adx_strategy::data::{Candle, CandleSeries};
use adx_strategy::indicators::IndicatorDeriver;
use adx_strategy::strategy::{Strategy, StrategyPreset};
use chrono::{Duration, TimeZone, Utc};

fn make_candles(n: usize) -> CandleSeries {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Candle::new(
                close - 0.3,
                close + 1.5,
                close - 1.5,
                close,
                1000.0,
                base + Duration::minutes(15 * i as i64),
                "BTC/USDT".to_string(),
                "15m".to_string(),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    let deriver = IndicatorDeriver::default();
    for n in [500, 5_000] {
        let candles = make_candles(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &candles, |b, candles| {
            b.iter(|| deriver.derive(black_box(candles)))
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let candles = make_candles(5_000);
    for preset in [StrategyPreset::AdxMomentum, StrategyPreset::Adx15m] {
        let strategy = preset.build(&ParameterSet::new()).unwrap();
        group.bench_function(preset.to_string(), |b| {
            b.iter(|| strategy.analyze(black_box(&candles)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_derive, bench_analyze);
criterion_main!(benches);
