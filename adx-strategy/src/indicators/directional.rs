//! Directional movement indicators: +DI, -DI and ADX
//!
//! Smoothing follows Wilder's running sums, matching TA-Lib's
//! `PLUS_DI`/`MINUS_DI`/`ADX` outputs: DI values first appear at index
//! `period`, ADX at index `2 * period - 1`.

use crate::data::Candle;
use crate::error::IndicatorError;
use crate::indicators::{run_over, Indicator};
use ta::indicators::TrueRange;
use ta::Next;

const ZERO_EPSILON: f64 = 1e-8;

fn is_zero(value: f64) -> bool {
    value.abs() < ZERO_EPSILON
}

fn check_period(indicator: &'static str, period: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter {
            indicator,
            reason: "period must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// +DM and -DM between two consecutive bars. At most one is non-zero.
pub fn directional_movement(prev: &Candle, current: &Candle) -> (f64, f64) {
    movement((prev.high, prev.low), current)
}

fn movement((prev_high, prev_low): (f64, f64), current: &Candle) -> (f64, f64) {
    let up = current.high - prev_high;
    let down = prev_low - current.low;
    let plus = if up > 0.0 && up > down { up } else { 0.0 };
    let minus = if down > 0.0 && down > up { down } else { 0.0 };
    (plus, minus)
}

/// Wilder running sums of +DM, -DM and true range.
#[derive(Debug)]
struct WilderSums {
    period: usize,
    true_range: TrueRange,
    prev: Option<(f64, f64)>,
    bars: usize,
    plus_dm: f64,
    minus_dm: f64,
    tr: f64,
}

impl WilderSums {
    fn new(period: usize) -> Self {
        Self {
            period,
            true_range: TrueRange::new(),
            prev: None,
            bars: 0,
            plus_dm: 0.0,
            minus_dm: 0.0,
            tr: 0.0,
        }
    }

    /// Push a bar; returns its index once the sums are fully smoothed
    /// (index >= period), `None` while still seeding.
    fn push(&mut self, candle: &Candle) -> Option<usize> {
        let tr = self.true_range.next(candle);
        let index = self.bars;
        self.bars += 1;

        let prev = self.prev.replace((candle.high, candle.low))?;
        let (plus, minus) = movement(prev, candle);
        let n = self.period as f64;

        if index < self.period {
            self.plus_dm += plus;
            self.minus_dm += minus;
            self.tr += tr;
            return None;
        }

        self.plus_dm = self.plus_dm - self.plus_dm / n + plus;
        self.minus_dm = self.minus_dm - self.minus_dm / n + minus;
        self.tr = self.tr - self.tr / n + tr;
        Some(index)
    }

    /// (+DI, -DI) for the current sums; both 0 on a flat true range
    fn directional_indices(&self) -> (f64, f64) {
        if is_zero(self.tr) {
            return (0.0, 0.0);
        }
        (100.0 * self.plus_dm / self.tr, 100.0 * self.minus_dm / self.tr)
    }
}

/// +DI / -DI pair sharing one set of running sums
#[derive(Debug)]
pub struct DirectionalIndicators {
    sums: WilderSums,
    last_output: Option<(f64, f64)>,
}

impl DirectionalIndicators {
    /// Create new +DI/-DI indicator
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        check_period("DI", period)?;
        Ok(Self {
            sums: WilderSums::new(period),
            last_output: None,
        })
    }

    /// Get period
    pub fn period(&self) -> usize {
        self.sums.period
    }

    /// Get +DI
    pub fn plus_di(&self) -> Option<f64> {
        self.last_output.map(|(plus, _)| plus)
    }

    /// Get -DI
    pub fn minus_di(&self) -> Option<f64> {
        self.last_output.map(|(_, minus)| minus)
    }
}

impl Indicator for DirectionalIndicators {
    fn name(&self) -> &str {
        "DI"
    }

    fn update(&mut self, candle: &Candle) {
        if self.sums.push(candle).is_some() {
            self.last_output = Some(self.sums.directional_indices());
        }
    }

    fn value(&self) -> Option<f64> {
        self.plus_di()
    }

    fn is_ready(&self) -> bool {
        self.last_output.is_some()
    }
}

/// ADX (Average Directional Index)
#[derive(Debug)]
pub struct ADX {
    sums: WilderSums,
    dx_sum: f64,
    last_value: Option<f64>,
}

impl ADX {
    /// Create new ADX indicator
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        check_period("ADX", period)?;
        Ok(Self {
            sums: WilderSums::new(period),
            dx_sum: 0.0,
            last_value: None,
        })
    }

    /// Get ADX period
    pub fn period(&self) -> usize {
        self.sums.period
    }

    /// Directional index for the current sums, if defined
    fn dx(&self) -> Option<f64> {
        if is_zero(self.sums.tr) {
            return None;
        }
        let (plus, minus) = self.sums.directional_indices();
        let total = plus + minus;
        if is_zero(total) {
            return None;
        }
        Some(100.0 * (minus - plus).abs() / total)
    }
}

impl Indicator for ADX {
    fn name(&self) -> &str {
        "ADX"
    }

    fn update(&mut self, candle: &Candle) {
        let Some(index) = self.sums.push(candle) else {
            return;
        };
        let period = self.sums.period;
        let dx = self.dx();

        match self.last_value {
            // Seeding: average of the first `period` DX values
            None => {
                self.dx_sum += dx.unwrap_or(0.0);
                if index == 2 * period - 1 {
                    self.last_value = Some(self.dx_sum / period as f64);
                }
            }
            Some(adx) => {
                if let Some(dx) = dx {
                    let n = period as f64;
                    self.last_value = Some((adx * (n - 1.0) + dx) / n);
                }
            }
        }
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.last_value.is_some()
    }
}

/// Calculate ADX over a series of candles
pub fn calculate_adx(candles: &[Candle], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    let mut adx = ADX::new(period)?;
    Ok(run_over(&mut adx, candles))
}

/// Calculate (+DI, -DI) over a series of candles
pub fn calculate_directional(
    candles: &[Candle],
    period: usize,
) -> Result<(Vec<Option<f64>>, Vec<Option<f64>>), IndicatorError> {
    let mut di = DirectionalIndicators::new(period)?;
    let mut plus = Vec::with_capacity(candles.len());
    let mut minus = Vec::with_capacity(candles.len());

    for candle in candles {
        di.update(candle);
        plus.push(di.plus_di());
        minus.push(di.minus_di());
    }

    Ok((plus, minus))
}
