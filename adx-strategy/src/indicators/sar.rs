//! Parabolic SAR (stop and reverse) indicator

use crate::data::Candle;
use crate::error::IndicatorError;
use crate::indicators::{run_over, Indicator};

/// Default acceleration factor step
pub const DEFAULT_SAR_ACCELERATION: f64 = 0.02;
/// Default acceleration factor ceiling
pub const DEFAULT_SAR_MAXIMUM: f64 = 0.2;

#[derive(Debug, Clone, Copy)]
struct SarState {
    is_long: bool,
    sar: f64,
    extreme_point: f64,
    acceleration: f64,
    prev_high: f64,
    prev_low: f64,
}

/// Parabolic SAR with TA-Lib's seeding: the trend direction is taken from
/// the directional movement of the first two bars, and the first value is
/// produced on the second bar.
#[derive(Debug)]
pub struct ParabolicSar {
    acceleration: f64,
    maximum: f64,
    first_bar: Option<(f64, f64)>,
    state: Option<SarState>,
    last_value: Option<f64>,
}

impl ParabolicSar {
    /// Create new parabolic SAR indicator
    pub fn new(acceleration: f64, maximum: f64) -> Result<Self, IndicatorError> {
        let valid = acceleration.is_finite()
            && maximum.is_finite()
            && acceleration > 0.0
            && maximum >= acceleration;
        if !valid {
            return Err(IndicatorError::InvalidParameter {
                indicator: "SAR",
                reason: format!(
                    "acceleration {} and maximum {} must satisfy 0 < acceleration <= maximum",
                    acceleration, maximum
                ),
            });
        }

        Ok(Self {
            acceleration,
            maximum,
            first_bar: None,
            state: None,
            last_value: None,
        })
    }

    /// Whether the current trend is long (SAR below price)
    pub fn is_long(&self) -> Option<bool> {
        self.state.map(|s| s.is_long)
    }

    fn seed(&self, (high0, low0): (f64, f64), high: f64, low: f64) -> SarState {
        let up = high - high0;
        let down = low0 - low;
        let falling = down > 0.0 && up < down;

        let (sar, extreme_point) = if falling { (high0, low) } else { (low0, high) };
        SarState {
            is_long: !falling,
            sar,
            extreme_point,
            acceleration: self.acceleration,
            prev_high: high,
            prev_low: low,
        }
    }

    /// Advance one bar, returning the SAR value reported for it.
    fn step(&self, state: &mut SarState, high: f64, low: f64) -> f64 {
        let (prev_high, prev_low) = (state.prev_high, state.prev_low);
        state.prev_high = high;
        state.prev_low = low;

        let output;
        if state.is_long {
            if low <= state.sar {
                // Reverse to short
                state.is_long = false;
                state.sar = state.extreme_point.max(prev_high).max(high);
                output = state.sar;
                state.acceleration = self.acceleration;
                state.extreme_point = low;
                state.sar += state.acceleration * (state.extreme_point - state.sar);
                state.sar = state.sar.max(prev_high).max(high);
            } else {
                output = state.sar;
                if high > state.extreme_point {
                    state.extreme_point = high;
                    state.acceleration = (state.acceleration + self.acceleration).min(self.maximum);
                }
                state.sar += state.acceleration * (state.extreme_point - state.sar);
                state.sar = state.sar.min(prev_low).min(low);
            }
        } else if high >= state.sar {
            // Reverse to long
            state.is_long = true;
            state.sar = state.extreme_point.min(prev_low).min(low);
            output = state.sar;
            state.acceleration = self.acceleration;
            state.extreme_point = high;
            state.sar += state.acceleration * (state.extreme_point - state.sar);
            state.sar = state.sar.min(prev_low).min(low);
        } else {
            output = state.sar;
            if low < state.extreme_point {
                state.extreme_point = low;
                state.acceleration = (state.acceleration + self.acceleration).min(self.maximum);
            }
            state.sar += state.acceleration * (state.extreme_point - state.sar);
            state.sar = state.sar.max(prev_high).max(high);
        }

        output
    }
}

impl Default for ParabolicSar {
    fn default() -> Self {
        Self {
            acceleration: DEFAULT_SAR_ACCELERATION,
            maximum: DEFAULT_SAR_MAXIMUM,
            first_bar: None,
            state: None,
            last_value: None,
        }
    }
}

impl Indicator for ParabolicSar {
    fn name(&self) -> &str {
        "SAR"
    }

    fn update(&mut self, candle: &Candle) {
        let mut state = match (self.state, self.first_bar) {
            (Some(state), _) => state,
            (None, Some(first)) => self.seed(first, candle.high, candle.low),
            (None, None) => {
                self.first_bar = Some((candle.high, candle.low));
                return;
            }
        };

        let value = self.step(&mut state, candle.high, candle.low);
        self.state = Some(state);
        self.last_value = Some(value);
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.last_value.is_some()
    }
}

/// Calculate parabolic SAR over a series of candles
pub fn calculate_sar(
    candles: &[Candle],
    acceleration: f64,
    maximum: f64,
) -> Result<Vec<Option<f64>>, IndicatorError> {
    let mut sar = ParabolicSar::new(acceleration, maximum)?;
    Ok(run_over(&mut sar, candles))
}
