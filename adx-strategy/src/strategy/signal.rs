//! Signal columns

use serde::Serialize;

/// `enter_long` / `exit_long` flags aligned with the candle series.
///
/// Both flags may be set on the same row; precedence is up to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignalFrame {
    pub enter_long: Vec<bool>,
    pub exit_long: Vec<bool>,
}

impl SignalFrame {
    /// All-false frame of `len` rows
    pub fn new(len: usize) -> Self {
        Self {
            enter_long: vec![false; len],
            exit_long: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.enter_long.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enter_long.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.enter_long.iter().filter(|&&flag| flag).count()
    }

    pub fn exit_count(&self) -> usize {
        self.exit_long.iter().filter(|&&flag| flag).count()
    }

    /// Flags as 0/1, the way hosts store them
    pub fn row(&self, index: usize) -> Option<(u8, u8)> {
        let enter = *self.enter_long.get(index)?;
        let exit = *self.exit_long.get(index)?;
        Some((u8::from(enter), u8::from(exit)))
    }

    /// Clear every flag before `index`
    pub fn clear_before(&mut self, index: usize) {
        let end = index.min(self.len());
        self.enter_long[..end].fill(false);
        self.exit_long[..end].fill(false);
    }
}

/// True at row `i` when `a` moved above `b` between rows `i - 1` and `i`.
///
/// Row 0 has no predecessor and is always false; comparisons against `NaN`
/// are false.
pub fn crossed_above(a: &[f64], b: &[f64]) -> Vec<bool> {
    let len = a.len().min(b.len());
    (0..len)
        .map(|i| i > 0 && a[i] > b[i] && a[i - 1] <= b[i - 1])
        .collect()
}
