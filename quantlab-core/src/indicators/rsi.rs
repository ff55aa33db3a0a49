//! Relative Strength Index (RSI), simple (non-smoothed) form.
//!
//! At each index `i >= window`, take the trailing `window + 1` prices and their
//! `window` successive changes. Average gain and average loss are the sums of
//! gains and of loss magnitudes divided by `window`; every index is computed
//! independently, with no state carried between windows.
//!
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Lookback: window.
//! Edge case: avg_loss == 0 → RSI = 100.

use super::Indicator;
use crate::error::CoreResult;
use crate::numeric::{validate_window, Series};

#[derive(Debug, Clone)]
pub struct Rsi {
    window: usize,
    name: String,
}

impl Rsi {
    pub fn new(window: usize) -> CoreResult<Self> {
        validate_window("window", window)?;
        Ok(Self {
            window,
            name: format!("rsi_{window}"),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window
    }

    fn compute(&self, prices: &[f64]) -> Series {
        (0..prices.len())
            .map(|i| {
                if i < self.window {
                    return None;
                }
                let (gains, losses) = prices[i - self.window..=i].windows(2).fold(
                    (0.0, 0.0),
                    |(gains, losses), pair| {
                        let change = pair[1] - pair[0];
                        if change > 0.0 {
                            (gains + change, losses)
                        } else {
                            (gains, losses - change)
                        }
                    },
                );
                let n = self.window as f64;
                Some(compute_rsi(gains / n, losses / n))
            })
            .collect()
    }
}

fn compute_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

/// Relative strength index over `prices`.
pub fn relative_strength_index(prices: &[f64], window: usize) -> CoreResult<Series> {
    Ok(Rsi::new(window)?.compute(prices))
}
