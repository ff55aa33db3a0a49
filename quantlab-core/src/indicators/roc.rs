//! Rate of Change (ROC).
//!
//! Percentage price change over `window` steps.
//! ROC[t] = (price[t] - price[t-window]) / price[t-window] * 100
//! Lookback: window. A zero base price leaves the entry undefined.

use super::Indicator;
use crate::error::CoreResult;
use crate::numeric::{validate_window, Series};

#[derive(Debug, Clone)]
pub struct Roc {
    window: usize,
    name: String,
}

impl Roc {
    pub fn new(window: usize) -> CoreResult<Self> {
        validate_window("window", window)?;
        Ok(Self {
            window,
            name: format!("roc_{window}"),
        })
    }
}

impl Indicator for Roc {
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
                let base = prices[i - self.window];
                if base == 0.0 {
                    None
                } else {
                    Some((prices[i] - base) / base * 100.0)
                }
            })
            .collect()
    }
}

/// Rate of change over `prices`, in percent.
pub fn rate_of_change(prices: &[f64], window: usize) -> CoreResult<Series> {
    Ok(Roc::new(window)?.compute(prices))
}
