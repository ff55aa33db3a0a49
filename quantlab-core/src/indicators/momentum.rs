//! Momentum: lookback difference (not percentage).
//!
//! momentum[t] = price[t] - price[t-window]
//! Lookback: window.

use super::Indicator;
use crate::error::CoreResult;
use crate::numeric::{validate_window, Series};

#[derive(Debug, Clone)]
pub struct Momentum {
    window: usize,
    name: String,
}

impl Momentum {
    pub fn new(window: usize) -> CoreResult<Self> {
        validate_window("window", window)?;
        Ok(Self {
            window,
            name: format!("momentum_{window}"),
        })
    }
}

impl Indicator for Momentum {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window
    }

    fn compute(&self, prices: &[f64]) -> Series {
        (0..prices.len())
            .map(|i| (i >= self.window).then(|| prices[i] - prices[i - self.window]))
            .collect()
    }
}

/// Momentum over `prices`.
pub fn momentum(prices: &[f64], window: usize) -> CoreResult<Series> {
    Ok(Momentum::new(window)?.compute(prices))
}
