//! Simple Moving Average (SMA).
//!
//! Mean of the trailing `window` prices ending at `i` (inclusive).
//! Lookback: window - 1 (first defined value at index window-1).
//!
//! Two implementations: `Sma::compute` sums each window independently and is
//! the reference; `sma_rolling` carries a running sum in O(n) and must agree
//! with the reference to within floating-point rounding.

use super::Indicator;
use crate::error::CoreResult;
use crate::numeric::{mean, validate_window, Series};

#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
    name: String,
}

impl Sma {
    pub fn new(window: usize) -> CoreResult<Self> {
        validate_window("window", window)?;
        Ok(Self {
            window,
            name: format!("sma_{window}"),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, prices: &[f64]) -> Series {
        (0..prices.len())
            .map(|i| {
                if i + 1 < self.window {
                    None
                } else {
                    Some(mean(&prices[i + 1 - self.window..=i]))
                }
            })
            .collect()
    }
}

/// Simple moving average over `prices`.
pub fn simple_moving_average(prices: &[f64], window: usize) -> CoreResult<Series> {
    Ok(Sma::new(window)?.compute(prices))
}

/// Running-sum SMA. Same contract as [`simple_moving_average`].
pub fn sma_rolling(prices: &[f64], window: usize) -> CoreResult<Series> {
    validate_window("window", window)?;
    let n = prices.len();
    let mut result: Series = vec![None; n];
    if n < window {
        return Ok(result);
    }

    let mut sum: f64 = prices[..window].iter().sum();
    result[window - 1] = Some(sum / window as f64);

    for i in window..n {
        sum += prices[i] - prices[i - window];
        result[i] = Some(sum / window as f64);
    }

    Ok(result)
}
