//! Exponential Moving Average (EMA).
//!
//! Seed: EMA[window-1] = SMA of the first `window` prices.
//! Recurrence: EMA[t] = (price[t] - EMA[t-1]) * 2/(window+1) + EMA[t-1].
//! Lookback: window - 1.

use super::Indicator;
use crate::error::CoreResult;
use crate::numeric::{ema_fold, validate_window, Series};

#[derive(Debug, Clone)]
pub struct Ema {
    window: usize,
    name: String,
}

impl Ema {
    pub fn new(window: usize) -> CoreResult<Self> {
        validate_window("window", window)?;
        Ok(Self {
            window,
            name: format!("ema_{window}"),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn multiplier(&self) -> f64 {
        2.0 / (self.window as f64 + 1.0)
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, prices: &[f64]) -> Series {
        ema_fold(prices, self.window)
    }
}

/// Exponential moving average over `prices`.
pub fn exponential_moving_average(prices: &[f64], window: usize) -> CoreResult<Series> {
    Ok(Ema::new(window)?.compute(prices))
}
