//! Momentum threshold strategy.
//!
//! Buy when momentum > threshold, Sell when momentum < -threshold.

use super::{Signal, Strategy};
use crate::error::CoreResult;
use crate::indicators::{Indicator, Momentum};
use crate::numeric::validate_finite;

#[derive(Debug, Clone)]
pub struct MomentumStrategy {
    momentum: Momentum,
    threshold: f64,
}

impl MomentumStrategy {
    pub fn new(window: usize, threshold: f64) -> CoreResult<Self> {
        let momentum = Momentum::new(window)?;
        validate_finite("threshold", threshold)?;
        Ok(Self {
            momentum,
            threshold,
        })
    }
}

impl Strategy for MomentumStrategy {
    fn name(&self) -> &str {
        "momentum"
    }

    fn warmup(&self) -> usize {
        self.momentum.lookback()
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        self.momentum
            .compute(prices)
            .into_iter()
            .map(|v| Signal::breakout(v, -self.threshold, self.threshold))
            .collect()
    }
}
