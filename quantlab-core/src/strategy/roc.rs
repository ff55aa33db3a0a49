//! Rate-of-change threshold strategy.
//!
//! Buy when ROC > threshold, Sell when ROC < -threshold. ROC is in percent.
//! Indices where ROC is undefined (warmup or zero base price) hold.

use super::{Signal, Strategy};
use crate::error::CoreResult;
use crate::indicators::{Indicator, Roc};
use crate::numeric::validate_finite;

#[derive(Debug, Clone)]
pub struct RocStrategy {
    roc: Roc,
    threshold: f64,
}

impl RocStrategy {
    pub fn new(window: usize, threshold: f64) -> CoreResult<Self> {
        let roc = Roc::new(window)?;
        validate_finite("threshold", threshold)?;
        Ok(Self { roc, threshold })
    }
}

impl Strategy for RocStrategy {
    fn name(&self) -> &str {
        "roc"
    }

    fn warmup(&self) -> usize {
        self.roc.lookback()
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        self.roc
            .compute(prices)
            .into_iter()
            .map(|v| Signal::breakout(v, -self.threshold, self.threshold))
            .collect()
    }
}
