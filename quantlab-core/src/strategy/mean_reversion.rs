//! Mean reversion around a simple moving average.
//!
//! Bands are proportional to the SMA: lower = sma * (1 - threshold),
//! upper = sma * (1 + threshold). Buy below the lower band, Sell above the upper.

use super::{Signal, Strategy};
use crate::error::CoreResult;
use crate::indicators::{Indicator, Sma};
use crate::numeric::validate_non_negative;

#[derive(Debug, Clone)]
pub struct MeanReversion {
    sma: Sma,
    threshold: f64,
}

impl MeanReversion {
    pub fn new(window: usize, threshold: f64) -> CoreResult<Self> {
        let sma = Sma::new(window)?;
        validate_non_negative("threshold", threshold)?;
        Ok(Self { sma, threshold })
    }
}

impl Strategy for MeanReversion {
    fn name(&self) -> &str {
        "mean_reversion"
    }

    fn warmup(&self) -> usize {
        self.sma.lookback()
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        prices
            .iter()
            .zip(self.sma.compute(prices))
            .map(|(&price, mean)| {
                let lower = mean.map(|m| m * (1.0 - self.threshold));
                let upper = mean.map(|m| m * (1.0 + self.threshold));
                Signal::reversion(Some(price), lower, upper)
            })
            .collect()
    }
}
