//! RSI threshold strategy: oversold buys, overbought sells.

use super::{Signal, Strategy};
use crate::error::{CoreError, CoreResult};
use crate::indicators::{Indicator, Rsi};
use crate::numeric::validate_finite;

#[derive(Debug, Clone)]
pub struct RsiStrategy {
    rsi: Rsi,
    buy_threshold: f64,
    sell_threshold: f64,
}

impl RsiStrategy {
    pub fn new(window: usize, buy_threshold: f64, sell_threshold: f64) -> CoreResult<Self> {
        let rsi = Rsi::new(window)?;
        validate_finite("buy_threshold", buy_threshold)?;
        validate_finite("sell_threshold", sell_threshold)?;
        if buy_threshold > sell_threshold {
            return Err(CoreError::invalid(
                "buy_threshold",
                format!("must be <= sell_threshold ({sell_threshold}), got {buy_threshold}"),
            ));
        }
        Ok(Self {
            rsi,
            buy_threshold,
            sell_threshold,
        })
    }

    /// 30/70 thresholds.
    pub fn with_default_thresholds(window: usize) -> CoreResult<Self> {
        Self::new(window, 30.0, 70.0)
    }
}

impl Strategy for RsiStrategy {
    fn name(&self) -> &str {
        "rsi"
    }

    fn warmup(&self) -> usize {
        self.rsi.lookback()
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        self.rsi
            .compute(prices)
            .into_iter()
            .map(|v| Signal::reversion(v, Some(self.buy_threshold), Some(self.sell_threshold)))
            .collect()
    }
}
