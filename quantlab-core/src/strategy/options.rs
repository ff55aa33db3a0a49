//! Option strategies.
//!
//! `OptionStraddle` reads an implied-volatility sequence rather than prices
//! and never emits a sell; positions opened by it are held to expiry.

use super::{Signal, Strategy};
use crate::error::CoreResult;
use crate::numeric::validate_non_negative;

/// Buy at the first index, hold afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionBuyAndHold;

impl Strategy for OptionBuyAndHold {
    fn name(&self) -> &str {
        "option_buy_and_hold"
    }

    fn warmup(&self) -> usize {
        0
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        let mut signals = vec![Signal::Hold; prices.len()];
        if let Some(first) = signals.first_mut() {
            *first = Signal::Buy;
        }
        signals
    }
}

/// Buy a straddle whenever implied volatility exceeds `threshold`.
#[derive(Debug, Clone)]
pub struct OptionStraddle {
    threshold: f64,
}

impl OptionStraddle {
    pub fn new(threshold: f64) -> CoreResult<Self> {
        validate_non_negative("threshold", threshold)?;
        Ok(Self { threshold })
    }
}

impl Strategy for OptionStraddle {
    fn name(&self) -> &str {
        "option_straddle"
    }

    fn warmup(&self) -> usize {
        0
    }

    fn generate_signals(&self, implied_vol: &[f64]) -> Vec<Signal> {
        implied_vol
            .iter()
            .map(|&iv| {
                if iv > self.threshold {
                    Signal::Buy
                } else {
                    Signal::Hold
                }
            })
            .collect()
    }
}
