//! Bollinger band reversion: buy below the lower band, sell above the upper.

use super::{Signal, Strategy};
use crate::error::CoreResult;
use crate::indicators::{Bollinger, Indicator};

#[derive(Debug, Clone)]
pub struct BollingerReversion {
    bands: Bollinger,
}

impl BollingerReversion {
    pub fn new(window: usize, num_std: f64) -> CoreResult<Self> {
        Ok(Self {
            bands: Bollinger::middle(window, num_std)?,
        })
    }

    pub fn default_params() -> CoreResult<Self> {
        Self::new(20, 2.0)
    }
}

impl Strategy for BollingerReversion {
    fn name(&self) -> &str {
        "bollinger_reversion"
    }

    fn warmup(&self) -> usize {
        self.bands.lookback()
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        let bands = self.bands.bands(prices);
        prices
            .iter()
            .zip(bands.lower.into_iter().zip(bands.upper))
            .map(|(&price, (lower, upper))| Signal::reversion(Some(price), lower, upper))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Signal::{Buy, Hold, Sell};

    #[test]
    fn constant_prices_hold() {
        let strat = BollingerReversion::new(3, 1.0).unwrap();
        let signals = strat.generate_signals(&[1.0; 5]);
        assert!(signals.iter().all(|s| s.is_hold()));
    }

    #[test]
    fn drop_below_lower_band_buys() {
        let strat = BollingerReversion::new(3, 1.0).unwrap();
        let signals = strat.generate_signals(&[2.0, 2.0, 2.0, 2.0, 0.0]);
        assert_eq!(signals[4], Buy);
    }

    #[test]
    fn spike_above_upper_band_sells() {
        let strat = BollingerReversion::new(3, 1.0).unwrap();
        let signals = strat.generate_signals(&[2.0, 2.0, 2.0, 2.0, 4.0]);
        assert_eq!(signals, vec![Hold, Hold, Hold, Hold, Sell]);
    }

    #[test]
    fn invalid_params_rejected() {
        assert!(BollingerReversion::new(0, 1.0).is_err());
        assert!(BollingerReversion::new(3, -1.0).is_err());
    }
}
