//! Strategies: turn a price sequence into an aligned signal sequence.
//!
//! Strategies are stateless between calls: `generate_signals` is a pure
//! function of its input. An index whose indicators are undefined always maps
//! to `Signal::Hold`; ties map to `Hold` as well.

pub mod bollinger;
pub mod factory;
pub mod ma_crossover;
pub mod macd;
pub mod mean_reversion;
pub mod momentum;
pub mod options;
pub mod roc;
pub mod rsi;

pub use bollinger::BollingerReversion;
pub use factory::StrategyConfig;
pub use ma_crossover::{MaCrossover, MaType};
pub use macd::MacdCrossover;
pub use mean_reversion::MeanReversion;
pub use momentum::MomentumStrategy;
pub use options::{OptionBuyAndHold, OptionStraddle};
pub use roc::RocStrategy;
pub use rsi::RsiStrategy;

use serde::{Deserialize, Serialize};

/// Discrete trading decision at one time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Sell,
    #[default]
    Hold,
    Buy,
}

impl Signal {
    /// Numeric form: +1 buy, -1 sell, 0 hold.
    pub fn value(self) -> i8 {
        match self {
            Signal::Sell => -1,
            Signal::Hold => 0,
            Signal::Buy => 1,
        }
    }

    pub fn is_hold(self) -> bool {
        self == Signal::Hold
    }

    /// Buy when `a > b`, Sell when `a < b`, Hold on ties or undefined input.
    pub fn from_comparison(a: Option<f64>, b: Option<f64>) -> Self {
        match (a, b) {
            (Some(a), Some(b)) if a > b => Signal::Buy,
            (Some(a), Some(b)) if a < b => Signal::Sell,
            _ => Signal::Hold,
        }
    }

    /// Buy when `value` rises above `upper`, Sell when it falls below `lower`.
    pub fn breakout(value: Option<f64>, lower: f64, upper: f64) -> Self {
        match value {
            Some(v) if v > upper => Signal::Buy,
            Some(v) if v < lower => Signal::Sell,
            _ => Signal::Hold,
        }
    }

    /// Buy when `value` falls below `lower`, Sell when it rises above `upper`.
    pub fn reversion(value: Option<f64>, lower: Option<f64>, upper: Option<f64>) -> Self {
        match (value, lower, upper) {
            (Some(v), Some(lo), Some(_)) if v < lo => Signal::Buy,
            (Some(v), Some(_), Some(up)) if v > up => Signal::Sell,
            _ => Signal::Hold,
        }
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        signal.value()
    }
}

/// Trait for strategies.
///
/// # Contract
/// - The output has exactly one signal per input price.
/// - The signal at index `t` depends only on `prices[0..=t]`.
/// - A signal is non-zero only where every indicator it reads is defined.
pub trait Strategy: Send + Sync {
    /// Human-readable name (e.g., "ma_crossover").
    fn name(&self) -> &str;

    /// First index at which this strategy can emit a non-hold signal.
    fn warmup(&self) -> usize;

    /// Produce the signal sequence for `prices`.
    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn warmup(&self) -> usize {
        (**self).warmup()
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        (**self).generate_signals(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_values() {
        assert_eq!(Signal::Buy.value(), 1);
        assert_eq!(Signal::Sell.value(), -1);
        assert_eq!(i8::from(Signal::Hold), 0);
        assert_eq!(Signal::default(), Signal::Hold);
    }

    #[test]
    fn comparison_holds_on_ties_and_undefined() {
        assert_eq!(Signal::from_comparison(Some(2.0), Some(1.0)), Signal::Buy);
        assert_eq!(Signal::from_comparison(Some(1.0), Some(2.0)), Signal::Sell);
        assert_eq!(Signal::from_comparison(Some(1.0), Some(1.0)), Signal::Hold);
        assert_eq!(Signal::from_comparison(None, Some(1.0)), Signal::Hold);
        assert_eq!(Signal::from_comparison(Some(1.0), None), Signal::Hold);
    }

    #[test]
    fn breakout_and_reversion_directions() {
        assert_eq!(Signal::breakout(Some(5.0), -1.0, 1.0), Signal::Buy);
        assert_eq!(Signal::breakout(Some(-5.0), -1.0, 1.0), Signal::Sell);
        assert_eq!(Signal::breakout(Some(1.0), -1.0, 1.0), Signal::Hold);
        assert_eq!(Signal::breakout(None, -1.0, 1.0), Signal::Hold);

        assert_eq!(Signal::reversion(Some(0.5), Some(1.0), Some(2.0)), Signal::Buy);
        assert_eq!(Signal::reversion(Some(2.5), Some(1.0), Some(2.0)), Signal::Sell);
        assert_eq!(Signal::reversion(Some(1.5), Some(1.0), Some(2.0)), Signal::Hold);
        assert_eq!(Signal::reversion(Some(0.5), None, Some(2.0)), Signal::Hold);
    }

    #[test]
    fn signal_serializes_snake_case() {
        let json = serde_json::to_string(&Signal::Buy).unwrap();
        assert_eq!(json, "\"buy\"");
    }
}
