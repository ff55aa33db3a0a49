//! Indicator library.
//!
//! Every indicator maps a price slice to a [`Series`] of the same length, with
//! `None` until enough trailing history exists. Each is available as a free
//! function (validate, then compute) and as a parameter-validated struct.
//! Single-series structs implement [`Indicator`]; Bollinger and MACD expose a
//! band/line selector so each line can be used on its own.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod momentum;
pub mod roc;
pub mod rsi;
pub mod sma;

pub use bollinger::{bollinger_bands, Bollinger, BollingerBand, BollingerBands};
pub use ema::{exponential_moving_average, Ema};
pub use macd::{macd, Macd, MacdLine, MacdOutput};
pub use momentum::{momentum, Momentum};
pub use roc::{rate_of_change, Roc};
pub use rsi::{relative_strength_index, Rsi};
pub use sma::{simple_moving_average, sma_rolling, Sma};

use crate::numeric::Series;

/// Trait for single-series indicators.
///
/// # Look-ahead guard
/// The value at index `t` may only depend on `prices[0..=t]`. Computing on a
/// truncated prefix must reproduce the same values for that prefix.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20").
    fn name(&self) -> &str;

    /// Number of leading undefined entries.
    fn lookback(&self) -> usize;

    /// Compute over the full price slice. Output length equals input length.
    fn compute(&self, prices: &[f64]) -> Series;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Unwrap a defined entry and compare it.
#[cfg(test)]
pub fn assert_defined_approx(actual: Option<f64>, expected: f64, epsilon: f64) {
    match actual {
        Some(v) => assert_approx(v, expected, epsilon),
        None => panic!("expected defined value {expected}, got undefined"),
    }
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
