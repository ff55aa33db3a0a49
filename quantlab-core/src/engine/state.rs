//! Engine configuration, mutable account state, and run result types.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::numeric::validate_non_negative;
use crate::strategy::Signal;

/// Configuration for a single backtest run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub initial_cash: f64,
}

impl EngineConfig {
    pub fn new(initial_cash: f64) -> CoreResult<Self> {
        let config = Self { initial_cash };
        config.validate()?;
        Ok(config)
    }

    /// Initial cash must be finite and non-negative.
    pub fn validate(&self) -> CoreResult<()> {
        validate_non_negative("initial_cash", self.initial_cash)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_cash: 10_000.0,
        }
    }
}

/// Direction of an executed single-unit trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// One executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeFill {
    pub index: usize,
    pub side: TradeSide,
    pub price: f64,
}

/// Cash and unit position, evolved step by step during the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountState {
    pub cash: f64,
    pub position: u64,
}

impl AccountState {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            position: 0,
        }
    }

    /// Apply one signal at `price`. Returns the side traded, if any.
    ///
    /// A buy needs enough cash for one unit; a sell needs an open unit.
    /// Anything else is a hold.
    pub fn apply(&mut self, signal: Signal, price: f64) -> Option<TradeSide> {
        match signal {
            Signal::Buy if self.cash >= price => {
                self.position += 1;
                self.cash -= price;
                Some(TradeSide::Buy)
            }
            Signal::Sell if self.position > 0 => {
                self.position -= 1;
                self.cash += price;
                Some(TradeSide::Sell)
            }
            _ => None,
        }
    }

    /// Mark-to-market value: cash plus position at `price`.
    pub fn equity(&self, price: f64) -> f64 {
        self.cash + self.position as f64 * price
    }
}

/// Result of a complete backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Equity at each price index.
    pub equity_curve: Vec<f64>,
    /// Simple returns between consecutive equity values (one shorter).
    pub returns: Vec<f64>,
    /// Signals the strategy produced, aligned with the prices.
    pub signals: Vec<Signal>,
    /// Trades actually executed.
    pub trades: Vec<TradeFill>,
}

impl BacktestResult {
    pub fn final_equity(&self) -> Option<f64> {
        self.equity_curve.last().copied()
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }
}
