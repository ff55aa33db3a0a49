//! Backtesting engine: single-asset, single-unit, signal-driven loop.
//!
//! The engine takes the full signal sequence from a strategy, then walks the
//! prices once: trade at most one unit per index, mark equity, and finally
//! derive per-step returns from the equity curve.

pub mod loop_runner;
pub mod state;

pub use loop_runner::Backtester;
pub use state::{AccountState, BacktestResult, EngineConfig, TradeFill, TradeSide};
