//! QuantLab Core: indicators, strategies, backtest engine, metrics, option pricing.
//!
//! This crate contains the computational heart of the toolkit:
//! - Rolling-window indicators over price slices (`None` until defined)
//! - Signal-generating strategies with a look-ahead-free contract
//! - A single-asset, single-unit backtest loop
//! - Equity-curve performance metrics
//! - Black-Scholes pricing and greeks
//! - Collaborator traits for data loading and order execution

pub mod data;
pub mod engine;
pub mod error;
pub mod execution;
pub mod indicators;
pub mod metrics;
pub mod numeric;
pub mod options;
pub mod strategy;

pub use error::{CoreError, CoreResult};
pub use numeric::Series;
