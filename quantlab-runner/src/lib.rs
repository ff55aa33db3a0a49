//! QuantLab Runner: run orchestration on top of `quantlab-core`.
//!
//! This crate provides:
//! - TOML run configuration with content-addressed run IDs
//! - Single-run entry points over prices or a `DataLoader`
//! - Parallel parameter sweeps with per-entry failures
//! - Live signal dispatch to an `ExecutionHandler`
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod config;
pub mod live;
pub mod runner;
pub mod sweep;

pub use config::{ConfigError, RunConfig, RunId, RunSection};
pub use live::SignalDispatcher;
pub use runner::{run_backtest, run_with_loader, RunError, RunReport};
pub use sweep::{ma_crossover_grid, ParamSweep, SweepEntry, SweepMetric, SweepResults};
