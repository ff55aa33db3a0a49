//! Backtest runner: wires together configuration, strategy factory, engine,
//! and metrics.
//!
//! Two entry points:
//! - `run_backtest()`: takes pre-loaded prices. Used by sweeps and tests.
//! - `run_with_loader()`: fetches closes through a `DataLoader`, then runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, info_span};

use quantlab_core::data::{closes, DataError, DataLoader};
use quantlab_core::engine::{BacktestResult, Backtester};
use quantlab_core::execution::ExecutionError;
use quantlab_core::metrics::PerformanceMetrics;
use quantlab_core::CoreError;

use crate::config::{ConfigError, RunConfig, RunId};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("engine error: {0}")]
    Core(#[from] CoreError),
    #[error("data error: {0}")]
    Data(#[from] DataError),
    #[error("execution error: {0}")]
    Execution(#[from] ExecutionError),
    #[error("no price history for '{symbol}' between {start} and {end}")]
    EmptyPriceHistory {
        symbol: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Complete result of a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub symbol: String,
    pub strategy: String,
    pub result: BacktestResult,
    pub metrics: PerformanceMetrics,
}

/// Run one backtest over pre-loaded prices.
pub fn run_backtest(config: &RunConfig, prices: &[f64]) -> Result<RunReport, RunError> {
    config.validate()?;
    let run_id = config.run_id()?;
    let span = info_span!("backtest", run_id = %run_id, symbol = %config.run.symbol);
    let _guard = span.enter();

    let strategy = config.strategy.build()?;
    let strategy_name = strategy.name().to_string();
    debug!(strategy = %strategy_name, warmup = strategy.warmup(), bars = prices.len(), "starting run");

    let backtester = Backtester::new(strategy, config.engine_config())?;
    let result = backtester.run(prices)?;
    let metrics = PerformanceMetrics::compute(&result);

    info!(
        strategy = %strategy_name,
        trades = metrics.trade_count,
        total_return = metrics.total_return,
        max_drawdown = metrics.max_drawdown,
        sharpe = metrics.sharpe,
        "run complete"
    );

    Ok(RunReport {
        run_id,
        symbol: config.run.symbol.clone(),
        strategy: strategy_name,
        result,
        metrics,
    })
}

/// Fetch closing prices for the configured symbol and date range, then run.
pub fn run_with_loader(config: &RunConfig, loader: &dyn DataLoader) -> Result<RunReport, RunError> {
    config.validate()?;
    let run = &config.run;
    let records = loader.fetch(&run.symbol, run.start_date, run.end_date)?;
    if records.is_empty() {
        return Err(RunError::EmptyPriceHistory {
            symbol: run.symbol.clone(),
            start: run.start_date,
            end: run.end_date,
        });
    }
    debug!(symbol = %run.symbol, records = records.len(), "price history loaded");
    run_backtest(config, &closes(&records))
}
