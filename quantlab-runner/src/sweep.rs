//! Parameter sweeps across strategy configurations.
//!
//! Each configuration is an independent run over the same prices, so runs are
//! spread across threads with rayon. Every run stays sequential internally.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use quantlab_core::metrics::PerformanceMetrics;
use quantlab_core::strategy::{MaType, StrategyConfig};

use crate::config::RunConfig;
use crate::runner::{run_backtest, RunError, RunReport};

/// Metric used to pick the best run of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepMetric {
    TotalReturn,
    Sharpe,
    /// Lower is better.
    MaxDrawdown,
}

impl SweepMetric {
    /// Score where higher is always better.
    pub fn score(self, metrics: &PerformanceMetrics) -> f64 {
        match self {
            SweepMetric::TotalReturn => metrics.total_return,
            SweepMetric::Sharpe => metrics.sharpe,
            SweepMetric::MaxDrawdown => -metrics.max_drawdown,
        }
    }
}

/// All MA crossover configurations with `short < long`.
pub fn ma_crossover_grid(shorts: &[usize], longs: &[usize], ma_type: MaType) -> Vec<StrategyConfig> {
    shorts
        .iter()
        .flat_map(|&short| {
            longs
                .iter()
                .filter(move |&&long| short < long)
                .map(move |&long| StrategyConfig::MaCrossover {
                    short_window: short,
                    long_window: long,
                    ma_type,
                })
        })
        .collect()
}

/// Parameter sweep executor.
#[derive(Debug, Clone)]
pub struct ParamSweep {
    base: RunConfig,
    parallel: bool,
}

impl ParamSweep {
    /// `base` supplies the symbol, dates, and cash for every run.
    pub fn new(base: RunConfig) -> Self {
        Self {
            base,
            parallel: true,
        }
    }

    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run every strategy configuration over `prices`.
    ///
    /// Results keep the input order. A configuration that fails is recorded
    /// in its entry and does not stop the sweep.
    pub fn run(&self, strategies: &[StrategyConfig], prices: &[f64]) -> SweepResults {
        let span = info_span!("sweep", symbol = %self.base.run.symbol, configs = strategies.len());
        let _guard = span.enter();

        // Rayon workers do not inherit the caller's current span.
        let run_one = |strategy: &StrategyConfig| {
            let _entry = span.enter();
            let config = self.base.with_strategy(strategy.clone());
            let outcome = run_backtest(&config, prices);
            if let Err(err) = &outcome {
                warn!(strategy = strategy.kind(), error = %err, "sweep entry failed");
            }
            SweepEntry {
                strategy: strategy.clone(),
                outcome,
            }
        };

        let entries: Vec<SweepEntry> = if self.parallel {
            strategies.par_iter().map(run_one).collect()
        } else {
            strategies.iter().map(run_one).collect()
        };

        let results = SweepResults { entries };
        info!(
            succeeded = results.successes().count(),
            failed = results.failures().count(),
            "sweep complete"
        );
        results
    }
}

/// One configuration and what happened when it ran.
#[derive(Debug)]
pub struct SweepEntry {
    pub strategy: StrategyConfig,
    pub outcome: Result<RunReport, RunError>,
}

/// Results from a parameter sweep, in input order.
#[derive(Debug)]
pub struct SweepResults {
    entries: Vec<SweepEntry>,
}

impl SweepResults {
    pub fn entries(&self) -> &[SweepEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn successes(&self) -> impl Iterator<Item = &RunReport> {
        self.entries.iter().filter_map(|e| e.outcome.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&StrategyConfig, &RunError)> {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().err().map(|err| (&e.strategy, err)))
    }

    /// Best successful run by `metric`. Ties go to the earliest entry.
    pub fn best_by(&self, metric: SweepMetric) -> Option<&RunReport> {
        self.successes().fold(None, |best: Option<&RunReport>, report| match best {
            Some(b) if metric.score(&report.metrics) <= metric.score(&b.metrics) => Some(b),
            _ => Some(report),
        })
    }
}
