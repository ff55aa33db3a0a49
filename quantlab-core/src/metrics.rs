//! Performance metrics: pure functions over an equity curve.
//!
//! Every metric is equity in, scalar out. Degenerate inputs (empty curves,
//! zero peaks, zero variance) produce 0.0, never NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::engine::BacktestResult;
use crate::numeric::{mean, population_std_dev};

/// Trading periods per year used for annualization.
pub const PERIODS_PER_YEAR: f64 = 252.0;

const STD_EPSILON: f64 = 1e-15;

/// Aggregate performance metrics for a single backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_return: f64,
    pub max_drawdown: f64,
    pub sharpe: f64,
    pub sortino: f64,
    pub trade_count: usize,
}

impl PerformanceMetrics {
    pub fn compute(result: &BacktestResult) -> Self {
        let equity = &result.equity_curve;
        Self {
            total_return: total_return(equity),
            max_drawdown: max_drawdown(equity),
            sharpe: sharpe_ratio(&result.returns),
            sortino: sortino_ratio(&result.returns),
            trade_count: result.trades.len(),
        }
    }
}

/// Simple per-step returns: `(e[i] - e[i-1]) / e[i-1]`, 0.0 when `e[i-1] == 0`.
///
/// One element shorter than the curve; empty for fewer than two points.
pub fn period_returns(equity_curve: &[f64]) -> Vec<f64> {
    equity_curve
        .windows(2)
        .map(|w| {
            if w[0] == 0.0 {
                0.0
            } else {
                (w[1] - w[0]) / w[0]
            }
        })
        .collect()
}

/// Total return as a fraction: (final - initial) / initial.
pub fn total_return(equity_curve: &[f64]) -> f64 {
    match (equity_curve.first(), equity_curve.last()) {
        (Some(&initial), Some(&last)) if equity_curve.len() >= 2 && initial > 0.0 => {
            (last - initial) / initial
        }
        _ => 0.0,
    }
}

/// Maximum drawdown as a positive fraction (0.15 = 15% below the running peak).
///
/// The peak starts at the first value and only moves up. Points under a
/// non-positive peak contribute 0.0.
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    let Some(&first) = equity_curve.first() else {
        return 0.0;
    };
    let mut peak = first;
    let mut max_dd = 0.0_f64;

    for &value in equity_curve {
        if value > peak {
            peak = value;
        }
        if peak > 0.0 {
            max_dd = max_dd.max((peak - value) / peak);
        }
    }
    max_dd
}

/// Annualized Sharpe ratio (zero risk-free rate, population std).
pub fn sharpe_ratio(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let std = population_std_dev(returns);
    if std < STD_EPSILON {
        return 0.0;
    }
    mean(returns) / std * PERIODS_PER_YEAR.sqrt()
}

/// Annualized Sortino ratio: mean return over downside deviation.
///
/// Downside deviation divides the squared negative returns by the full count.
pub fn sortino_ratio(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let downside_sq: f64 = returns
        .iter()
        .filter(|&&r| r < 0.0)
        .map(|r| r * r)
        .sum();
    let downside_std = (downside_sq / returns.len() as f64).sqrt();
    if downside_std < STD_EPSILON {
        return 0.0;
    }
    mean(returns) / downside_std * PERIODS_PER_YEAR.sqrt()
}
