//! Step-by-step backtest loop.
//!
//! Per index: read the precomputed signal, try a single-unit trade at that
//! index's price, then mark the account to market. Signals are generated once
//! over the whole series; each one depends only on its own prefix, so the loop
//! never looks ahead.

use tracing::debug;

use super::state::{AccountState, BacktestResult, EngineConfig, TradeFill};
use crate::error::{CoreError, CoreResult};
use crate::metrics::period_returns;
use crate::strategy::Strategy;

/// Runs one strategy against price series.
#[derive(Debug, Clone)]
pub struct Backtester<S> {
    strategy: S,
    config: EngineConfig,
}

impl<S: Strategy> Backtester<S> {
    pub fn new(strategy: S, config: EngineConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { strategy, config })
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Simulate trading over `prices`.
    ///
    /// Fails only if the strategy breaks the one-signal-per-price contract.
    pub fn run(&self, prices: &[f64]) -> CoreResult<BacktestResult> {
        let signals = self.strategy.generate_signals(prices);
        if signals.len() != prices.len() {
            return Err(CoreError::SignalLengthMismatch {
                expected: prices.len(),
                actual: signals.len(),
            });
        }

        let mut account = AccountState::new(self.config.initial_cash);
        let mut equity_curve = Vec::with_capacity(prices.len());
        let mut trades = Vec::new();

        for (index, (&price, &signal)) in prices.iter().zip(&signals).enumerate() {
            if let Some(side) = account.apply(signal, price) {
                debug!(
                    index,
                    ?side,
                    price,
                    cash = account.cash,
                    position = account.position,
                    "trade executed"
                );
                trades.push(TradeFill { index, side, price });
            }
            equity_curve.push(account.equity(price));
        }

        let returns = period_returns(&equity_curve);

        debug!(
            strategy = self.strategy.name(),
            bars = prices.len(),
            trades = trades.len(),
            final_equity = equity_curve.last().copied().unwrap_or(self.config.initial_cash),
            "backtest complete"
        );

        Ok(BacktestResult {
            equity_curve,
            returns,
            signals,
            trades,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TradeSide;
    use crate::strategy::{MaCrossover, MaType, Signal};

    struct Fixed(Vec<Signal>);

    impl Strategy for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn warmup(&self) -> usize {
            0
        }

        fn generate_signals(&self, _prices: &[f64]) -> Vec<Signal> {
            self.0.clone()
        }
    }

    #[test]
    fn sma_crossover_end_to_end() {
        let strat = MaCrossover::new(2, 3, MaType::Sma).unwrap();
        let bt = Backtester::new(strat, EngineConfig::new(10.0).unwrap()).unwrap();
        let result = bt.run(&[1.0, 2.0, 3.0, 4.0, 3.0, 2.0]).unwrap();

        assert_eq!(result.equity_curve.len(), 6);
        assert_eq!(result.returns.len(), 5);
        // Signals [H, H, B, B, B, S]: buys at 3, 4, 3 then sells one unit at 2.
        assert_eq!(result.trades.len(), 4);
        assert_eq!(result.equity_curve, vec![10.0, 10.0, 10.0, 11.0, 9.0, 6.0]);
    }

    #[test]
    fn buys_are_skipped_without_cash() {
        let bt = Backtester::new(
            Fixed(vec![Signal::Buy, Signal::Buy, Signal::Sell]),
            EngineConfig::new(5.0).unwrap(),
        )
        .unwrap();
        let result = bt.run(&[4.0, 4.0, 6.0]).unwrap();
        assert_eq!(result.trades.len(), 2);
        assert_eq!(result.trades[1].side, TradeSide::Sell);
        assert_eq!(result.equity_curve, vec![5.0, 5.0, 7.0]);
    }

    #[test]
    fn sell_without_position_is_hold() {
        let bt = Backtester::new(
            Fixed(vec![Signal::Sell, Signal::Sell]),
            EngineConfig::default(),
        )
        .unwrap();
        let result = bt.run(&[1.0, 2.0]).unwrap();
        assert!(result.trades.is_empty());
        assert_eq!(result.equity_curve, vec![10_000.0, 10_000.0]);
        assert_eq!(result.returns, vec![0.0]);
    }

    #[test]
    fn signal_length_mismatch_is_error() {
        let bt = Backtester::new(Fixed(vec![Signal::Buy]), EngineConfig::default()).unwrap();
        let err = bt.run(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            CoreError::SignalLengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn empty_prices_give_empty_result() {
        let strat = MaCrossover::new(2, 3, MaType::Sma).unwrap();
        let bt = Backtester::new(strat, EngineConfig::default()).unwrap();
        let result = bt.run(&[]).unwrap();
        assert!(result.equity_curve.is_empty());
        assert!(result.returns.is_empty());
    }

    #[test]
    fn invalid_cash_rejected() {
        let strat = MaCrossover::new(2, 3, MaType::Sma).unwrap();
        let config = EngineConfig {
            initial_cash: -5.0,
        };
        assert!(Backtester::new(strat, config).is_err());
    }

    #[test]
    fn boxed_strategy_runs() {
        let strat: Box<dyn Strategy> = Box::new(MaCrossover::new(2, 3, MaType::Ema).unwrap());
        let bt = Backtester::new(strat, EngineConfig::default()).unwrap();
        assert_eq!(bt.run(&[1.0, 2.0, 3.0]).unwrap().equity_curve.len(), 3);
    }
}
