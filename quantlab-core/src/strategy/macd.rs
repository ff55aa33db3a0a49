//! MACD crossover: MACD line versus its signal line.

use super::{Signal, Strategy};
use crate::error::CoreResult;
use crate::indicators::{Macd, MacdLine};

#[derive(Debug, Clone)]
pub struct MacdCrossover {
    macd: Macd,
}

impl MacdCrossover {
    pub fn new(fast_window: usize, slow_window: usize, signal_window: usize) -> CoreResult<Self> {
        Ok(Self {
            macd: Macd::new(fast_window, slow_window, signal_window, MacdLine::Signal)?,
        })
    }

    pub fn default_params() -> Self {
        Self {
            macd: Macd::default_params(),
        }
    }
}

impl Strategy for MacdCrossover {
    fn name(&self) -> &str {
        "macd_crossover"
    }

    fn warmup(&self) -> usize {
        let (_, slow, signal) = self.macd.windows();
        slow + signal - 2
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        let lines = self.macd.lines(prices);
        lines
            .macd
            .into_iter()
            .zip(lines.signal)
            .map(|(m, s)| Signal::from_comparison(m, s))
            .collect()
    }
}
