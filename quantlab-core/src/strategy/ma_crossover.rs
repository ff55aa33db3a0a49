//! Moving average crossover: compares a short and a long moving average.
//!
//! Buy while the short MA is above the long MA, Sell while it is below.
//! This is a level comparison evaluated at every index, not an edge detector:
//! consecutive buys simply keep accumulating units in the engine.

use serde::{Deserialize, Serialize};

use super::{Signal, Strategy};
use crate::error::{CoreError, CoreResult};
use crate::indicators::{Ema, Indicator, Sma};
use crate::numeric::{validate_window, Series};

/// Moving average type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaType {
    #[default]
    Sma,
    Ema,
}

impl MaType {
    fn prefix(&self) -> &'static str {
        match self {
            MaType::Sma => "sma",
            MaType::Ema => "ema",
        }
    }
}

#[derive(Debug, Clone)]
enum MovingAverage {
    Sma(Sma),
    Ema(Ema),
}

impl MovingAverage {
    fn new(ma_type: MaType, window: usize) -> CoreResult<Self> {
        Ok(match ma_type {
            MaType::Sma => MovingAverage::Sma(Sma::new(window)?),
            MaType::Ema => MovingAverage::Ema(Ema::new(window)?),
        })
    }

    fn compute(&self, prices: &[f64]) -> Series {
        match self {
            MovingAverage::Sma(sma) => sma.compute(prices),
            MovingAverage::Ema(ema) => ema.compute(prices),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MaCrossover {
    short: MovingAverage,
    long: MovingAverage,
    long_window: usize,
    ma_type: MaType,
    name: String,
}

impl MaCrossover {
    pub fn new(short_window: usize, long_window: usize, ma_type: MaType) -> CoreResult<Self> {
        validate_window("short_window", short_window)?;
        validate_window("long_window", long_window)?;
        if short_window >= long_window {
            return Err(CoreError::invalid(
                "short_window",
                format!("must be < long_window ({long_window}), got {short_window}"),
            ));
        }
        Ok(Self {
            short: MovingAverage::new(ma_type, short_window)?,
            long: MovingAverage::new(ma_type, long_window)?,
            long_window,
            ma_type,
            name: format!("{}_crossover", ma_type.prefix()),
        })
    }

    pub fn sma(short_window: usize, long_window: usize) -> CoreResult<Self> {
        Self::new(short_window, long_window, MaType::Sma)
    }

    pub fn ema(short_window: usize, long_window: usize) -> CoreResult<Self> {
        Self::new(short_window, long_window, MaType::Ema)
    }

    pub fn ma_type(&self) -> MaType {
        self.ma_type
    }
}

impl Strategy for MaCrossover {
    fn name(&self) -> &str {
        &self.name
    }

    fn warmup(&self) -> usize {
        self.long_window - 1
    }

    fn generate_signals(&self, prices: &[f64]) -> Vec<Signal> {
        let short = self.short.compute(prices);
        let long = self.long.compute(prices);
        short
            .into_iter()
            .zip(long)
            .map(|(s, l)| Signal::from_comparison(s, l))
            .collect()
    }
}
