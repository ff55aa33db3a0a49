//! Moving Average Convergence Divergence (MACD).
//!
//! MACD line = EMA(fast) - EMA(slow), defined from index slow-1.
//! Signal line = seeded EMA recurrence over the defined suffix of the MACD line:
//! the first defined value is the mean of the first `signal_window` MACD values,
//! so it appears at index (slow-1) + (signal_window-1).

use super::Indicator;
use crate::error::{CoreError, CoreResult};
use crate::numeric::{ema_fold, validate_window, Series};

/// Which MACD line to expose as a single series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdLine {
    Macd,
    Signal,
}

/// Both MACD lines, each aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    pub macd: Series,
    pub signal: Series,
}

#[derive(Debug, Clone)]
pub struct Macd {
    fast_window: usize,
    slow_window: usize,
    signal_window: usize,
    line: MacdLine,
    name: String,
}

impl Macd {
    pub fn new(
        fast_window: usize,
        slow_window: usize,
        signal_window: usize,
        line: MacdLine,
    ) -> CoreResult<Self> {
        validate_window("fast_window", fast_window)?;
        validate_window("slow_window", slow_window)?;
        validate_window("signal_window", signal_window)?;
        if fast_window >= slow_window {
            return Err(CoreError::invalid(
                "fast_window",
                format!("must be < slow_window ({slow_window}), got {fast_window}"),
            ));
        }

        let prefix = match line {
            MacdLine::Macd => "macd",
            MacdLine::Signal => "macd_signal",
        };
        Ok(Self {
            fast_window,
            slow_window,
            signal_window,
            line,
            name: format!("{prefix}_{fast_window}_{slow_window}_{signal_window}"),
        })
    }

    /// Classic 12/26/9 parameters.
    pub fn default_params() -> Self {
        Self {
            fast_window: 12,
            slow_window: 26,
            signal_window: 9,
            line: MacdLine::Macd,
            name: "macd_12_26_9".into(),
        }
    }

    pub fn windows(&self) -> (usize, usize, usize) {
        (self.fast_window, self.slow_window, self.signal_window)
    }

    /// Compute both lines.
    pub fn lines(&self, prices: &[f64]) -> MacdOutput {
        let n = prices.len();
        let fast = ema_fold(prices, self.fast_window);
        let slow = ema_fold(prices, self.slow_window);

        let macd: Series = fast
            .iter()
            .zip(&slow)
            .map(|(f, s)| match (f, s) {
                (Some(f), Some(s)) => Some(f - s),
                _ => None,
            })
            .collect();

        // EMA(slow) is defined on a contiguous suffix and EMA(fast) is defined
        // wherever EMA(slow) is, so the MACD line is too.
        let first_defined = self.slow_window - 1;
        let mut signal: Series = vec![None; n];
        if first_defined < n {
            let defined: Vec<f64> = macd[first_defined..].iter().flatten().copied().collect();
            for (offset, value) in ema_fold(&defined, self.signal_window).into_iter().enumerate() {
                signal[first_defined + offset] = value;
            }
        }

        MacdOutput { macd, signal }
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        match self.line {
            MacdLine::Macd => self.slow_window - 1,
            MacdLine::Signal => self.slow_window + self.signal_window - 2,
        }
    }

    fn compute(&self, prices: &[f64]) -> Series {
        let out = self.lines(prices);
        match self.line {
            MacdLine::Macd => out.macd,
            MacdLine::Signal => out.signal,
        }
    }
}

/// MACD line and signal line over `prices`.
pub fn macd(
    prices: &[f64],
    fast_window: usize,
    slow_window: usize,
    signal_window: usize,
) -> CoreResult<(Series, Series)> {
    let out = Macd::new(fast_window, slow_window, signal_window, MacdLine::Macd)?.lines(prices);
    Ok((out.macd, out.signal))
}
