//! Factory: converts a serializable `StrategyConfig` into a runtime strategy.
//!
//! Optional parameters fall back to the conventional defaults (RSI 30/70,
//! MACD 12/26/9, zero thresholds) when omitted from a config file.

use serde::{Deserialize, Serialize};

use super::{
    BollingerReversion, MaCrossover, MaType, MacdCrossover, MeanReversion, MomentumStrategy,
    OptionBuyAndHold, OptionStraddle, RocStrategy, RsiStrategy, Strategy,
};
use crate::error::CoreResult;

fn default_buy_threshold() -> f64 {
    30.0
}

fn default_sell_threshold() -> f64 {
    70.0
}

fn default_num_std() -> f64 {
    2.0
}

fn default_fast_window() -> usize {
    12
}

fn default_slow_window() -> usize {
    26
}

fn default_signal_window() -> usize {
    9
}

/// Strategy configuration (serializable enum, tagged by `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Short MA versus long MA.
    MaCrossover {
        short_window: usize,
        long_window: usize,
        #[serde(default)]
        ma_type: MaType,
    },

    /// RSI oversold/overbought thresholds.
    Rsi {
        window: usize,
        #[serde(default = "default_buy_threshold")]
        buy_threshold: f64,
        #[serde(default = "default_sell_threshold")]
        sell_threshold: f64,
    },

    /// Price versus Bollinger bands.
    BollingerReversion {
        window: usize,
        #[serde(default = "default_num_std")]
        num_std: f64,
    },

    /// MACD line versus signal line.
    Macd {
        #[serde(default = "default_fast_window")]
        fast_window: usize,
        #[serde(default = "default_slow_window")]
        slow_window: usize,
        #[serde(default = "default_signal_window")]
        signal_window: usize,
    },

    Momentum {
        window: usize,
        #[serde(default)]
        threshold: f64,
    },

    Roc {
        window: usize,
        #[serde(default)]
        threshold: f64,
    },

    /// Price versus proportional bands around an SMA.
    MeanReversion {
        window: usize,
        #[serde(default)]
        threshold: f64,
    },

    OptionBuyAndHold,

    /// Reads implied volatility, not prices.
    OptionStraddle { threshold: f64 },
}

impl StrategyConfig {
    /// Build the strategy, validating every parameter.
    pub fn build(&self) -> CoreResult<Box<dyn Strategy>> {
        Ok(match *self {
            StrategyConfig::MaCrossover {
                short_window,
                long_window,
                ma_type,
            } => Box::new(MaCrossover::new(short_window, long_window, ma_type)?),
            StrategyConfig::Rsi {
                window,
                buy_threshold,
                sell_threshold,
            } => Box::new(RsiStrategy::new(window, buy_threshold, sell_threshold)?),
            StrategyConfig::BollingerReversion { window, num_std } => {
                Box::new(BollingerReversion::new(window, num_std)?)
            }
            StrategyConfig::Macd {
                fast_window,
                slow_window,
                signal_window,
            } => Box::new(MacdCrossover::new(fast_window, slow_window, signal_window)?),
            StrategyConfig::Momentum { window, threshold } => {
                Box::new(MomentumStrategy::new(window, threshold)?)
            }
            StrategyConfig::Roc { window, threshold } => {
                Box::new(RocStrategy::new(window, threshold)?)
            }
            StrategyConfig::MeanReversion { window, threshold } => {
                Box::new(MeanReversion::new(window, threshold)?)
            }
            StrategyConfig::OptionBuyAndHold => Box::new(OptionBuyAndHold),
            StrategyConfig::OptionStraddle { threshold } => {
                Box::new(OptionStraddle::new(threshold)?)
            }
        })
    }

    /// Config tag, as written in the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            StrategyConfig::MaCrossover { .. } => "ma_crossover",
            StrategyConfig::Rsi { .. } => "rsi",
            StrategyConfig::BollingerReversion { .. } => "bollinger_reversion",
            StrategyConfig::Macd { .. } => "macd",
            StrategyConfig::Momentum { .. } => "momentum",
            StrategyConfig::Roc { .. } => "roc",
            StrategyConfig::MeanReversion { .. } => "mean_reversion",
            StrategyConfig::OptionBuyAndHold => "option_buy_and_hold",
            StrategyConfig::OptionStraddle { .. } => "option_straddle",
        }
    }
}
