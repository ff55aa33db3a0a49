//! Serializable run configuration, loaded from TOML.
//!
//! ```toml
//! [run]
//! symbol = "SPY"
//! start_date = "2024-01-01"
//! end_date = "2024-12-31"
//! initial_cash = 10000.0
//!
//! [strategy]
//! type = "ma_crossover"
//! short_window = 2
//! long_window = 3
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use quantlab_core::engine::EngineConfig;
use quantlab_core::strategy::StrategyConfig;
use quantlab_core::CoreError;

/// Unique identifier for a run (content-addressable hash).
pub type RunId = String;

/// Errors from reading, parsing, or validating a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("symbol must not be empty")]
    EmptySymbol,

    #[error("start_date {start} is after end_date {end}")]
    DateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] CoreError),
}

fn default_initial_cash() -> f64 {
    EngineConfig::default().initial_cash
}

/// The `[run]` table: what to trade, over which dates, with how much cash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSection {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_initial_cash")]
    pub initial_cash: f64,
}

/// Everything needed to reproduce one backtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub run: RunSection,
    pub strategy: StrategyConfig,
}

impl RunConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check that dates are ordered, cash is valid, and the strategy can be built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.symbol.trim().is_empty() {
            return Err(ConfigError::EmptySymbol);
        }
        if self.run.start_date > self.run.end_date {
            return Err(ConfigError::DateRange {
                start: self.run.start_date,
                end: self.run.end_date,
            });
        }
        self.engine_config().validate()?;
        self.strategy.build()?;
        Ok(())
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            initial_cash: self.run.initial_cash,
        }
    }

    /// Deterministic hash of the configuration.
    ///
    /// Two configs with identical content share a RunId, regardless of how
    /// the source TOML was formatted.
    pub fn run_id(&self) -> Result<RunId, ConfigError> {
        let json = serde_json::to_string(self)?;
        Ok(blake3::hash(json.as_bytes()).to_hex().to_string())
    }

    /// Same run, different strategy.
    pub fn with_strategy(&self, strategy: StrategyConfig) -> Self {
        Self {
            run: self.run.clone(),
            strategy,
        }
    }
}
