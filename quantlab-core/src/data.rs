//! Data loader trait and structured error types.
//!
//! `DataLoader` abstracts over historical price sources so the runner can be
//! driven by a real provider or by an in-memory fixture.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One daily observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
}

/// Structured error types for data operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("data source error: {0}")]
    Source(String),
}

/// Trait for historical price sources.
pub trait DataLoader: Send + Sync {
    /// Fetch daily records for `symbol` with `start <= date <= end`, oldest first.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceRecord>, DataError>;
}

/// Extract closing prices in record order.
pub fn closes(records: &[PriceRecord]) -> Vec<f64> {
    records.iter().map(|r| r.close).collect()
}

/// Map-backed loader for tests and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    series: HashMap<String, Vec<PriceRecord>>,
}

impl InMemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register records for `symbol`, replacing any existing ones. Records are
    /// kept sorted by date.
    pub fn insert(&mut self, symbol: impl Into<String>, mut records: Vec<PriceRecord>) {
        records.sort_by_key(|r| r.date);
        self.series.insert(symbol.into(), records);
    }

    pub fn with_series(mut self, symbol: impl Into<String>, records: Vec<PriceRecord>) -> Self {
        self.insert(symbol, records);
        self
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}

impl DataLoader for InMemoryLoader {
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceRecord>, DataError> {
        if start > end {
            return Err(DataError::InvalidRange { start, end });
        }
        let records = self
            .series
            .get(symbol)
            .ok_or_else(|| DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;
        Ok(records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }
}
