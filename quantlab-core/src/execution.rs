//! Order execution interface.
//!
//! `ExecutionHandler` is the seam between signal generation and a broker or
//! simulator. Quantity is signed: positive buys, negative sells.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub quantity: i64,
    #[serde(default)]
    pub order_type: OrderType,
}

impl OrderRequest {
    pub fn market(symbol: impl Into<String>, quantity: i64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            order_type: OrderType::Market,
        }
    }

    pub fn is_buy(&self) -> bool {
        self.quantity > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("order rejected: {0}")]
    Rejected(String),

    #[error("order for {symbol} has zero quantity")]
    ZeroQuantity { symbol: String },
}

/// Trait for order sinks (brokers, simulators).
pub trait ExecutionHandler: Send + Sync {
    fn send_order(&self, order: &OrderRequest) -> Result<(), ExecutionError>;
}

/// Records every accepted order in memory.
#[derive(Debug, Default)]
pub struct PaperExecutionHandler {
    orders: Mutex<Vec<OrderRequest>>,
}

impl PaperExecutionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of accepted orders, oldest first.
    pub fn orders(&self) -> Vec<OrderRequest> {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Net signed quantity per the recorded orders for `symbol`.
    pub fn net_position(&self, symbol: &str) -> i64 {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|o| o.symbol == symbol)
            .map(|o| o.quantity)
            .sum()
    }
}

impl ExecutionHandler for PaperExecutionHandler {
    fn send_order(&self, order: &OrderRequest) -> Result<(), ExecutionError> {
        if order.quantity == 0 {
            return Err(ExecutionError::ZeroQuantity {
                symbol: order.symbol.clone(),
            });
        }
        if order.symbol.trim().is_empty() {
            return Err(ExecutionError::Rejected("empty symbol".into()));
        }
        debug!(
            symbol = %order.symbol,
            quantity = order.quantity,
            order_type = ?order.order_type,
            "paper order accepted"
        );
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(order.clone());
        Ok(())
    }
}
