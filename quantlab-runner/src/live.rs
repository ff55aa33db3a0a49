//! Live signal dispatch.
//!
//! Re-runs a strategy over the price history seen so far and turns the most
//! recent signal into at most one market order.

use tracing::{debug, info};

use quantlab_core::execution::{ExecutionError, ExecutionHandler, OrderRequest};
use quantlab_core::strategy::{Signal, Strategy};
use quantlab_core::CoreError;

use crate::runner::RunError;

/// Sends one order per dispatch: `+quantity` on Buy, `-quantity` on Sell,
/// nothing on Hold.
#[derive(Debug)]
pub struct SignalDispatcher<S, E> {
    strategy: S,
    handler: E,
    symbol: String,
    quantity: i64,
}

impl<S: Strategy, E: ExecutionHandler> SignalDispatcher<S, E> {
    /// `quantity` is the unsigned order size and must be positive.
    pub fn new(
        strategy: S,
        handler: E,
        symbol: impl Into<String>,
        quantity: i64,
    ) -> Result<Self, ExecutionError> {
        let symbol = symbol.into();
        if quantity == 0 {
            return Err(ExecutionError::ZeroQuantity { symbol });
        }
        if quantity < 0 {
            return Err(ExecutionError::Rejected(format!(
                "order size must be positive, got {quantity}"
            )));
        }
        Ok(Self {
            strategy,
            handler,
            symbol,
            quantity,
        })
    }

    pub fn handler(&self) -> &E {
        &self.handler
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Evaluate `prices` and send the order implied by the last signal.
    ///
    /// Returns the order that was accepted, or `None` on Hold or empty history.
    pub fn dispatch(&self, prices: &[f64]) -> Result<Option<OrderRequest>, RunError> {
        let signals = self.strategy.generate_signals(prices);
        if signals.len() != prices.len() {
            return Err(CoreError::SignalLengthMismatch {
                expected: prices.len(),
                actual: signals.len(),
            }
            .into());
        }

        let quantity = match signals.last() {
            Some(Signal::Buy) => self.quantity,
            Some(Signal::Sell) => -self.quantity,
            Some(Signal::Hold) | None => {
                debug!(symbol = %self.symbol, strategy = self.strategy.name(), "no order");
                return Ok(None);
            }
        };

        let order = OrderRequest::market(self.symbol.clone(), quantity);
        self.handler.send_order(&order)?;
        info!(
            symbol = %order.symbol,
            quantity = order.quantity,
            strategy = self.strategy.name(),
            "order dispatched"
        );
        Ok(Some(order))
    }
}
