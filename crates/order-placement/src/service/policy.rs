//! What placement does after the payment step declines.

use serde::Deserialize;

/// Whether reserved stock comes back when payment is declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockPolicy {
    /// Reserved units stay out of stock.
    #[default]
    Consume,
    /// Reserved units are put back under the product lock.
    Release,
}

/// Whether a declined payment leaves an order record behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFailurePolicy {
    /// Nothing is persisted.
    #[default]
    Reject,
    /// A FAILED order is persisted and its id returned with the error.
    RecordFailed,
}
