//! The failure taxonomy of order placement and product updates.

use crate::model::{OrderId, ProductId};
use thiserror::Error;

/// Every way a placement or product update can fail.
///
/// Each variant maps to its own [`ErrorCategory`], so callers can tell the kinds apart
/// without parsing messages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// Blank user id or non-positive quantity. Raised before any lookup.
    #[error("{0}")]
    InvalidArgument(String),

    /// No user has this external user id.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// No product has this id.
    #[error("Product not found with id: {0}")]
    ProductNotFound(ProductId),

    /// More units requested than are in stock.
    #[error("Only {available} items left in stock")]
    InsufficientStock { available: u32 },

    /// The payment step declined. Stock has already been reserved at this point.
    ///
    /// `recorded` carries the id of the FAILED order when failed attempts are persisted.
    /// `restocked` is true only when the reserved units were put back. If the restock or the
    /// FAILED-order write itself fails, this variant is still returned with the flag unset.
    #[error("Payment failed. Order not placed.")]
    PaymentFailed {
        recorded: Option<OrderId>,
        restocked: bool,
    },

    /// A backing store could not be reached or rejected the write.
    #[error("Store error: {0}")]
    Store(String),
}

/// Externally observable class of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidRequest,
    NotFound,
    InsufficientStock,
    PaymentDeclined,
    Unavailable,
}

/// What a caller can usefully do after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryHint {
    /// The same request will fail the same way.
    Never,
    /// A smaller quantity may succeed.
    WithSmallerQuantity,
    /// Resending the same request may succeed. It re-runs every check.
    SameRequest,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::InvalidArgument(_) => ErrorCategory::InvalidRequest,
            ServiceError::UserNotFound(_) | ServiceError::ProductNotFound(_) => {
                ErrorCategory::NotFound
            }
            ServiceError::InsufficientStock { .. } => ErrorCategory::InsufficientStock,
            ServiceError::PaymentFailed { .. } => ErrorCategory::PaymentDeclined,
            ServiceError::Store(_) => ErrorCategory::Unavailable,
        }
    }

    pub fn retry_hint(&self) -> RetryHint {
        self.category().retry_hint()
    }
}

impl ErrorCategory {
    pub fn retry_hint(self) -> RetryHint {
        match self {
            ErrorCategory::InvalidRequest | ErrorCategory::NotFound => RetryHint::Never,
            ErrorCategory::InsufficientStock => RetryHint::WithSmallerQuantity,
            ErrorCategory::PaymentDeclined | ErrorCategory::Unavailable => RetryHint::SameRequest,
        }
    }
}
