//! Represents a customer order.
//!
//! # Record Store
//! This struct implements the [`Record`](record_actor::Record) trait.
//! Orders are write-once: the placement workflow inserts them and nothing updates them.

use crate::model::{Product, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Failed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Placed => write!(f, "PLACED"),
            OrderStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// The product as it was when stock was reserved.
///
/// Later edits to the product do not reach back into orders that captured it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl ProductSnapshot {
    pub fn capture(id: ProductId, product: &Product) -> Self {
        Self {
            id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<OrderId>,
    pub user_id: String,
    pub quantity: u32,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub product: ProductSnapshot,
}

impl Order {
    /// Creates an unsaved Order for `quantity` units of `product`.
    ///
    /// `total_amount` is the snapshot price times the quantity, and `created_at` is now.
    pub fn new(
        user_id: impl Into<String>,
        quantity: u32,
        product: ProductSnapshot,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            quantity,
            total_amount: product.price * f64::from(quantity),
            status,
            created_at: Utc::now(),
            product,
        }
    }
}
