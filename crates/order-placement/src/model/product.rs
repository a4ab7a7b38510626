//! Represents a product in the inventory.
//!
//! # Record Store
//! This struct implements the [`Record`](record_actor::Record) trait,
//! so it can be kept by a [`ResourceActor`](record_actor::ResourceActor).
//!
//! Stock only ever goes down through the reservation step of order placement, and is only
//! overwritten wholesale through a product update. Both run under the same per-product lock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates an unsaved Product, stamping both timestamps with the current time.
    pub fn new(details: ProductDetails) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: details.name,
            price: details.price,
            stock: details.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every mutable field. Identity and `created_at` are kept.
    pub fn apply(&mut self, details: ProductDetails) {
        self.name = details.name;
        self.price = details.price;
        self.stock = details.stock;
        self.updated_at = Utc::now();
    }
}

/// The caller-supplied fields of a Product, used both for creation and for full replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl ProductDetails {
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }
}
