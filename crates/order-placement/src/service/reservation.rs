//! # Inventory Reservation
//!
//! Every change to a product's stock goes through one of the functions here, each of which holds
//! that product's lock from the read to the write. Two callers on the same product therefore see
//! each other's committed stock, and stock can never go below zero.
//!
//! The lock only covers the read-check-write on the product store. Payment and order persistence
//! happen after it is released.

use super::error::ServiceError;
use super::repository::ProductRepository;
use crate::model::{Product, ProductDetails, ProductId};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// One async mutex per product, created the first time the product is touched.
#[derive(Debug, Default)]
pub struct StockLocks {
    locks: Mutex<HashMap<ProductId, Arc<tokio::sync::Mutex<()>>>>,
}

impl StockLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock guarding `id`, creating it if needed.
    pub fn lock_for(&self, id: ProductId) -> Arc<tokio::sync::Mutex<()>> {
        // The map is only touched for a lookup or insert, so a poisoned guard still holds a
        // consistent map.
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(id).or_default().clone()
    }

    /// Number of products that have a lock.
    pub fn tracked(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Takes `quantity` units out of stock and returns the updated product.
///
/// The product is re-read under the lock, so the check sees every earlier reservation.
pub async fn reserve<P>(
    products: &P,
    locks: &StockLocks,
    id: ProductId,
    quantity: u32,
) -> Result<Product, ServiceError>
where
    P: ProductRepository + ?Sized,
{
    let lock = locks.lock_for(id);
    let _guard = lock.lock().await;

    let mut product = load(products, id).await?;
    if product.stock < quantity {
        warn!(product_id = %id, requested = quantity, available = product.stock, "Insufficient stock");
        return Err(ServiceError::InsufficientStock {
            available: product.stock,
        });
    }

    product.stock -= quantity;
    product.updated_at = Utc::now();
    let saved = products.save_product(product).await?;
    info!(product_id = %id, reserved = quantity, remaining = saved.stock, "Stock reserved");
    Ok(saved)
}

/// Puts `quantity` units back after a declined payment.
pub async fn release<P>(
    products: &P,
    locks: &StockLocks,
    id: ProductId,
    quantity: u32,
) -> Result<Product, ServiceError>
where
    P: ProductRepository + ?Sized,
{
    let lock = locks.lock_for(id);
    let _guard = lock.lock().await;

    let mut product = load(products, id).await?;
    product.stock = product.stock.saturating_add(quantity);
    product.updated_at = Utc::now();
    let saved = products.save_product(product).await?;
    info!(product_id = %id, released = quantity, remaining = saved.stock, "Stock released");
    Ok(saved)
}

/// Overwrites a product's fields, stock included, under the same lock reservations take.
///
/// Unknown ids are rejected before a lock is created for them. Products are never deleted, so
/// the read under the lock still finds the product.
pub async fn replace<P>(
    products: &P,
    locks: &StockLocks,
    id: ProductId,
    details: ProductDetails,
) -> Result<Product, ServiceError>
where
    P: ProductRepository + ?Sized,
{
    load(products, id).await?;

    let lock = locks.lock_for(id);
    let _guard = lock.lock().await;

    let mut product = load(products, id).await?;
    product.apply(details);
    let saved = products.save_product(product).await?;
    info!(product_id = %id, stock = saved.stock, "Product replaced");
    Ok(saved)
}

async fn load<P>(products: &P, id: ProductId) -> Result<Product, ServiceError>
where
    P: ProductRepository + ?Sized,
{
    debug!(product_id = %id, "Reading product under lock");
    products
        .find_product_by_id(id)
        .await?
        .ok_or(ServiceError::ProductNotFound(id))
}
