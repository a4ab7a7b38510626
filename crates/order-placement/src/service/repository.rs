//! The storage interfaces order placement consumes.
//!
//! The placement core never touches a store directly; it goes through these traits. The
//! record-actor clients in [`crate::clients`] implement them, and so could any other store.

use super::error::ServiceError;
use crate::model::{Order, Product, ProductId, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks a user up by the externally supplied user id.
    async fn find_user_by_external_id(&self, user_id: &str) -> Result<Option<User>, ServiceError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_product_by_id(&self, id: ProductId) -> Result<Option<Product>, ServiceError>;

    /// Upserts a product, keeping its identity, and returns the persisted form.
    async fn save_product(&self, product: Product) -> Result<Product, ServiceError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts a new order and returns it with its assigned id.
    async fn save_order(&self, order: Order) -> Result<Order, ServiceError>;

    async fn list_all_orders(&self) -> Result<Vec<Order>, ServiceError>;
}
