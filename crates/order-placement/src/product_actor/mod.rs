//! # Product Actor
//!
//! The product catalogue and its stock counters.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](record_actor::Record) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! The actor applies each save whole, but a read-check-write of stock spans several
//! requests. That sequence is made atomic one level up, by the per-product locks of
//! [`crate::service::StockLocks`].
//!
//! ## Usage
//!
//! ```rust
//! use order_placement::product_actor;
//! use order_placement::model::ProductDetails;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let product = client.create_product(ProductDetails::new("Widget", 29.99, 100)).await?;
//!     let id = product.id.expect("persisted products carry an id");
//!     assert_eq!(client.check_stock(id).await?, 100);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use record_actor::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
