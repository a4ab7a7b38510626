//! Type-safe wrappers around [`ResourceClient`](record_actor::ResourceClient).
//!
//! Each client implements [`RecordClient`](record_actor::RecordClient) for the generic
//! get/list/save, adds table-specific helpers, and implements the matching repository trait
//! from [`crate::service`].

pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use order_client::*;
pub use product_client::*;
pub use user_client::*;
