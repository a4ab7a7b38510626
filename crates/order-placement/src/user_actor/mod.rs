//! # User Actor
//!
//! The table of registered users. Order placement only reads from it, looking users up by
//! their external `user_id`.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](record_actor::Record) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_placement::user_actor;
//! use order_placement::model::User;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let user = User::new("alice01", "Alice", "alice@example.com", "secret");
//!     let saved = client.create_user(user).await?;
//!     assert!(saved.id.is_some());
//!
//!     let found = client.find_by_user_id("alice01").await?;
//!     assert_eq!(found, Some(saved));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use record_actor::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
