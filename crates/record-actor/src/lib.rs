//! # Record Actor
//!
//! Building blocks for keeping tables of records behind actors. Each table lives in its own
//! Tokio task, is reached through a cheap, cloneable client, and answers a small
//! repository-shaped protocol: insert, save (upsert), get, find and list.
//!
//! ## Why actors for storage?
//!
//! - **Isolated state**: the task owns its `BTreeMap`; there is no shared memory to lock.
//! - **Sequential processing**: every request is applied whole before the next one starts,
//!   so a single insert or save can never be observed half-done.
//! - **Uniform API**: one generic loop serves every record type.
//!
//! What the actor does *not* give you is atomicity across requests. A caller that reads a
//! row, decides, and writes it back must bring its own serialization for that sequence.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`]) - identity, lookups, validation and unique keys of a type
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop that owns the table
//! 3. **Interface Layer** ([`ResourceClient`], [`RecordClient`]) - type-safe communication
//!
//! ```rust
//! use record_actor::{Record, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Account { id: Option<u64>, handle: String }
//!
//! #[derive(Debug)]
//! struct ByHandle(String);
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("handle must not be blank")]
//! struct AccountError;
//!
//! impl Record for Account {
//!     type Id = u64;
//!     type Query = ByHandle;
//!     type Error = AccountError;
//!
//!     fn id(&self) -> Option<u64> { self.id }
//!     fn with_id(self, id: u64) -> Self { Self { id: Some(id), ..self } }
//!     fn matches(&self, query: &ByHandle) -> bool { self.handle == query.0 }
//!
//!     fn validate(&self) -> Result<(), AccountError> {
//!         if self.handle.trim().is_empty() { Err(AccountError) } else { Ok(()) }
//!     }
//!
//!     fn conflicts_with(&self, other: &Self) -> bool { self.handle == other.handle }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Account>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let ada = client.insert(Account { id: None, handle: "ada".into() }).await.unwrap();
//!     let found = client.find(ByHandle("ada".into())).await.unwrap();
//!     assert_eq!(found.unwrap().id, ada.id);
//!
//!     // Unique key enforced by `conflicts_with`
//!     assert!(client.insert(Account { id: None, handle: "ada".into() }).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real `ResourceClient` answered from scripted expectations,
//! for testing code that talks to a store without running one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::RecordClient;
pub use entity::Record;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
