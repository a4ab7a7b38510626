//! # Record Trait
//!
//! The `Record` trait is the contract every stored type (User, Product, Order, …) implements
//! to be kept by the generic `ResourceActor`. It names the identifier type, the secondary
//! lookup payload, and the validation error, and provides the hooks the actor calls on every
//! write (`validate`, `conflicts_with`).
//!
//! # Architecture Note
//! By defining one contract for every record type, the store loop in
//! [`ResourceActor`](crate::ResourceActor) is written *once* and reused for every table.
//! Associated types keep the tables apart: a `User` store only accepts `User` records and
//! `UserQuery` lookups, and the compiler rejects anything else.
//!
//! # Provided Methods (Hooks)
//! - [`Record::validate`]
//! - [`Record::conflicts_with`]
//!
//! Both default to "accept everything". Override them to enforce field rules or unique keys.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored type must implement to be managed by `ResourceActor`.
///
/// Identity is optional on the value itself: a record without an id has never been
/// persisted, and the actor assigns one from its own counter on insert.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u64` so the actor can generate ids, and ordered so
    /// listings come back in a stable order.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// Payload for secondary lookups (e.g. "user by external user id").
    ///
    /// Use [`std::convert::Infallible`] when the record has no lookups besides its id.
    type Query: Send + Sync + Debug;

    /// The validation error for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The persisted identity, if any.
    fn id(&self) -> Option<Self::Id>;

    /// Returns the record carrying the given identity.
    fn with_id(self, id: Self::Id) -> Self;

    /// Whether this record satisfies a secondary lookup.
    fn matches(&self, query: &Self::Query) -> bool;

    /// Field-level validation, run before every insert and save.
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Whether storing `self` next to `other` would break a unique key.
    ///
    /// Only called against records with a different identity.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}
