//! # Order Placement
//!
//! Places orders against a product catalogue without ever overselling stock.
//!
//! - **[model]**: [`User`](model::User), [`Product`](model::Product) and [`Order`](model::Order),
//!   each stored as a [`Record`](record_actor::Record).
//! - **[user_actor]**, **[product_actor]**, **[order_actor]**: one record actor per table.
//! - **[clients]**: typed clients over those actors, implementing the repository traits.
//! - **[service]**: the placement workflow and its failure taxonomy.
//! - **[lifecycle]**: configuration, wiring, shutdown and tracing setup.
//!
//! ## Testing
//!
//! [`record_actor::mock`] stands in for a store when a test needs to pin the exact requests the
//! service sends.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod service;
pub mod user_actor;
