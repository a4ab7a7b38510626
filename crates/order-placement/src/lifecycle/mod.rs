//! # System Lifecycle
//!
//! Starting, wiring and stopping the order system.
//!
//! ## Wiring
//!
//! The three record actors have no dependencies on each other. Each is created with its client,
//! spawned on its own task, and the clients are then handed to an
//! [`OrderService`](crate::service::OrderService), which is the only place that coordinates them.
//!
//! ```rust,ignore
//! let (user_actor, user_client) = user_actor::new(config.channel_buffer);
//! let (product_actor, product_client) = product_actor::new(config.channel_buffer);
//! let (order_actor, order_client) = order_actor::new(config.channel_buffer);
//!
//! let handles = vec![
//!     tokio::spawn(user_actor.run()),
//!     tokio::spawn(product_actor.run()),
//!     tokio::spawn(order_actor.run()),
//! ];
//!
//! let service = OrderService::new(user_client.clone(), product_client.clone(), order_client.clone(), payment);
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** (the service holds clones, so it goes too)
//! 2. **Actors detect closure** when `receiver.recv()` returns `None`
//! 3. **Await completion** of every actor task
//!
//! Requests already queued are answered before an actor exits.
//!
//! ## Configuration
//!
//! [`ServiceConfig`] is read from TOML, either directly or from the file named by
//! `ORDER_SERVICE_CONFIG`. See [`config`] for the fields.
//!
//! ## Tracing
//!
//! See [`setup_tracing`].

pub mod config;
pub mod order_system;
pub mod tracing;

pub use config::{ConfigError, ServiceConfig, CONFIG_ENV_VAR};
pub use order_system::OrderSystem;
pub use self::tracing::setup_tracing;
