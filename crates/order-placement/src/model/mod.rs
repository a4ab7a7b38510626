//! Plain data types stored by the record actors and passed through the placement workflow.
//!
//! Each type implements [`Record`](record_actor::Record) in its actor module
//! (see [`crate::user_actor`], [`crate::product_actor`], [`crate::order_actor`]).

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;
