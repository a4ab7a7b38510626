//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # placements, reservations and store writes
//! RUST_LOG=debug cargo run    # plus every store read and request payload
//! ```
//!
//! Store actors run on their own tasks, outside the caller's span, and tag their lines with
//! `entity_type` instead of a module path. A placement at
//! `info` reads roughly like:
//!
//! ```text
//! INFO Saved entity_type="Product" id=Some(ProductId(1))
//! INFO place_order{product_id=ProductId(1) user_id="user123" quantity=2}: Stock reserved product_id=1 reserved=2 remaining=8
//! INFO Inserted entity_type="Order" id=Some(OrderId(1)) size=1
//! INFO place_order{product_id=ProductId(1) user_id="user123" quantity=2}: Order recorded order_id=Some(OrderId(1)) status=PLACED total=100000.0
//! ```
//!
//! Rejections (blank ids, unknown users or products, short stock, declined payments) are logged
//! at `warn` inside the same span.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the store instead
        .compact()
        .init();
}
