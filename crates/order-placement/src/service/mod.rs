//! # Order Placement
//!
//! [`OrderService`] runs the placement workflow on top of the three repositories:
//!
//! ```text
//! validate -> find user -> find product -> reserve stock -> payment -> record order
//! ```
//!
//! Each step short-circuits with its own [`ServiceError`] variant. Only the reservation step
//! mutates a product, and it does so under the product's entry in [`StockLocks`]. Payment and
//! order persistence run after that lock is released.
//!
//! What happens to reserved stock on a declined payment, and whether a FAILED order is kept,
//! are chosen with [`StockPolicy`] and [`PaymentFailurePolicy`]. The defaults leave the stock
//! consumed and persist nothing.

mod error;
mod finalizer;
mod payment;
mod policy;
mod repository;
mod reservation;
mod validator;

pub use error::{ErrorCategory, RetryHint, ServiceError};
pub use payment::PaymentDecision;
pub use policy::{PaymentFailurePolicy, StockPolicy};
pub use repository::{OrderRepository, ProductRepository, UserRepository};
pub use reservation::StockLocks;
pub use validator::{validate_details, validate_request};

use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::model::{Order, OrderStatus, Product, ProductDetails, ProductId};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// The placement workflow, generic over where users, products and orders live.
///
/// Cloning is cheap and clones share the same [`StockLocks`], so one service can be handed to
/// many concurrent callers.
#[derive(Clone)]
pub struct OrderService<U = UserClient, P = ProductClient, O = OrderClient> {
    users: U,
    products: P,
    orders: O,
    locks: Arc<StockLocks>,
    payment: PaymentDecision,
    stock_policy: StockPolicy,
    payment_failure: PaymentFailurePolicy,
}

impl<U, P, O> OrderService<U, P, O>
where
    U: UserRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(users: U, products: P, orders: O, payment: PaymentDecision) -> Self {
        Self {
            users,
            products,
            orders,
            locks: Arc::new(StockLocks::new()),
            payment,
            stock_policy: StockPolicy::default(),
            payment_failure: PaymentFailurePolicy::default(),
        }
    }

    pub fn with_stock_policy(mut self, policy: StockPolicy) -> Self {
        self.stock_policy = policy;
        self
    }

    pub fn with_payment_failure_policy(mut self, policy: PaymentFailurePolicy) -> Self {
        self.payment_failure = policy;
        self
    }

    /// The per-product lock table shared by every clone of this service.
    pub fn stock_locks(&self) -> &StockLocks {
        &self.locks
    }

    /// Places an order for `quantity` units of `product_id` on behalf of `user_id`.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidArgument`] for a blank user id or a quantity below one.
    /// - [`ServiceError::UserNotFound`] / [`ServiceError::ProductNotFound`] when a lookup misses.
    /// - [`ServiceError::InsufficientStock`] carrying the stock that is actually left.
    /// - [`ServiceError::PaymentFailed`] after stock has been reserved.
    /// - [`ServiceError::Store`] if a store cannot be reached.
    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        product_id: ProductId,
        user_id: &str,
        quantity: i64,
    ) -> Result<Order, ServiceError> {
        let quantity = validate_request(user_id, quantity).inspect_err(|e| {
            warn!(error = %e, "Rejected request");
        })?;

        if self.users.find_user_by_external_id(user_id).await?.is_none() {
            warn!("Unknown user");
            return Err(ServiceError::UserNotFound(user_id.to_string()));
        }
        if self.products.find_product_by_id(product_id).await?.is_none() {
            warn!("Unknown product");
            return Err(ServiceError::ProductNotFound(product_id));
        }

        let reserved =
            reservation::reserve(&self.products, &self.locks, product_id, quantity).await?;

        if !self.payment.approve() {
            return Err(self
                .payment_declined(product_id, user_id, quantity, &reserved)
                .await);
        }
        debug!("Payment approved");

        finalizer::record_order(
            &self.orders,
            user_id,
            quantity,
            product_id,
            &reserved,
            OrderStatus::Placed,
        )
        .await
    }

    /// Applies the configured policies and builds the error to return.
    ///
    /// Always yields [`ServiceError::PaymentFailed`]. A store failure while restocking or
    /// recording is logged and reflected in the flags, never returned in its place.
    async fn payment_declined(
        &self,
        product_id: ProductId,
        user_id: &str,
        quantity: u32,
        reserved: &Product,
    ) -> ServiceError {
        warn!(stock_policy = ?self.stock_policy, "Payment declined");

        let restocked = match self.stock_policy {
            StockPolicy::Consume => false,
            StockPolicy::Release => {
                match reservation::release(&self.products, &self.locks, product_id, quantity)
                    .await
                {
                    Ok(_) => true,
                    Err(e) => {
                        error!(error = %e, reserved = quantity, "Restock after declined payment failed");
                        false
                    }
                }
            }
        };

        let recorded = match self.payment_failure {
            PaymentFailurePolicy::Reject => None,
            PaymentFailurePolicy::RecordFailed => match finalizer::record_order(
                &self.orders,
                user_id,
                quantity,
                product_id,
                reserved,
                OrderStatus::Failed,
            )
            .await
            {
                Ok(order) => order.id,
                Err(e) => {
                    error!(error = %e, "Recording the failed order failed");
                    None
                }
            },
        };

        ServiceError::PaymentFailed {
            recorded,
            restocked,
        }
    }

    /// Every order in the store, in id order.
    #[instrument(skip(self))]
    pub async fn get_all_orders(&self) -> Result<Vec<Order>, ServiceError> {
        let orders = self.orders.list_all_orders().await?;
        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Replaces a product's name, price and stock, keeping its id and creation time.
    ///
    /// Runs under the same per-product lock as reservations.
    #[instrument(skip(self, details))]
    pub async fn update_product(
        &self,
        id: ProductId,
        details: ProductDetails,
    ) -> Result<Product, ServiceError> {
        validate_details(&details)?;
        let product = reservation::replace(&self.products, &self.locks, id, details).await?;
        info!(stock = product.stock, "Product updated");
        Ok(product)
    }
}
