use super::config::ServiceConfig;
use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::service::{OrderService, PaymentDecision};
use tracing::{error, info};

/// Starts the record actors and wires an [`OrderService`] over their clients.
///
/// The store clients are public so callers can seed users and products directly. Orders are
/// expected to go through [`OrderSystem::service`].
///
/// # Example
///
/// ```rust
/// use order_placement::lifecycle::{OrderSystem, ServiceConfig};
/// use order_placement::model::{ProductDetails, User};
/// use order_placement::service::PaymentDecision;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::with_payment(ServiceConfig::default(), PaymentDecision::always_approve());
///
///     system.user_client.create_user(User::new("user123", "Alice", "alice@example.com", "secret")).await?;
///     let laptop = system.product_client.create_product(ProductDetails::new("Laptop", 50000.0, 10)).await?;
///     let id = laptop.id.expect("persisted products carry an id");
///
///     let order = system.service.place_order(id, "user123", 2).await?;
///     assert_eq!(order.total_amount, 100000.0);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub service: OrderService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with a payment step that approves at the configured rate.
    pub fn new(config: ServiceConfig) -> Self {
        let payment = PaymentDecision::random(config.payment_success_rate);
        Self::with_payment(config, payment)
    }

    /// Starts the system with an explicit payment decision.
    pub fn with_payment(config: ServiceConfig, payment: PaymentDecision) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(config.channel_buffer);
        let (product_actor, product_client) = crate::product_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        let service = OrderService::new(
            user_client.clone(),
            product_client.clone(),
            order_client.clone(),
            payment,
        )
        .with_stock_policy(config.stock_policy)
        .with_payment_failure_policy(config.payment_failure);

        info!(
            channel_buffer = config.channel_buffer,
            stock_policy = ?config.stock_policy,
            payment_failure = ?config.payment_failure,
            "Order system started"
        );

        Self {
            user_client,
            product_client,
            order_client,
            service,
            handles,
        }
    }

    /// Drops every client and waits for the actors to drain and exit.
    ///
    /// Clones of the service or clients held elsewhere keep their actors alive, so drop them
    /// first or this will wait on them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
