//! # Order Client
//!
//! High-level API for the `Order` table.
use crate::model::Order;
use crate::order_actor::OrderError;
use crate::service::{OrderRepository, ServiceError};
use async_trait::async_trait;
use record_actor::{FrameworkError, RecordClient, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Inserts an order; the store assigns its id.
    #[instrument(skip(self, order), fields(user_id = %order.user_id, product_id = %order.product.id))]
    pub async fn create_order(&self, order: Order) -> Result<Order, OrderError> {
        debug!(?order, "create_order called");
        self.inner.insert(order).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl RecordClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl OrderRepository for OrderClient {
    async fn save_order(&self, order: Order) -> Result<Order, ServiceError> {
        self.create_order(order)
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))
    }

    async fn list_all_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.list()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))
    }
}
