//! Builds the order for a reservation and hands it to the order store.

use super::error::ServiceError;
use super::repository::OrderRepository;
use crate::model::{Order, OrderStatus, Product, ProductId, ProductSnapshot};
use tracing::info;

/// Persists an order for `quantity` units of the reserved `product`.
///
/// The total is taken from the price the product had when its stock was reserved.
pub async fn record_order<O>(
    orders: &O,
    user_id: &str,
    quantity: u32,
    product_id: ProductId,
    product: &Product,
    status: OrderStatus,
) -> Result<Order, ServiceError>
where
    O: OrderRepository + ?Sized,
{
    let snapshot = ProductSnapshot::capture(product_id, product);
    let order = orders
        .save_order(Order::new(user_id, quantity, snapshot, status))
        .await?;
    info!(
        order_id = ?order.id,
        %status,
        total = order.total_amount,
        "Order recorded"
    );
    Ok(order)
}
