use order_placement::lifecycle::{setup_tracing, OrderSystem, ServiceConfig};
use order_placement::model::{ProductDetails, User};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServiceConfig::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting order system");

    let system = OrderSystem::new(config);

    let user = system
        .user_client
        .create_user(User::new("user123", "Alice", "alice@example.com", "secret"))
        .await
        .map_err(|e| e.to_string())?;
    info!(user_id = %user.user_id, "User created");

    let laptop = system
        .product_client
        .create_product(ProductDetails::new("Laptop", 50000.0, 10))
        .await
        .map_err(|e| e.to_string())?;
    let product_id = laptop.id.ok_or("product was stored without an id")?;
    info!(%product_id, stock = laptop.stock, "Product created");

    let attempts: [(&str, i64); 5] = [
        ("user123", 2),
        ("user123", 3),
        ("user123", 0),
        ("ghost", 1),
        ("user123", 50),
    ];

    for (user_id, quantity) in attempts {
        let span = tracing::info_span!("order_request", user_id, quantity);
        let result = system
            .service
            .place_order(product_id, user_id, quantity)
            .instrument(span)
            .await;

        match result {
            Ok(order) => info!(
                order_id = ?order.id,
                total = order.total_amount,
                status = %order.status,
                "Order placed"
            ),
            Err(e) => warn!(
                error = %e,
                category = ?e.category(),
                retry = ?e.retry_hint(),
                "Order rejected"
            ),
        }
    }

    match system.product_client.check_stock(product_id).await {
        Ok(stock) => info!(%product_id, stock, "Remaining stock"),
        Err(e) => error!(error = %e, "Stock check failed"),
    }

    let catalogue = system
        .product_client
        .list_products()
        .await
        .map_err(|e| e.to_string())?;
    info!(products = catalogue.len(), "Catalogue");

    let orders = system
        .service
        .get_all_orders()
        .await
        .map_err(|e| e.to_string())?;
    for order in &orders {
        info!(order_id = ?order.id, user_id = %order.user_id, quantity = order.quantity, status = %order.status, "Order");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
