use order_placement::lifecycle::{OrderSystem, ServiceConfig};
use order_placement::model::{OrderStatus, ProductDetails, ProductId, User};
use order_placement::user_actor::UserError;
use order_placement::service::{
    ErrorCategory, PaymentDecision, PaymentFailurePolicy, RetryHint, ServiceError, StockPolicy,
};
use record_actor::RecordClient;

async fn system_with(config: ServiceConfig, payment: PaymentDecision) -> OrderSystem {
    let system = OrderSystem::with_payment(config, payment);
    system
        .user_client
        .create_user(User::new("user123", "Alice", "alice@example.com", "secret"))
        .await
        .expect("Failed to create user");
    system
}

async fn add_product(system: &OrderSystem, price: f64, stock: u32) -> ProductId {
    system
        .product_client
        .create_product(ProductDetails::new("Laptop", price, stock))
        .await
        .expect("Failed to create product")
        .id
        .expect("Product stored without id")
}

async fn stock_of(system: &OrderSystem, id: ProductId) -> u32 {
    system
        .product_client
        .check_stock(id)
        .await
        .expect("Failed to check stock")
}

/// Full placement with every actor running.
#[tokio::test]
async fn test_successful_placement() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 50000.0, 10).await;

    let order = system
        .service
        .place_order(laptop, "user123", 2)
        .await
        .expect("Placement failed");

    assert!(order.id.is_some());
    assert_eq!(order.user_id, "user123");
    assert_eq!(order.quantity, 2);
    assert_eq!(order.total_amount, 100000.0);
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.product.id, laptop);
    assert_eq!(order.product.price, 50000.0);
    assert_eq!(stock_of(&system, laptop).await, 8);

    let orders = system.service.get_all_orders().await.unwrap();
    assert_eq!(orders, vec![order]);

    // Users are only read
    let users = system.user_client.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].user_id, "user123");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_insufficient_stock_changes_nothing() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 50000.0, 1).await;

    let err = system
        .service
        .place_order(laptop, "user123", 2)
        .await
        .unwrap_err();

    assert_eq!(err, ServiceError::InsufficientStock { available: 1 });
    assert!(err.to_string().contains('1'));
    assert_eq!(err.retry_hint(), RetryHint::WithSmallerQuantity);
    assert_eq!(stock_of(&system, laptop).await, 1);
    assert!(system.service.get_all_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 50000.0, 10).await;

    let err = system
        .service
        .place_order(ProductId(99), "user123", 1)
        .await
        .unwrap_err();

    assert_eq!(err, ServiceError::ProductNotFound(ProductId(99)));
    assert_eq!(err.to_string(), "Product not found with id: 99");
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert_eq!(stock_of(&system, laptop).await, 10);
    assert!(system.service.get_all_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_user() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 50000.0, 10).await;

    let err = system
        .service
        .place_order(laptop, "invalidUser", 1)
        .await
        .unwrap_err();

    assert_eq!(err, ServiceError::UserNotFound("invalidUser".to_string()));
    assert_eq!(err.retry_hint(), RetryHint::Never);
    assert_eq!(stock_of(&system, laptop).await, 10);
    assert!(system.service.get_all_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_arguments_touch_nothing() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 50000.0, 10).await;

    for (user_id, quantity) in [("", 1), ("   ", 1), ("user123", 0), ("user123", -3)] {
        let err = system
            .service
            .place_order(laptop, user_id, quantity)
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidRequest, "{user_id:?} {quantity}");
    }

    assert_eq!(stock_of(&system, laptop).await, 10);
    assert!(system.service.get_all_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// A declined payment keeps the reserved stock out by default and persists no order.
#[tokio::test]
async fn test_declined_payment_consumes_stock() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_decline()).await;
    let laptop = add_product(&system, 50000.0, 10).await;

    let err = system
        .service
        .place_order(laptop, "user123", 2)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::PaymentFailed {
            recorded: None,
            restocked: false
        }
    );
    assert_eq!(err.to_string(), "Payment failed. Order not placed.");
    assert_eq!(err.retry_hint(), RetryHint::SameRequest);
    assert_eq!(stock_of(&system, laptop).await, 8);
    assert!(system.service.get_all_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_declined_payment_with_release_and_record() {
    let config = ServiceConfig {
        stock_policy: StockPolicy::Release,
        payment_failure: PaymentFailurePolicy::RecordFailed,
        ..ServiceConfig::default()
    };
    let system = system_with(config, PaymentDecision::always_decline()).await;
    let laptop = add_product(&system, 50000.0, 10).await;

    let err = system
        .service
        .place_order(laptop, "user123", 2)
        .await
        .unwrap_err();

    let order_id = match err {
        ServiceError::PaymentFailed {
            recorded: Some(id),
            restocked: true,
        } => id,
        other => panic!("expected a recorded payment failure, got {other:?}"),
    };
    assert_eq!(stock_of(&system, laptop).await, 10);

    let orders = system.service.get_all_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, Some(order_id));
    assert_eq!(orders[0].status, OrderStatus::Failed);
    assert_eq!(orders[0].total_amount, 100000.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_get_all_orders_is_stable() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 10.0, 10).await;

    for quantity in 1..=3 {
        system
            .service
            .place_order(laptop, "user123", quantity)
            .await
            .unwrap();
    }

    let first = system.service.get_all_orders().await.unwrap();
    let second = system.service.get_all_orders().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|o| o.quantity).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_product_keeps_history_intact() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 50000.0, 10).await;
    let original = system
        .product_client
        .get(laptop)
        .await
        .unwrap()
        .expect("Product missing");

    let order = system
        .service
        .place_order(laptop, "user123", 2)
        .await
        .unwrap();

    let updated = system
        .service
        .update_product(laptop, ProductDetails::new("Laptop Pro", 65000.0, 3))
        .await
        .unwrap();

    assert_eq!(updated.id, Some(laptop));
    assert_eq!(updated.name, "Laptop Pro");
    assert_eq!(updated.stock, 3);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);

    // The earlier order still carries the price it was placed at
    let orders = system.service.get_all_orders().await.unwrap();
    assert_eq!(orders, vec![order]);
    assert_eq!(orders[0].product.price, 50000.0);

    let err = system
        .service
        .update_product(ProductId(42), ProductDetails::new("Ghost", 1.0, 1))
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::ProductNotFound(ProductId(42)));

    let err = system
        .service
        .update_product(laptop, ProductDetails::new("", 1.0, 1))
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidRequest);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_updates_to_unknown_products_leave_no_locks() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 50000.0, 10).await;

    for raw in 1000..1500 {
        let err = system
            .service
            .update_product(ProductId(raw), ProductDetails::new("Ghost", 1.0, 1))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::ProductNotFound(ProductId(raw)));
    }
    assert_eq!(system.service.stock_locks().tracked(), 0);

    system
        .service
        .place_order(laptop, "user123", 1)
        .await
        .unwrap();
    assert_eq!(system.service.stock_locks().tracked(), 1);

    system.shutdown().await.unwrap();
}

/// A restock issued while placements are in flight is applied whole, never half-overwritten.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_update_product_during_concurrent_placements() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 100.0, 10).await;

    let mut handles = Vec::new();
    for _ in 0..30 {
        let service = system.service.clone();
        handles.push(tokio::spawn(async move {
            service.place_order(laptop, "user123", 1).await
        }));
    }
    let updater = {
        let service = system.service.clone();
        tokio::spawn(async move {
            service
                .update_product(laptop, ProductDetails::new("Laptop", 100.0, 100))
                .await
        })
    };

    let mut placed = 0u32;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => placed += 1,
            Err(ServiceError::InsufficientStock { available: 0 }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    let updated = updater.await.unwrap().expect("Update failed");
    assert_eq!(updated.stock, 100);

    // Placements after the restock come off 100, the rest came off the original 10.
    let stock = stock_of(&system, laptop).await;
    assert!(stock <= 100);
    let after_restock = 100 - stock;
    assert!(after_restock <= placed);
    assert!(placed - after_restock <= 10);

    let orders = system.service.get_all_orders().await.unwrap();
    assert_eq!(orders.len() as u32, placed);

    system.shutdown().await.unwrap();
}

/// Many callers racing for one product never take more than the stock.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_placements_never_oversell() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;
    let laptop = add_product(&system, 100.0, 20).await;

    let mut handles = Vec::new();
    for i in 0..40 {
        let service = system.service.clone();
        let quantity = if i % 2 == 0 { 1 } else { 2 };
        handles.push(tokio::spawn(async move {
            (quantity, service.place_order(laptop, "user123", quantity).await)
        }));
    }

    let mut reserved = 0u32;
    for handle in handles {
        let (quantity, result) = handle.await.unwrap();
        match result {
            Ok(order) => {
                assert_eq!(order.total_amount, 100.0 * quantity as f64);
                reserved += quantity as u32;
            }
            Err(ServiceError::InsufficientStock { available }) => {
                assert!((available as i64) < quantity)
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert!(reserved <= 20);
    assert_eq!(stock_of(&system, laptop).await, 20 - reserved);

    let orders = system.service.get_all_orders().await.unwrap();
    assert_eq!(orders.iter().map(|o| o.quantity).sum::<u32>(), reserved);

    system.shutdown().await.unwrap();
}

/// With random payments, every reservation is either an order or a consumed decline.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_placements_with_random_payment() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::random(0.5)).await;
    let laptop = add_product(&system, 100.0, 15).await;

    let mut handles = Vec::new();
    for _ in 0..30 {
        let service = system.service.clone();
        handles.push(tokio::spawn(async move {
            service.place_order(laptop, "user123", 1).await
        }));
    }

    let mut placed = 0u32;
    let mut declined = 0u32;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => placed += 1,
            Err(ServiceError::PaymentFailed {
                recorded: None,
                restocked: false,
            }) => declined += 1,
            Err(ServiceError::InsufficientStock { available: 0 }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(placed + declined, 15);
    assert_eq!(stock_of(&system, laptop).await, 0);
    assert_eq!(
        system.service.get_all_orders().await.unwrap().len() as u32,
        placed
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_user_id_rejected() {
    let system = system_with(ServiceConfig::default(), PaymentDecision::always_approve()).await;

    let err = system
        .user_client
        .create_user(User::new("user123", "Imposter", "imp@example.com", "secret"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::AlreadyExists("user123".to_string()));

    let found = system
        .user_client
        .find_by_user_id("user123")
        .await
        .unwrap()
        .expect("Original user missing");
    assert_eq!(found.name, "Alice");

    system.shutdown().await.unwrap();
}
