//! Order placement workflow tests.
//!
//! Exercises validation, identity fallback, pricing, and the commit
//! payload handed to the unit of work, all against mocks.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use rust_decimal::Decimal;

use tiffin_api::config::Config;
use tiffin_api::domain::{CartLine, Order, OrderLine, OrderTotals, User};
use tiffin_api::errors::AppError;
use tiffin_api::infra::{MockOrderRepository, MockUnitOfWork, MockUserRepository};
use tiffin_api::services::{OrderService, OrderWorkflow, PlaceOrder};

fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/test".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        restaurant_name: "Test Kitchen".to_string(),
    }
}

fn test_user() -> User {
    User {
        id: "user-1".to_string(),
        email: "priya@example.com".to_string(),
        password: "secret".to_string(),
        name: "Priya".to_string(),
        restaurant_name: "Saravana Bhavan".to_string(),
        phone: Some("0712345678".to_string()),
        address: Some("12 Temple Road".to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn cart_line(id: &str, unit_price: Decimal, quantity: u32) -> CartLine {
    CartLine {
        id: id.to_string(),
        title: "Idli Batter".to_string(),
        item_type: None,
        unit_price,
        units: "KG".to_string(),
        has_vat: true,
        quantity,
    }
}

/// Unit of work mock whose user lookups resolve to the given user.
fn uow_with_user(user: Option<User>) -> MockUnitOfWork {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |_| Ok(user.clone()));
    let users = Arc::new(users);

    let mut uow = MockUnitOfWork::new();
    uow.expect_users().returning(move || users.clone());
    uow
}

#[tokio::test]
async fn test_place_order_empty_cart_rejected() {
    let mut uow = uow_with_user(Some(test_user()));
    uow.expect_commit_order().times(0);

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let result = service.place_order(PlaceOrder::default()).await;

    match result.unwrap_err() {
        AppError::Validation(msg) => assert_eq!(msg, "Your cart is empty"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_place_order_requires_email_for_guest() {
    let mut uow = uow_with_user(None);
    uow.expect_commit_order().times(0);

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let result = service
        .place_order(PlaceOrder {
            items: vec![cart_line("item-1", Decimal::new(100, 0), 1)],
            ..Default::default()
        })
        .await;

    match result.unwrap_err() {
        AppError::Validation(msg) => {
            assert_eq!(msg, "Please enter your email before placing the order.")
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_place_order_success_commits_everything() {
    let mut uow = uow_with_user(Some(test_user()));
    uow.expect_commit_order()
        .withf(|commit| {
            commit.order.subtotal == Decimal::new(20000, 2)
                && commit.order.tax == Decimal::new(4000, 2)
                && commit.order.total_price == Decimal::new(24000, 2)
                && commit.clear_cart_for.as_deref() == Some("user-1")
                && commit.decrements == vec![("item-1".to_string(), 2)]
        })
        .times(1)
        .returning(|_| Ok(()));

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let order = service
        .place_order(PlaceOrder {
            user_id: Some("user-1".to_string()),
            items: vec![cart_line("item-1", Decimal::new(100, 0), 2)],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(order.user_id, "user-1");
    assert_eq!(order.name, "Priya");
    assert_eq!(order.restaurant_name, "Saravana Bhavan");
    // Contact details fall back to the stored account
    assert_eq!(order.email, "priya@example.com");
    assert_eq!(order.phone, "0712345678");
    assert_eq!(order.address, "12 Temple Road");
    assert_eq!(order.order_status, "pending");
    assert_eq!(order.source, "mobile");
    assert_eq!(order.items.len(), 1);
}

#[tokio::test]
async fn test_guest_order_skips_cart_clear() {
    let mut uow = uow_with_user(None);
    uow.expect_commit_order()
        .withf(|commit| {
            commit.clear_cart_for.is_none() && commit.order.user_id == "guest"
        })
        .times(1)
        .returning(|_| Ok(()));

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let order = service
        .place_order(PlaceOrder {
            items: vec![cart_line("item-1", Decimal::new(50, 0), 1)],
            email: Some("walkin@example.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(order.user_id, "guest");
    assert_eq!(order.name, "Anonymous");
    assert_eq!(order.restaurant_name, "Test Kitchen");
}

#[tokio::test]
async fn test_stale_user_id_degrades_to_guest_identity() {
    // The account lookup misses but the order still goes through, and
    // the cart row for that id is still cleared
    let mut uow = uow_with_user(None);
    uow.expect_commit_order()
        .withf(|commit| commit.clear_cart_for.as_deref() == Some("ghost-id"))
        .times(1)
        .returning(|_| Ok(()));

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let order = service
        .place_order(PlaceOrder {
            user_id: Some("ghost-id".to_string()),
            items: vec![cart_line("item-1", Decimal::new(50, 0), 1)],
            email: Some("ghost@example.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(order.user_id, "ghost-id");
    assert_eq!(order.name, "Anonymous");
}

#[tokio::test]
async fn test_lines_without_ids_are_not_decremented() {
    let mut uow = uow_with_user(Some(test_user()));
    uow.expect_commit_order()
        .withf(|commit| commit.decrements == vec![("item-2".to_string(), 3)])
        .times(1)
        .returning(|_| Ok(()));

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let result = service
        .place_order(PlaceOrder {
            user_id: Some("user-1".to_string()),
            items: vec![
                cart_line("", Decimal::new(10, 0), 1),
                cart_line("item-2", Decimal::new(20, 0), 3),
            ],
            ..Default::default()
        })
        .await;

    assert!(result.is_ok());
    // Both lines are still priced into the order
    assert_eq!(result.unwrap().items.len(), 2);
}

#[tokio::test]
async fn test_request_contact_overrides_stored_account() {
    let mut uow = uow_with_user(Some(test_user()));
    uow.expect_commit_order().times(1).returning(|_| Ok(()));

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let order = service
        .place_order(PlaceOrder {
            user_id: Some("user-1".to_string()),
            items: vec![cart_line("item-1", Decimal::new(100, 0), 1)],
            email: Some("other@example.com".to_string()),
            phone: Some("0799999999".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(order.email, "other@example.com");
    assert_eq!(order.phone, "0799999999");
    // Unset fields still fall back
    assert_eq!(order.address, "12 Temple Road");
}

#[tokio::test]
async fn test_commit_failure_propagates() {
    let mut uow = uow_with_user(Some(test_user()));
    uow.expect_commit_order()
        .returning(|_| Err(AppError::internal("connection lost")));

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let result = service
        .place_order(PlaceOrder {
            user_id: Some("user-1".to_string()),
            items: vec![cart_line("item-1", Decimal::new(100, 0), 1)],
            ..Default::default()
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Internal(_)));
}

#[tokio::test]
async fn test_list_orders_sorted_newest_first() {
    let old = sample_order("order-old", 2);
    let newer = sample_order("order-new", 1);
    let newest = sample_order("order-newest", 0);
    let unsorted = vec![old.clone(), newest.clone(), newer.clone()];

    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_by_user()
        .with(eq("user-1"))
        .returning(move |_| Ok(unsorted.clone()));
    let orders = Arc::new(orders);

    let mut uow = MockUnitOfWork::new();
    uow.expect_orders().returning(move || orders.clone());

    let service = OrderWorkflow::new(Arc::new(uow), test_config());
    let listed = service.list_orders("user-1").await.unwrap();

    let ids: Vec<&str> = listed.iter().map(|order| order.id.as_str()).collect();
    assert_eq!(ids, vec!["order-newest", "order-new", "order-old"]);
}

fn sample_order(id: &str, age_hours: i64) -> Order {
    let lines = vec![OrderLine::price(&cart_line(
        "item-1",
        Decimal::new(100, 0),
        1,
    ))];
    let totals = OrderTotals::compute(&lines);
    let mut order = Order::new(
        "user-1",
        "Priya",
        "Saravana Bhavan",
        lines,
        totals,
        "priya@example.com",
        "",
        "",
    );
    order.id = id.to_string();
    order.created_at = Utc::now() - chrono::Duration::hours(age_hours);
    order
}
