//! Waste service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use tiffin_api::config::Config;
use tiffin_api::domain::{User, WasteLine, WasteRecord};
use tiffin_api::errors::AppError;
use tiffin_api::infra::{MockUnitOfWork, MockUserRepository, MockWasteRepository};
use tiffin_api::services::{SubmitWaste, WasteRecorder, WasteService};

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
        phone: None,
        address: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn waste_line(id: &str) -> WasteLine {
    WasteLine {
        id: id.to_string(),
        title: "Dosa Batter".to_string(),
        item_type: None,
        quantity: 2,
        units: "KG".to_string(),
    }
}

fn uow_with(user: Option<User>, waste: MockWasteRepository) -> MockUnitOfWork {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |_| Ok(user.clone()));
    let users = Arc::new(users);
    let waste = Arc::new(waste);

    let mut uow = MockUnitOfWork::new();
    uow.expect_users().returning(move || users.clone());
    uow.expect_waste().returning(move || waste.clone());
    uow
}

#[tokio::test]
async fn test_submit_requires_at_least_one_item() {
    let mut waste = MockWasteRepository::new();
    waste.expect_insert().times(0);

    let uow = uow_with(Some(test_user()), waste);
    let service = WasteRecorder::new(Arc::new(uow), test_config());
    let result = service.submit(SubmitWaste::default()).await;

    match result.unwrap_err() {
        AppError::Validation(msg) => {
            assert_eq!(msg, "Please add at least one item to waste.")
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_stamps_record_from_stored_user() {
    let mut waste = MockWasteRepository::new();
    waste
        .expect_insert()
        .withf(|record: &WasteRecord| {
            record.user_id == "user-1"
                && record.name == "Priya"
                && record.restaurant_name == "Saravana Bhavan"
                && record.status == "submitted"
                && !record.id.is_empty()
        })
        .times(1)
        .returning(|_| Ok(()));

    let uow = uow_with(Some(test_user()), waste);
    let service = WasteRecorder::new(Arc::new(uow), test_config());
    let record = service
        .submit(SubmitWaste {
            user_id: Some("user-1".to_string()),
            items: vec![waste_line("item-1")],
            photo: Some("data:image/png;base64,AAAA".to_string()),
            reason: Some("Expired".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(record.reason, "Expired");
    assert_eq!(record.photo.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(record.items.len(), 1);
}

#[tokio::test]
async fn test_submit_without_user_uses_guest_identity() {
    let mut waste = MockWasteRepository::new();
    waste
        .expect_insert()
        .withf(|record: &WasteRecord| {
            record.user_id == "guest"
                && record.name == "Anonymous"
                && record.restaurant_name == "Test Kitchen"
        })
        .times(1)
        .returning(|_| Ok(()));

    let uow = uow_with(None, waste);
    let service = WasteRecorder::new(Arc::new(uow), test_config());
    let record = service
        .submit(SubmitWaste {
            items: vec![waste_line("item-1")],
            ..Default::default()
        })
        .await
        .unwrap();

    // Reason defaults to empty, not an error
    assert_eq!(record.reason, "");
    assert!(record.photo.is_none());
}

#[tokio::test]
async fn test_history_sorted_newest_first_and_capped() {
    // 25 records with ascending timestamps, shuffled by a stride
    let mut stored = Vec::new();
    for i in 0..25u32 {
        let mut record = WasteRecord::new(
            "user-1",
            "Priya",
            "Saravana Bhavan",
            vec![waste_line("item-1")],
            None,
            "",
        );
        record.id = format!("record-{}", i);
        record.created_at = Utc::now() - chrono::Duration::hours(i64::from(i));
        stored.push(record);
    }
    stored.rotate_left(7);

    let mut waste = MockWasteRepository::new();
    waste
        .expect_list_by_user()
        .with(eq("user-1"))
        .returning(move |_| Ok(stored.clone()));

    let uow = uow_with(None, waste);
    let service = WasteRecorder::new(Arc::new(uow), test_config());
    let history = service.list_history("user-1").await.unwrap();

    assert_eq!(history.len(), 20);
    // record-0 is the newest, record-19 the oldest kept
    assert_eq!(history[0].id, "record-0");
    assert_eq!(history[19].id, "record-19");
    assert!(history
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}
