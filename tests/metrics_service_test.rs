use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde_json::json;

use vendor_performance::db;
use vendor_performance::domain::{CreateVendorInput, DomainError, PurchaseOrderStatus};
use vendor_performance::infrastructure::AppState;
use vendor_performance::models::{purchase_order, vendor};
use vendor_performance::services;

async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

async fn create_test_vendor(state: &AppState, code: &str) -> i32 {
    state
        .vendor_repo
        .create(CreateVendorInput {
            name: "Northwind Metals".to_string(),
            contact_details: "ops@northwind.test".to_string(),
            address: "7 Quay Lane".to_string(),
            vendor_code: code.to_string(),
        })
        .await
        .expect("Failed to create vendor")
        .id
}

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, day, hour, 0, 0).unwrap()
}

// Inserts bypass the repository so issue_date can be pinned
async fn insert_order(
    db: &DatabaseConnection,
    vendor_id: i32,
    po_number: &str,
    status: PurchaseOrderStatus,
    issue_date: DateTime<Utc>,
    acknowledgment_date: Option<DateTime<Utc>>,
) {
    purchase_order::ActiveModel {
        po_number: Set(po_number.to_string()),
        vendor_id: Set(vendor_id),
        order_date: Set(at(10, 12)),
        delivery_date: Set(at(10, 12)),
        items: Set(json!({"lines": 1})),
        quantity: Set(5),
        status: Set(status),
        quality_rating: Set(None),
        issue_date: Set(issue_date),
        acknowledgment_date: Set(acknowledgment_date),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert order");
}

#[tokio::test]
async fn test_fulfillment_rate_counts_orders_acknowledged_at_issue() {
    let state = setup_test_state().await;
    let db = state.db();
    let vendor_id = create_test_vendor(&state, "NW-1").await;

    let issued = at(1, 9);
    insert_order(db, vendor_id, "PO-A", PurchaseOrderStatus::Completed, issued, Some(issued)).await;
    insert_order(
        db,
        vendor_id,
        "PO-B",
        PurchaseOrderStatus::Completed,
        issued,
        Some(issued + Duration::hours(2)),
    )
    .await;
    insert_order(db, vendor_id, "PO-C", PurchaseOrderStatus::Pending, issued, Some(issued)).await;
    insert_order(db, vendor_id, "PO-D", PurchaseOrderStatus::Canceled, issued, None).await;

    let vendor = services::recalculate_vendor_metrics(db, vendor_id)
        .await
        .expect("recalculation failed");

    assert_eq!(vendor.fulfillment_rate, 25.0);
    assert_eq!(vendor.on_time_delivery_rate, 100.0);
    // (0s + 7200s) / 2 completed orders with an acknowledgment
    assert_eq!(vendor.average_response_time, 3600.0);
    assert_eq!(vendor.quality_rating_avg, 0.0);

    let stored = vendor::Entity::find_by_id(vendor_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.fulfillment_rate, 25.0);
    assert_eq!(stored.average_response_time, 3600.0);
}

#[tokio::test]
async fn test_recalculation_does_not_touch_history() {
    let state = setup_test_state().await;
    let db = state.db();
    let vendor_id = create_test_vendor(&state, "NW-1").await;

    let issued = at(1, 9);
    insert_order(db, vendor_id, "PO-A", PurchaseOrderStatus::Completed, issued, Some(issued)).await;
    services::recalculate_vendor_metrics(db, vendor_id).await.unwrap();

    let history = state.vendor_repo.find_history(vendor_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].fulfillment_rate, 0.0);
    assert_eq!(history[0].on_time_delivery_rate, 0.0);
}

#[tokio::test]
async fn test_recalculation_rolls_back_with_its_transaction() {
    let state = setup_test_state().await;
    let db = state.db();
    let vendor_id = create_test_vendor(&state, "NW-1").await;

    let issued = at(1, 9);
    insert_order(db, vendor_id, "PO-A", PurchaseOrderStatus::Completed, issued, Some(issued)).await;

    let txn = db.begin().await.unwrap();
    let inside = services::recalculate_vendor_metrics(&txn, vendor_id).await.unwrap();
    assert_eq!(inside.fulfillment_rate, 100.0);
    txn.rollback().await.unwrap();

    let stored = state.vendor_repo.find_by_id(vendor_id).await.unwrap().unwrap();
    assert_eq!(stored.fulfillment_rate, 0.0);
}

#[tokio::test]
async fn test_recalculation_of_missing_vendor_is_not_found() {
    let state = setup_test_state().await;

    let result = services::recalculate_vendor_metrics(state.db(), 404).await;
    assert_eq!(result.unwrap_err(), DomainError::NotFound);
}

#[tokio::test]
async fn test_vendor_with_no_orders_has_zero_metrics() {
    let state = setup_test_state().await;
    let vendor_id = create_test_vendor(&state, "NW-1").await;

    let vendor = services::recalculate_vendor_metrics(state.db(), vendor_id)
        .await
        .unwrap();

    assert_eq!(vendor.on_time_delivery_rate, 0.0);
    assert_eq!(vendor.quality_rating_avg, 0.0);
    assert_eq!(vendor.average_response_time, 0.0);
    assert_eq!(vendor.fulfillment_rate, 0.0);
    assert_eq!(vendor.to_string(), "Northwind Metals");
}
