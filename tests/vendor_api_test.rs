mod common;

use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use common::{create_order, create_vendor, get_vendor, order_payload, send, setup_test_app, vendor_payload};
use vendor_performance::models::{historical_performance, purchase_order};
use vendor_performance::services;

#[tokio::test]
async fn test_create_vendor_starts_with_zero_metrics() {
    let (app, _db) = setup_test_app().await;

    let (status, body) = send(&app, "POST", "/api/vendors/", Some(vendor_payload("V-001"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let vendor = &body["vendor"];
    assert_eq!(vendor["vendor_code"], "V-001");
    assert_eq!(vendor["name"], "Vendor V-001");
    assert_eq!(vendor["on_time_delivery_rate"], 0.0);
    assert_eq!(vendor["quality_rating_avg"], 0.0);
    assert_eq!(vendor["average_response_time"], 0.0);
    assert_eq!(vendor["fulfillment_rate"], 0.0);
}

#[tokio::test]
async fn test_create_vendor_records_one_snapshot_dated_today() {
    let (app, db) = setup_test_app().await;
    let vendor_id = create_vendor(&app, "V-001").await;

    let history = services::history_for_vendor(&db, vendor_id as i32)
        .await
        .expect("history query failed");

    assert_eq!(history.len(), 1);
    let snapshot = &history[0];
    assert_eq!(snapshot.vendor_id, vendor_id as i32);
    assert_eq!(snapshot.date, Utc::now().date_naive());
    assert_eq!(snapshot.on_time_delivery_rate, 0.0);
    assert_eq!(snapshot.quality_rating_avg, 0.0);
    assert_eq!(snapshot.average_response_time, 0.0);
    assert_eq!(snapshot.fulfillment_rate, 0.0);
}

#[tokio::test]
async fn test_update_vendor_does_not_snapshot() {
    let (app, db) = setup_test_app().await;
    let vendor_id = create_vendor(&app, "V-001").await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/vendors/{}/", vendor_id),
        Some(json!({"contact_details": "procurement@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vendor"]["contact_details"], "procurement@example.com");
    assert_eq!(body["vendor"]["name"], "Vendor V-001");

    // PUT is a partial update as well
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/vendors/{}", vendor_id),
        Some(json!({"address": "1 Dock Street"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vendor"]["address"], "1 Dock Street");
    assert_eq!(body["vendor"]["contact_details"], "procurement@example.com");

    let history = services::history_for_vendor(&db, vendor_id as i32).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_vendor_metrics_are_not_client_writable() {
    let (app, _db) = setup_test_app().await;
    let vendor_id = create_vendor(&app, "V-001").await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/vendors/{}/", vendor_id),
        Some(json!({"on_time_delivery_rate": 99.0, "name": "Renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vendor"]["name"], "Renamed");
    assert_eq!(body["vendor"]["on_time_delivery_rate"], 0.0);
}

#[tokio::test]
async fn test_duplicate_vendor_code_conflicts() {
    let (app, _db) = setup_test_app().await;
    create_vendor(&app, "V-001").await;
    let other = create_vendor(&app, "V-002").await;

    let (status, body) = send(&app, "POST", "/api/vendors/", Some(vendor_payload("V-001"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/vendors/{}/", other),
        Some(json!({"vendor_code": "V-001"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_blank_vendor_code_is_rejected() {
    let (app, _db) = setup_test_app().await;

    let (status, body) = send(&app, "POST", "/api/vendors/", Some(vendor_payload(" "))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("vendor_code"));
}

#[tokio::test]
async fn test_missing_vendor_returns_not_found() {
    let (app, _db) = setup_test_app().await;

    let (status, body) = send(&app, "GET", "/api/vendors/999/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Vendor not found");

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/vendors/999/",
        Some(json!({"name": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/vendors/999/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_vendors() {
    let (app, _db) = setup_test_app().await;
    create_vendor(&app, "V-001").await;
    create_vendor(&app, "V-002").await;

    let (status, body) = send(&app, "GET", "/api/vendors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["vendors"][0]["vendor_code"], "V-001");
    assert_eq!(body["vendors"][1]["vendor_code"], "V-002");
}

#[tokio::test]
async fn test_delete_vendor_cascades() {
    let (app, db) = setup_test_app().await;
    let vendor_id = create_vendor(&app, "V-001").await;
    let survivor = create_vendor(&app, "V-002").await;
    create_order(&app, order_payload("PO-1", vendor_id)).await;
    create_order(&app, order_payload("PO-2", vendor_id)).await;
    create_order(&app, order_payload("PO-3", survivor)).await;

    let (status, _) = send(&app, "DELETE", &format!("/api/vendors/{}/", vendor_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/vendors/{}/", vendor_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let orders = purchase_order::Entity::find()
        .filter(purchase_order::Column::VendorId.eq(vendor_id as i32))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(orders, 0);

    let snapshots = historical_performance::Entity::find()
        .filter(historical_performance::Column::VendorId.eq(vendor_id as i32))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(snapshots, 0);

    // The other vendor keeps its rows
    let (_, body) = send(&app, "GET", "/api/purchase-orders/", None).await;
    assert_eq!(body["total"], 1);
    assert_eq!(get_vendor(&app, survivor).await["vendor_code"], "V-002");
    let history = services::history_for_vendor(&db, survivor as i32).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _db) = setup_test_app().await;

    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
