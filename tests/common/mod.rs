#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

use vendor_performance::{db, server};

// In-memory SQLite plus the full router over it
pub async fn setup_test_app() -> (Router, DatabaseConnection) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let app = server::build_router(db.clone(), &[]);
    (app, db)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub fn vendor_payload(code: &str) -> Value {
    json!({
        "name": format!("Vendor {}", code),
        "contact_details": "sales@example.com",
        "address": "12 Harbour Road",
        "vendor_code": code
    })
}

pub async fn create_vendor(app: &Router, code: &str) -> i64 {
    let (status, body) = send(app, "POST", "/api/vendors/", Some(vendor_payload(code))).await;
    assert_eq!(status, StatusCode::CREATED, "vendor create failed: {}", body);
    body["vendor"]["id"].as_i64().unwrap()
}

pub fn order_payload(po_number: &str, vendor_id: i64) -> Value {
    json!({
        "po_number": po_number,
        "vendor": vendor_id,
        "order_date": "2024-03-01T10:00:00Z",
        "delivery_date": "2024-03-01T10:00:00Z",
        "items": [{"sku": "BOLT-M8", "qty": 100}],
        "quantity": 100
    })
}

pub async fn create_order(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, "POST", "/api/purchase-orders/", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "order create failed: {}", body);
    body["purchase_order"].clone()
}

pub async fn get_vendor(app: &Router, vendor_id: i64) -> Value {
    let (status, body) = send(app, "GET", &format!("/api/vendors/{}/", vendor_id), None).await;
    assert_eq!(status, StatusCode::OK);
    body["vendor"].clone()
}
