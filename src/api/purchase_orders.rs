//! Purchase order API handlers
//!
//! Writes go through the repository, which recomputes the vendor's metrics
//! in the same transaction.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::{double_option, error_response};
use crate::domain::{CreatePurchaseOrderInput, UpdatePurchaseOrderInput};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize)]
pub struct PurchaseOrdersQuery {
    pub vendor_id: Option<i32>,
}

/// Request DTO for creating a purchase order.
/// `issue_date` is stamped by the server and ignored if sent.
#[derive(Debug, Deserialize)]
pub struct CreatePurchaseOrderRequest {
    pub po_number: String,
    pub vendor: i32,
    pub order_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    pub items: serde_json::Value,
    pub quantity: i32,
    pub status: Option<String>,
    pub quality_rating: Option<f64>,
    pub acknowledgment_date: Option<DateTime<Utc>>,
}

/// DTO for partial purchase order updates (PUT and PATCH alike)
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePurchaseOrderRequest {
    pub po_number: Option<String>,
    pub vendor: Option<i32>,
    pub order_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub items: Option<serde_json::Value>,
    pub quantity: Option<i32>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub quality_rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub acknowledgment_date: Option<Option<DateTime<Utc>>>,
}

#[utoipa::path(
    get,
    path = "/api/purchase-orders/",
    params(("vendor_id" = Option<i32>, Query, description = "Only orders of this vendor")),
    responses((status = 200, description = "Purchase orders"))
)]
pub async fn list_purchase_orders(
    State(state): State<AppState>,
    Query(params): Query<PurchaseOrdersQuery>,
) -> impl IntoResponse {
    let result = match params.vendor_id {
        Some(vendor_id) => state.purchase_order_repo.find_by_vendor(vendor_id).await,
        None => state.purchase_order_repo.find_all().await,
    };

    match result {
        Ok(orders) => {
            let total = orders.len();
            Json(json!({
                "purchase_orders": orders,
                "total": total
            }))
            .into_response()
        }
        Err(e) => error_response(e, "Purchase order"),
    }
}

#[utoipa::path(
    post,
    path = "/api/purchase-orders/",
    responses(
        (status = 201, description = "Purchase order created and vendor metrics recomputed"),
        (status = 400, description = "Invalid quantity, status or vendor"),
        (status = 409, description = "po_number already in use")
    )
)]
pub async fn create_purchase_order(
    State(state): State<AppState>,
    Json(payload): Json<CreatePurchaseOrderRequest>,
) -> impl IntoResponse {
    let input = CreatePurchaseOrderInput {
        po_number: payload.po_number,
        vendor_id: payload.vendor,
        order_date: payload.order_date,
        delivery_date: payload.delivery_date,
        items: payload.items,
        quantity: payload.quantity,
        status: payload.status,
        quality_rating: payload.quality_rating,
        acknowledgment_date: payload.acknowledgment_date,
    };

    match state.purchase_order_repo.create(input).await {
        Ok(order) => (
            StatusCode::CREATED,
            Json(json!({
                "purchase_order": order,
                "message": "Purchase order created successfully"
            })),
        )
            .into_response(),
        Err(e) => error_response(e, "Purchase order"),
    }
}

#[utoipa::path(
    get,
    path = "/api/purchase-orders/{id}/",
    params(("id" = i32, Path, description = "Purchase order id")),
    responses(
        (status = 200, description = "Purchase order found"),
        (status = 404, description = "Purchase order not found")
    )
)]
pub async fn get_purchase_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.purchase_order_repo.find_by_id(id).await {
        Ok(Some(order)) => {
            (StatusCode::OK, Json(json!({"purchase_order": order}))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Purchase order not found"})),
        )
            .into_response(),
        Err(e) => error_response(e, "Purchase order"),
    }
}

#[utoipa::path(
    patch,
    path = "/api/purchase-orders/{id}/",
    params(("id" = i32, Path, description = "Purchase order id")),
    responses(
        (status = 200, description = "Purchase order updated; PUT behaves the same"),
        (status = 400, description = "Invalid quantity, status or vendor"),
        (status = 404, description = "Purchase order not found")
    )
)]
pub async fn update_purchase_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePurchaseOrderRequest>,
) -> impl IntoResponse {
    let input = UpdatePurchaseOrderInput {
        po_number: payload.po_number,
        vendor_id: payload.vendor,
        order_date: payload.order_date,
        delivery_date: payload.delivery_date,
        items: payload.items,
        quantity: payload.quantity,
        status: payload.status,
        quality_rating: payload.quality_rating,
        acknowledgment_date: payload.acknowledgment_date,
    };

    match state.purchase_order_repo.update(id, input).await {
        Ok(order) => (StatusCode::OK, Json(json!({"purchase_order": order}))).into_response(),
        Err(e) => error_response(e, "Purchase order"),
    }
}

#[utoipa::path(
    delete,
    path = "/api/purchase-orders/{id}/",
    params(("id" = i32, Path, description = "Purchase order id")),
    responses(
        (status = 200, description = "Purchase order deleted and vendor metrics recomputed"),
        (status = 404, description = "Purchase order not found")
    )
)]
pub async fn delete_purchase_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.purchase_order_repo.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Purchase order deleted successfully"})),
        )
            .into_response(),
        Err(e) => error_response(e, "Purchase order"),
    }
}
