pub mod health;
pub mod purchase_orders;
pub mod vendors;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

/// Routes mounted under `/api`. Collection and item paths answer with and
/// without a trailing slash.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Vendors
        .route(
            "/vendors",
            get(vendors::list_vendors).post(vendors::create_vendor),
        )
        .route(
            "/vendors/",
            get(vendors::list_vendors).post(vendors::create_vendor),
        )
        .route(
            "/vendors/:id",
            get(vendors::get_vendor)
                .put(vendors::update_vendor)
                .patch(vendors::update_vendor)
                .delete(vendors::delete_vendor),
        )
        .route(
            "/vendors/:id/",
            get(vendors::get_vendor)
                .put(vendors::update_vendor)
                .patch(vendors::update_vendor)
                .delete(vendors::delete_vendor),
        )
        // Purchase orders
        .route(
            "/purchase-orders",
            get(purchase_orders::list_purchase_orders)
                .post(purchase_orders::create_purchase_order),
        )
        .route(
            "/purchase-orders/",
            get(purchase_orders::list_purchase_orders)
                .post(purchase_orders::create_purchase_order),
        )
        .route(
            "/purchase-orders/:id",
            get(purchase_orders::get_purchase_order)
                .put(purchase_orders::update_purchase_order)
                .patch(purchase_orders::update_purchase_order)
                .delete(purchase_orders::delete_purchase_order),
        )
        .route(
            "/purchase-orders/:id/",
            get(purchase_orders::get_purchase_order)
                .put(purchase_orders::update_purchase_order)
                .patch(purchase_orders::update_purchase_order)
                .delete(purchase_orders::delete_purchase_order),
        )
        .with_state(state)
}

/// Map a domain failure to its HTTP response. `resource` names the entity in
/// the 404 message.
pub(crate) fn error_response(e: DomainError, resource: &str) -> Response {
    match e {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("{} not found", resource)})),
        )
            .into_response(),
        DomainError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, Json(json!({"error": msg}))).into_response()
        }
        DomainError::Conflict(msg) => {
            (StatusCode::CONFLICT, Json(json!({"error": msg}))).into_response()
        }
        DomainError::Database(_) | DomainError::Internal(_) => {
            tracing::error!("{} request failed: {}", resource, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`).
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
