//! Vendor API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use super::error_response;
use crate::domain::{CreateVendorInput, UpdateVendorInput};
use crate::infrastructure::AppState;

/// Request DTO for creating a vendor. Metrics are derived and cannot be set.
#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    pub name: String,
    pub contact_details: String,
    pub address: String,
    pub vendor_code: String,
}

/// DTO for partial vendor updates (PUT and PATCH alike)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVendorRequest {
    pub name: Option<String>,
    pub contact_details: Option<String>,
    pub address: Option<String>,
    pub vendor_code: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/vendors/",
    responses((status = 200, description = "All vendors with their current metrics"))
)]
pub async fn list_vendors(State(state): State<AppState>) -> impl IntoResponse {
    match state.vendor_repo.find_all().await {
        Ok(vendors) => {
            let total = vendors.len();
            Json(json!({
                "vendors": vendors,
                "total": total
            }))
            .into_response()
        }
        Err(e) => error_response(e, "Vendor"),
    }
}

#[utoipa::path(
    post,
    path = "/api/vendors/",
    responses(
        (status = 201, description = "Vendor created and first snapshot recorded"),
        (status = 400, description = "Field constraint violated"),
        (status = 409, description = "vendor_code already in use")
    )
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    Json(payload): Json<CreateVendorRequest>,
) -> impl IntoResponse {
    let input = CreateVendorInput {
        name: payload.name,
        contact_details: payload.contact_details,
        address: payload.address,
        vendor_code: payload.vendor_code,
    };

    match state.vendor_repo.create(input).await {
        Ok(vendor) => (
            StatusCode::CREATED,
            Json(json!({
                "vendor": vendor,
                "message": "Vendor created successfully"
            })),
        )
            .into_response(),
        Err(e) => error_response(e, "Vendor"),
    }
}

#[utoipa::path(
    get,
    path = "/api/vendors/{id}/",
    params(("id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor found"),
        (status = 404, description = "Vendor not found")
    )
)]
pub async fn get_vendor(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.vendor_repo.find_by_id(id).await {
        Ok(Some(vendor)) => (StatusCode::OK, Json(json!({"vendor": vendor}))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Vendor not found"})),
        )
            .into_response(),
        Err(e) => error_response(e, "Vendor"),
    }
}

#[utoipa::path(
    patch,
    path = "/api/vendors/{id}/",
    params(("id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor updated; PUT behaves the same"),
        (status = 404, description = "Vendor not found"),
        (status = 409, description = "vendor_code already in use")
    )
)]
pub async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVendorRequest>,
) -> impl IntoResponse {
    let input = UpdateVendorInput {
        name: payload.name,
        contact_details: payload.contact_details,
        address: payload.address,
        vendor_code: payload.vendor_code,
    };

    match state.vendor_repo.update(id, input).await {
        Ok(vendor) => (StatusCode::OK, Json(json!({"vendor": vendor}))).into_response(),
        Err(e) => error_response(e, "Vendor"),
    }
}

#[utoipa::path(
    delete,
    path = "/api/vendors/{id}/",
    params(("id" = i32, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor, its purchase orders and history deleted"),
        (status = 404, description = "Vendor not found")
    )
)]
pub async fn delete_vendor(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.vendor_repo.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Vendor deleted successfully"})),
        )
            .into_response(),
        Err(e) => error_response(e, "Vendor"),
    }
}
