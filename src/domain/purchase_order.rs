//! Purchase order types and field constraints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;
use super::vendor::require_text;
use crate::models::purchase_order;

pub use crate::models::purchase_order::PurchaseOrderStatus;

pub const PO_NUMBER_MAX_LEN: usize = 100;
pub const MIN_QUANTITY: i32 = 1;

/// Purchase order data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i32,
    pub po_number: String,
    #[serde(rename = "vendor")]
    pub vendor_id: i32,
    pub order_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    pub items: serde_json::Value,
    pub quantity: i32,
    pub status: PurchaseOrderStatus,
    pub quality_rating: Option<f64>,
    pub issue_date: DateTime<Utc>,
    pub acknowledgment_date: Option<DateTime<Utc>>,
}

impl fmt::Display for PurchaseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.po_number)
    }
}

impl From<purchase_order::Model> for PurchaseOrder {
    fn from(model: purchase_order::Model) -> Self {
        Self {
            id: model.id,
            po_number: model.po_number,
            vendor_id: model.vendor_id,
            order_date: model.order_date,
            delivery_date: model.delivery_date,
            items: model.items,
            quantity: model.quantity,
            status: model.status,
            quality_rating: model.quality_rating,
            issue_date: model.issue_date,
            acknowledgment_date: model.acknowledgment_date,
        }
    }
}

/// Input for creating a purchase order.
///
/// `status` arrives as raw text so unknown values surface as validation errors
/// rather than as body-parsing failures. `issue_date` is not accepted: it is
/// stamped by the repository when the row is inserted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePurchaseOrderInput {
    pub po_number: String,
    pub vendor_id: i32,
    pub order_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    pub items: serde_json::Value,
    pub quantity: i32,
    pub status: Option<String>,
    pub quality_rating: Option<f64>,
    pub acknowledgment_date: Option<DateTime<Utc>>,
}

impl CreatePurchaseOrderInput {
    /// Check field constraints and resolve the status (default `pending`).
    pub fn validate(&self) -> Result<PurchaseOrderStatus, DomainError> {
        require_text("po_number", &self.po_number, PO_NUMBER_MAX_LEN)?;
        validate_quantity(self.quantity)?;
        match &self.status {
            Some(raw) => parse_status(raw),
            None => Ok(PurchaseOrderStatus::default()),
        }
    }
}

/// Input for a partial purchase order update.
///
/// Nullable columns use `Option<Option<T>>`: outer `None` leaves the column
/// untouched, `Some(None)` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePurchaseOrderInput {
    pub po_number: Option<String>,
    pub vendor_id: Option<i32>,
    pub order_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub items: Option<serde_json::Value>,
    pub quantity: Option<i32>,
    pub status: Option<String>,
    pub quality_rating: Option<Option<f64>>,
    pub acknowledgment_date: Option<Option<DateTime<Utc>>>,
}

impl UpdatePurchaseOrderInput {
    pub fn validate(&self) -> Result<Option<PurchaseOrderStatus>, DomainError> {
        if let Some(po_number) = &self.po_number {
            require_text("po_number", po_number, PO_NUMBER_MAX_LEN)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        self.status.as_deref().map(parse_status).transpose()
    }
}

fn validate_quantity(quantity: i32) -> Result<(), DomainError> {
    if quantity < MIN_QUANTITY {
        return Err(DomainError::Validation(format!(
            "quantity must be at least {}",
            MIN_QUANTITY
        )));
    }
    Ok(())
}

fn parse_status(raw: &str) -> Result<PurchaseOrderStatus, DomainError> {
    raw.parse::<PurchaseOrderStatus>()
        .map_err(DomainError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(quantity: i32, status: Option<&str>) -> CreatePurchaseOrderInput {
        CreatePurchaseOrderInput {
            po_number: "PO-100".to_string(),
            vendor_id: 1,
            order_date: Utc::now(),
            delivery_date: Utc::now(),
            items: json!([{"sku": "A1", "qty": 2}]),
            quantity,
            status: status.map(str::to_string),
            quality_rating: None,
            acknowledgment_date: None,
        }
    }

    #[test]
    fn quantity_zero_is_rejected() {
        assert!(matches!(
            input(0, None).validate(),
            Err(DomainError::Validation(msg)) if msg.contains("quantity")
        ));
    }

    #[test]
    fn quantity_one_defaults_to_pending() {
        assert_eq!(input(1, None).validate(), Ok(PurchaseOrderStatus::Pending));
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(matches!(
            input(1, Some("shipped")).validate(),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(
            input(1, Some("completed")).validate(),
            Ok(PurchaseOrderStatus::Completed)
        );
    }

    #[test]
    fn update_validates_only_present_fields() {
        let update = UpdatePurchaseOrderInput {
            quantity: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
        assert_eq!(UpdatePurchaseOrderInput::default().validate(), Ok(None));
    }
}
