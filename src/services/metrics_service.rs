//! Metrics Service - recomputes a vendor's performance metrics
//!
//! Generic over `ConnectionTrait` so the repositories can run it inside the
//! same transaction as the purchase-order write that triggered it.

use sea_orm::*;

use crate::domain::{DomainError, PerformanceMetrics, PurchaseOrder, Vendor};
use crate::models::purchase_order::{self, Entity as PurchaseOrderEntity};
use crate::models::vendor::{self, Entity as VendorEntity};

/// Recompute and persist the four metrics of `vendor_id` from its current
/// purchase orders. Returns the updated vendor.
pub async fn recalculate_vendor_metrics<C>(db: &C, vendor_id: i32) -> Result<Vendor, DomainError>
where
    C: ConnectionTrait,
{
    let vendor = VendorEntity::find_by_id(vendor_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    let orders: Vec<PurchaseOrder> = PurchaseOrderEntity::find()
        .filter(purchase_order::Column::VendorId.eq(vendor_id))
        .all(db)
        .await?
        .into_iter()
        .map(PurchaseOrder::from)
        .collect();

    let metrics = PerformanceMetrics::from_orders(&orders);
    tracing::debug!(
        vendor_id,
        orders = orders.len(),
        ?metrics,
        "Recomputed vendor performance metrics"
    );

    let mut active: vendor::ActiveModel = vendor.into();
    active.on_time_delivery_rate = Set(metrics.on_time_delivery_rate);
    active.quality_rating_avg = Set(metrics.quality_rating_avg);
    active.average_response_time = Set(metrics.average_response_time);
    active.fulfillment_rate = Set(metrics.fulfillment_rate);

    let updated = active.update(db).await?;
    Ok(Vendor::from(updated))
}
