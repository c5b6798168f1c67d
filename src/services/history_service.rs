//! History Service - performance snapshots taken when a vendor is created

use chrono::Utc;
use sea_orm::*;

use crate::domain::{DomainError, HistoricalPerformance, Vendor};
use crate::models::historical_performance::{self, Entity as HistoricalPerformanceEntity};

/// Insert one snapshot of `vendor`'s current metrics dated today (UTC).
///
/// Called once per vendor creation; never on update. Not idempotent.
pub async fn record_snapshot<C>(
    db: &C,
    vendor: &Vendor,
) -> Result<HistoricalPerformance, DomainError>
where
    C: ConnectionTrait,
{
    let metrics = vendor.metrics();
    let snapshot = historical_performance::ActiveModel {
        vendor_id: Set(vendor.id),
        date: Set(Utc::now().date_naive()),
        on_time_delivery_rate: Set(metrics.on_time_delivery_rate),
        quality_rating_avg: Set(metrics.quality_rating_avg),
        average_response_time: Set(metrics.average_response_time),
        fulfillment_rate: Set(metrics.fulfillment_rate),
        ..Default::default()
    };

    let saved = snapshot.insert(db).await?;
    tracing::info!(vendor_id = vendor.id, date = %saved.date, "Recorded performance snapshot");

    Ok(HistoricalPerformance::from(saved))
}

/// List a vendor's snapshots ordered by date
pub async fn history_for_vendor<C>(
    db: &C,
    vendor_id: i32,
) -> Result<Vec<HistoricalPerformance>, DomainError>
where
    C: ConnectionTrait,
{
    let rows = HistoricalPerformanceEntity::find()
        .filter(historical_performance::Column::VendorId.eq(vendor_id))
        .order_by_asc(historical_performance::Column::Date)
        .order_by_asc(historical_performance::Column::Id)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(HistoricalPerformance::from).collect())
}
