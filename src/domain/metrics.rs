//! Vendor performance metrics
//!
//! Pure arithmetic over a vendor's purchase orders. The service layer loads the
//! orders and persists the result; nothing here touches the database.

use serde::{Deserialize, Serialize};

use super::{PurchaseOrder, PurchaseOrderStatus};

/// The four derived metrics stored on every vendor and frozen into each
/// historical snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Percentage of completed orders with `delivery_date <= order_date`
    pub on_time_delivery_rate: f64,
    /// Mean quality rating of completed orders that carry one
    pub quality_rating_avg: f64,
    /// Mean seconds between issue and acknowledgment of completed orders
    pub average_response_time: f64,
    /// Percentage of all orders that are completed and acknowledged at issue time
    pub fulfillment_rate: f64,
}

impl PerformanceMetrics {
    /// Compute metrics from every order currently owned by one vendor.
    ///
    /// The on-time criterion compares `delivery_date` against `order_date` and
    /// the fulfillment criterion requires `issue_date == acknowledgment_date`.
    /// Both are kept as stored business rules even though they read oddly.
    pub fn from_orders(orders: &[PurchaseOrder]) -> Self {
        let completed: Vec<&PurchaseOrder> = orders
            .iter()
            .filter(|po| po.status == PurchaseOrderStatus::Completed)
            .collect();

        let on_time_delivery_rate = if completed.is_empty() {
            0.0
        } else {
            let on_time = completed
                .iter()
                .filter(|po| po.delivery_date <= po.order_date)
                .count();
            percentage(on_time, completed.len())
        };

        let quality_rating_avg = mean(completed.iter().filter_map(|po| po.quality_rating));

        let average_response_time = mean(completed.iter().filter_map(|po| {
            po.acknowledgment_date
                .map(|ack| (ack - po.issue_date).num_milliseconds() as f64 / 1000.0)
        }));

        let fulfillment_rate = if orders.is_empty() {
            0.0
        } else {
            let fulfilled = completed
                .iter()
                .filter(|po| po.acknowledgment_date == Some(po.issue_date))
                .count();
            percentage(fulfilled, orders.len())
        };

        Self {
            on_time_delivery_rate,
            quality_rating_avg,
            average_response_time,
            fulfillment_rate,
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64 * 100.0
}

/// Arithmetic mean, 0 for an empty sequence.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
