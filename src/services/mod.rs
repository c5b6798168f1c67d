//! Services Layer
//!
//! Business logic invoked explicitly by the repositories after a write:
//! metric recomputation after purchase-order changes, and the first
//! performance snapshot after a vendor is created.

pub mod history_service;
pub mod metrics_service;

pub use history_service::{history_for_vendor, record_snapshot};
pub use metrics_service::recalculate_vendor_metrics;
