//! Domain layer - business types and abstractions
//!
//! Trait definitions, domain error types, field constraints and the metric
//! arithmetic. No HTTP types live here.

pub mod errors;
pub mod metrics;
pub mod purchase_order;
pub mod repositories;
pub mod vendor;

pub use errors::DomainError;
pub use metrics::PerformanceMetrics;
pub use purchase_order::*;
pub use repositories::*;
pub use vendor::*;
