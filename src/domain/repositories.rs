//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{
    CreatePurchaseOrderInput, CreateVendorInput, DomainError, HistoricalPerformance,
    PurchaseOrder, UpdatePurchaseOrderInput, UpdateVendorInput, Vendor,
};

/// Repository trait for Vendor entity
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Find all vendors
    async fn find_all(&self) -> Result<Vec<Vendor>, DomainError>;

    /// Find a vendor by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Vendor>, DomainError>;

    /// Create a vendor and record its first performance snapshot
    async fn create(&self, input: CreateVendorInput) -> Result<Vendor, DomainError>;

    /// Partially update a vendor's descriptive fields
    async fn update(&self, id: i32, input: UpdateVendorInput) -> Result<Vendor, DomainError>;

    /// Delete a vendor together with its orders and history
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Snapshot rows recorded for a vendor, oldest first
    async fn find_history(&self, vendor_id: i32) -> Result<Vec<HistoricalPerformance>, DomainError>;
}

/// Repository trait for PurchaseOrder entity.
///
/// Every write recomputes the owning vendor's metrics before returning.
#[async_trait]
pub trait PurchaseOrderRepository: Send + Sync {
    /// Find all purchase orders
    async fn find_all(&self) -> Result<Vec<PurchaseOrder>, DomainError>;

    /// Find purchase orders owned by one vendor
    async fn find_by_vendor(&self, vendor_id: i32) -> Result<Vec<PurchaseOrder>, DomainError>;

    /// Find a purchase order by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<PurchaseOrder>, DomainError>;

    /// Create a purchase order
    async fn create(&self, input: CreatePurchaseOrderInput) -> Result<PurchaseOrder, DomainError>;

    /// Partially update a purchase order
    async fn update(
        &self,
        id: i32,
        input: UpdatePurchaseOrderInput,
    ) -> Result<PurchaseOrder, DomainError>;

    /// Delete a purchase order
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
