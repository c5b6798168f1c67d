//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{PurchaseOrderRepository, VendorRepository};
use crate::infrastructure::{SeaOrmPurchaseOrderRepository, SeaOrmVendorRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Vendor repository
    pub vendor_repo: Arc<dyn VendorRepository>,
    /// Purchase order repository
    pub purchase_order_repo: Arc<dyn PurchaseOrderRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let vendor_repo = Arc::new(SeaOrmVendorRepository::new(db.clone()));
        let purchase_order_repo = Arc::new(SeaOrmPurchaseOrderRepository::new(db.clone()));

        Self {
            db,
            vendor_repo,
            purchase_order_repo,
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
