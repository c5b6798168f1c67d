//! Repository implementations using SeaORM

pub mod purchase_order_repository;
pub mod vendor_repository;

pub use purchase_order_repository::SeaOrmPurchaseOrderRepository;
pub use vendor_repository::SeaOrmVendorRepository;
