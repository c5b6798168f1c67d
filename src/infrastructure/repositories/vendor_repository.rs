//! SeaORM implementation of VendorRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::{
    CreateVendorInput, DomainError, HistoricalPerformance, UpdateVendorInput, Vendor,
    VendorRepository,
};
use crate::models::historical_performance::{self, Entity as HistoricalPerformanceEntity};
use crate::models::purchase_order::{self, Entity as PurchaseOrderEntity};
use crate::models::vendor::{ActiveModel, Column, Entity as VendorEntity};
use crate::services;

/// SeaORM-based implementation of VendorRepository
pub struct SeaOrmVendorRepository {
    db: DatabaseConnection,
}

impl SeaOrmVendorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VendorRepository for SeaOrmVendorRepository {
    async fn find_all(&self) -> Result<Vec<Vendor>, DomainError> {
        let vendors = VendorEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(vendors.into_iter().map(Vendor::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vendor>, DomainError> {
        let vendor = VendorEntity::find_by_id(id).one(&self.db).await?;
        Ok(vendor.map(Vendor::from))
    }

    async fn create(&self, input: CreateVendorInput) -> Result<Vendor, DomainError> {
        input.validate()?;

        let txn = self.db.begin().await?;

        let new_vendor = ActiveModel {
            name: Set(input.name),
            contact_details: Set(input.contact_details),
            address: Set(input.address),
            vendor_code: Set(input.vendor_code),
            on_time_delivery_rate: Set(0.0),
            quality_rating_avg: Set(0.0),
            average_response_time: Set(0.0),
            fulfillment_rate: Set(0.0),
            ..Default::default()
        };

        let vendor = Vendor::from(new_vendor.insert(&txn).await?);
        services::record_snapshot(&txn, &vendor).await?;

        txn.commit().await?;

        tracing::info!(vendor_id = vendor.id, vendor_code = %vendor.vendor_code, "Created vendor {}", vendor);
        Ok(vendor)
    }

    async fn update(&self, id: i32, input: UpdateVendorInput) -> Result<Vendor, DomainError> {
        input.validate()?;

        let existing = VendorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.clone().into();
        let mut changed = false;

        if let Some(name) = input.name {
            active.name = Set(name);
            changed = true;
        }
        if let Some(contact_details) = input.contact_details {
            active.contact_details = Set(contact_details);
            changed = true;
        }
        if let Some(address) = input.address {
            active.address = Set(address);
            changed = true;
        }
        if let Some(vendor_code) = input.vendor_code {
            active.vendor_code = Set(vendor_code);
            changed = true;
        }

        if !changed {
            return Ok(Vendor::from(existing));
        }

        let result = active.update(&self.db).await?;
        Ok(Vendor::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        // Explicit child deletes; ON DELETE CASCADE covers the same rows
        let orders = PurchaseOrderEntity::delete_many()
            .filter(purchase_order::Column::VendorId.eq(id))
            .exec(&txn)
            .await?;
        let snapshots = HistoricalPerformanceEntity::delete_many()
            .filter(historical_performance::Column::VendorId.eq(id))
            .exec(&txn)
            .await?;
        let result = VendorEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;

        tracing::info!(
            vendor_id = id,
            purchase_orders = orders.rows_affected,
            snapshots = snapshots.rows_affected,
            "Deleted vendor"
        );
        Ok(())
    }

    async fn find_history(
        &self,
        vendor_id: i32,
    ) -> Result<Vec<HistoricalPerformance>, DomainError> {
        services::history_for_vendor(&self.db, vendor_id).await
    }
}
