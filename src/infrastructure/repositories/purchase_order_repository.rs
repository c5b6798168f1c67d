//! SeaORM implementation of PurchaseOrderRepository
//!
//! Each write runs in one transaction together with the metric recomputation
//! of the affected vendor(s).

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::{
    CreatePurchaseOrderInput, DomainError, PurchaseOrder, PurchaseOrderRepository,
    UpdatePurchaseOrderInput,
};
use crate::models::purchase_order::{ActiveModel, Column, Entity as PurchaseOrderEntity};
use crate::models::vendor::Entity as VendorEntity;
use crate::services;

/// SeaORM-based implementation of PurchaseOrderRepository
pub struct SeaOrmPurchaseOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmPurchaseOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn ensure_vendor_exists<C: ConnectionTrait>(db: &C, vendor_id: i32) -> Result<(), DomainError> {
    match VendorEntity::find_by_id(vendor_id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(DomainError::Validation(format!(
            "vendor {} does not exist",
            vendor_id
        ))),
    }
}

#[async_trait]
impl PurchaseOrderRepository for SeaOrmPurchaseOrderRepository {
    async fn find_all(&self) -> Result<Vec<PurchaseOrder>, DomainError> {
        let orders = PurchaseOrderEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(orders.into_iter().map(PurchaseOrder::from).collect())
    }

    async fn find_by_vendor(&self, vendor_id: i32) -> Result<Vec<PurchaseOrder>, DomainError> {
        let orders = PurchaseOrderEntity::find()
            .filter(Column::VendorId.eq(vendor_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(orders.into_iter().map(PurchaseOrder::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PurchaseOrder>, DomainError> {
        let order = PurchaseOrderEntity::find_by_id(id).one(&self.db).await?;
        Ok(order.map(PurchaseOrder::from))
    }

    async fn create(&self, input: CreatePurchaseOrderInput) -> Result<PurchaseOrder, DomainError> {
        let status = input.validate()?;

        let txn = self.db.begin().await?;
        ensure_vendor_exists(&txn, input.vendor_id).await?;

        let new_order = ActiveModel {
            po_number: Set(input.po_number),
            vendor_id: Set(input.vendor_id),
            order_date: Set(input.order_date),
            delivery_date: Set(input.delivery_date),
            items: Set(input.items),
            quantity: Set(input.quantity),
            status: Set(status),
            quality_rating: Set(input.quality_rating),
            issue_date: Set(Utc::now()),
            acknowledgment_date: Set(input.acknowledgment_date),
            ..Default::default()
        };

        let order = PurchaseOrder::from(new_order.insert(&txn).await?);
        services::recalculate_vendor_metrics(&txn, order.vendor_id).await?;

        txn.commit().await?;

        tracing::info!(
            purchase_order_id = order.id,
            vendor_id = order.vendor_id,
            status = %order.status,
            "Created purchase order {}",
            order
        );
        Ok(order)
    }

    async fn update(
        &self,
        id: i32,
        input: UpdatePurchaseOrderInput,
    ) -> Result<PurchaseOrder, DomainError> {
        let status = input.validate()?;

        let txn = self.db.begin().await?;

        let existing = PurchaseOrderEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;
        let previous_vendor_id = existing.vendor_id;

        let mut active: ActiveModel = existing.clone().into();
        let mut changed = false;

        if let Some(po_number) = input.po_number {
            active.po_number = Set(po_number);
            changed = true;
        }
        if let Some(vendor_id) = input.vendor_id {
            ensure_vendor_exists(&txn, vendor_id).await?;
            active.vendor_id = Set(vendor_id);
            changed = true;
        }
        if let Some(order_date) = input.order_date {
            active.order_date = Set(order_date);
            changed = true;
        }
        if let Some(delivery_date) = input.delivery_date {
            active.delivery_date = Set(delivery_date);
            changed = true;
        }
        if let Some(items) = input.items {
            active.items = Set(items);
            changed = true;
        }
        if let Some(quantity) = input.quantity {
            active.quantity = Set(quantity);
            changed = true;
        }
        if let Some(status) = status {
            active.status = Set(status);
            changed = true;
        }
        if let Some(quality_rating) = input.quality_rating {
            active.quality_rating = Set(quality_rating);
            changed = true;
        }
        if let Some(acknowledgment_date) = input.acknowledgment_date {
            active.acknowledgment_date = Set(acknowledgment_date);
            changed = true;
        }

        let order = if changed {
            PurchaseOrder::from(active.update(&txn).await?)
        } else {
            PurchaseOrder::from(existing)
        };

        // A save always recomputes, even when no column changed
        services::recalculate_vendor_metrics(&txn, order.vendor_id).await?;
        if previous_vendor_id != order.vendor_id {
            services::recalculate_vendor_metrics(&txn, previous_vendor_id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            purchase_order_id = order.id,
            vendor_id = order.vendor_id,
            status = %order.status,
            "Updated purchase order {}",
            order
        );
        Ok(order)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        let existing = PurchaseOrderEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        PurchaseOrderEntity::delete_by_id(id).exec(&txn).await?;
        services::recalculate_vendor_metrics(&txn, existing.vendor_id).await?;

        txn.commit().await?;

        tracing::info!(
            purchase_order_id = id,
            vendor_id = existing.vendor_id,
            "Deleted purchase order"
        );
        Ok(())
    }
}
