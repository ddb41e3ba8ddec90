//! Storage seams for the sequencer.
//!
//! Traits are deliberately narrow: only the reads and writes the pipeline
//! performs. No storage assumptions; implementations range from
//! `Mutex<HashMap>` doubles to sqlx-backed Postgres stores.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use stitchkart_catalog::{Sku, Variant};
use stitchkart_core::CustomerId;
use stitchkart_customers::{Customer, NewCustomer};
use stitchkart_orders::{NewOrder, NewOrderLineItem};

/// Infrastructure-level storage error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Read-only inventory access.
#[async_trait]
pub trait VariantStore: Send + Sync {
    /// Batch-fetch variants for a set of SKUs. SKUs with no matching variant
    /// are simply absent from the result; the caller detects them.
    async fn find_by_skus(&self, skus: &[Sku]) -> Result<Vec<Variant>, StoreError>;
}

/// Customer lookup and creation.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    /// Resolve the customer linked to a session token, if any.
    async fn find_by_session(&self, session_token: &str) -> Result<Option<Customer>, StoreError>;

    async fn create(&self, new: NewCustomer) -> Result<Customer, StoreError>;
}

/// Order persistence. Insert-only in this pipeline.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert the order row in a single write. The row already carries its
    /// gateway order id, totals, statuses, and metadata snapshot.
    async fn insert_order(&self, order: &NewOrder) -> Result<(), StoreError>;

    /// Batch-insert line items for an already-inserted order.
    async fn insert_line_items(&self, items: &[NewOrderLineItem]) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> VariantStore for Arc<S>
where
    S: VariantStore + ?Sized,
{
    async fn find_by_skus(&self, skus: &[Sku]) -> Result<Vec<Variant>, StoreError> {
        (**self).find_by_skus(skus).await
    }
}

#[async_trait]
impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_by_session(&self, session_token: &str) -> Result<Option<Customer>, StoreError> {
        (**self).find_by_session(session_token).await
    }

    async fn create(&self, new: NewCustomer) -> Result<Customer, StoreError> {
        (**self).create(new).await
    }
}

#[async_trait]
impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    async fn insert_order(&self, order: &NewOrder) -> Result<(), StoreError> {
        (**self).insert_order(order).await
    }

    async fn insert_line_items(&self, items: &[NewOrderLineItem]) -> Result<(), StoreError> {
        (**self).insert_line_items(items).await
    }
}
