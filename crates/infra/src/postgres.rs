//! Postgres-backed store implementations.
//!
//! Thin sqlx adapters: row mapping and binding only, no business rules.
//! Pools are cheap to clone and thread-safe.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use stitchkart_catalog::{Sku, Variant};
use stitchkart_checkout::{CustomerStore, OrderStore, StoreError, VariantStore};
use stitchkart_core::{CustomerId, Paise, Phone, ProductId, VariantId};
use stitchkart_customers::{Customer, NewCustomer};
use stitchkart_orders::{NewOrder, NewOrderLineItem, OrderStatus, PaymentStatus, ShippingStatus};

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

fn paise_from_row(value: i64) -> Paise {
    Paise::new(value.max(0) as u64)
}

fn order_status_str(s: OrderStatus) -> &'static str {
    match s {
        OrderStatus::Created => "created",
        OrderStatus::Confirmed => "confirmed",
        OrderStatus::Cancelled => "cancelled",
    }
}

fn payment_status_str(s: PaymentStatus) -> &'static str {
    match s {
        PaymentStatus::Pending => "pending",
        PaymentStatus::Paid => "paid",
        PaymentStatus::Failed => "failed",
    }
}

fn shipping_status_str(s: ShippingStatus) -> &'static str {
    match s {
        ShippingStatus::Pending => "pending",
        ShippingStatus::Shipped => "shipped",
        ShippingStatus::Delivered => "delivered",
    }
}

/// Variant reads against the `variants` table.
pub struct PostgresVariantStore {
    pool: PgPool,
}

impl PostgresVariantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VariantStore for PostgresVariantStore {
    async fn find_by_skus(&self, skus: &[Sku]) -> Result<Vec<Variant>, StoreError> {
        let sku_strings: Vec<String> = skus.iter().map(|s| s.as_str().to_string()).collect();

        let rows = sqlx::query(
            r#"
            SELECT id, sku, stock, price, cost, product_id
            FROM variants
            WHERE sku = ANY($1)
            "#,
        )
        .bind(&sku_strings)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter()
            .map(|row| {
                Ok(Variant {
                    id: VariantId::from_uuid(row.try_get::<Uuid, _>("id").map_err(db_err)?),
                    sku: Sku::new(row.try_get::<String, _>("sku").map_err(db_err)?),
                    stock: row.try_get::<Option<i64>, _>("stock").map_err(db_err)?,
                    price: paise_from_row(row.try_get::<i64, _>("price").map_err(db_err)?),
                    cost: paise_from_row(row.try_get::<i64, _>("cost").map_err(db_err)?),
                    product_id: ProductId::from_uuid(
                        row.try_get::<Uuid, _>("product_id").map_err(db_err)?,
                    ),
                })
            })
            .collect()
    }
}

/// Customer lookups and inserts against the `customers` table.
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn customer_from_row(row: &sqlx::postgres::PgRow) -> Result<Customer, StoreError> {
        let phone_raw: String = row.try_get("phone").map_err(db_err)?;
        let phone = Phone::normalize(&phone_raw)
            .map_err(|e| StoreError::Serialization(format!("stored phone invalid: {e}")))?;
        Ok(Customer {
            id: CustomerId::from_uuid(row.try_get::<Uuid, _>("id").map_err(db_err)?),
            name: row.try_get("name").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            phone,
            created_at: row.try_get("created_at").map_err(db_err)?,
        })
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, phone, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::customer_from_row).transpose()
    }

    async fn find_by_session(&self, session_token: &str) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, phone, created_at
            FROM customers
            WHERE session_token = $1
            "#,
        )
        .bind(session_token)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::customer_from_row).transpose()
    }

    async fn create(&self, new: NewCustomer) -> Result<Customer, StoreError> {
        let id = CustomerId::new();

        let row = sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, phone, session_token)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.phone.as_str())
        .bind(&new.session_token)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Self::customer_from_row(&row)
    }
}

/// Order and line-item inserts against `orders` / `order_line_items`.
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn insert_order(&self, order: &NewOrder) -> Result<(), StoreError> {
        let metadata = serde_json::to_value(&order.metadata)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, number, customer_id,
                subtotal, shipping_fee, tax, discount, total, courier_cost,
                status, payment_status, shipping_status,
                gateway_order_id, metadata, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.number.as_str())
        .bind(order.customer_id.map(|c| *c.as_uuid()))
        .bind(order.totals.subtotal.as_u64() as i64)
        .bind(order.totals.shipping_fee.as_u64() as i64)
        .bind(order.totals.tax.as_u64() as i64)
        .bind(order.totals.discount.as_u64() as i64)
        .bind(order.totals.total.as_u64() as i64)
        .bind(order.totals.courier_cost.as_u64() as i64)
        .bind(order_status_str(order.status))
        .bind(payment_status_str(order.payment_status))
        .bind(shipping_status_str(order.shipping_status))
        .bind(&order.gateway_order_id)
        .bind(metadata)
        .bind(order.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn insert_line_items(&self, items: &[NewOrderLineItem]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO order_line_items (
                    order_id, sku, product_id, name, size,
                    quantity, unit_price, unit_cost, subtotal
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(item.order_id.as_uuid())
            .bind(item.sku.as_str())
            .bind(item.product_id.as_uuid())
            .bind(&item.name)
            .bind(&item.size)
            .bind(item.quantity as i32)
            .bind(item.unit_price.as_u64() as i64)
            .bind(item.unit_cost.as_u64() as i64)
            .bind(item.subtotal.as_u64() as i64)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        }

        tx.commit().await.map_err(db_err)
    }
}
