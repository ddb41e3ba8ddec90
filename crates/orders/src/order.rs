use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stitchkart_catalog::Sku;
use stitchkart_core::{CustomerId, OrderId, Paise, Phone, ProductId};
use stitchkart_customers::Address;

use crate::number::OrderNumber;

/// Order lifecycle status (independent of payment and shipping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Confirmed,
    Cancelled,
}

/// Payment status, driven later by gateway webhooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

/// Shipping status, driven later by the courier integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingStatus {
    Pending,
    Shipped,
    Delivered,
}

/// Monetary totals for an order, all in paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Paise,
    /// Shipping fee charged to the customer (zero in the current config).
    pub shipping_fee: Paise,
    pub tax: Paise,
    pub discount: Paise,
    /// Total payable: subtotal + shipping + tax - discount.
    pub total: Paise,
    /// Internal courier cost, tracked but never charged.
    pub courier_cost: Paise,
}

impl OrderTotals {
    /// Totals for the observed configuration: free shipping, no tax, no
    /// discount, so total payable equals the subtotal.
    pub fn from_subtotal(subtotal: Paise) -> Self {
        Self {
            subtotal,
            shipping_fee: Paise::ZERO,
            tax: Paise::ZERO,
            discount: Paise::ZERO,
            total: subtotal,
            courier_cost: Paise::ZERO,
        }
    }
}

/// One priced cart line as the customer saw it, frozen into the metadata
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedItemSnapshot {
    pub sku: Sku,
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: Paise,
    pub subtotal: Paise,
}

/// Immutable snapshot of customer contact, address, and priced items at
/// order-creation time, decoupled from later changes to customer or catalog
/// records. Stored as a JSON blob on the order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMetadata {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Phone,
    pub address: Address,
    pub items: Vec<PricedItemSnapshot>,
    pub checkout_source: String,
    pub guest_session_id: Option<String>,
}

/// Write model for the single order insert.
///
/// `gateway_order_id` is a required field: an order cannot be constructed,
/// let alone persisted, without its external payment order reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub id: OrderId,
    pub number: OrderNumber,
    pub customer_id: Option<CustomerId>,
    pub totals: OrderTotals,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub shipping_status: ShippingStatus,
    pub gateway_order_id: String,
    pub metadata: OrderMetadata,
    pub created_at: DateTime<Utc>,
}

/// Write model for one denormalized order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLineItem {
    pub order_id: OrderId,
    pub sku: Sku,
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: Paise,
    pub unit_cost: Paise,
    pub subtotal: Paise,
}
