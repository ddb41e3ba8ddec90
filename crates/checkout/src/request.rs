//! Checkout request types, as submitted by the storefront.
//!
//! Fields arrive raw (phone with separators, pincode as free text, prices in
//! rupees) and are normalized inside the pipeline; nothing here is trusted
//! until it has passed validation.

use serde::{Deserialize, Serialize};

use stitchkart_catalog::Sku;
use stitchkart_core::{CustomerId, ProductId};

/// A proposed checkout: customer details, shipping address, cart lines, and
/// optional identity hints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CheckoutRequest {
    pub customer: CustomerDetails,
    pub address: ShippingAddress,
    pub items: Vec<CartLine>,
    /// Already-resolved customer id, if the caller has one.
    pub customer_id: Option<CustomerId>,
    /// Session token for OTP/guest flows.
    pub guest_session_id: Option<String>,
    /// Free-form tag describing how the caller authenticated.
    pub checkout_source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: Option<String>,
    /// Raw phone; normalized to 10 digits by the pipeline.
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShippingAddress {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    /// Raw pincode; normalized to 6 digits by the pipeline.
    pub pincode: String,
    /// Defaults to India when omitted.
    pub country: Option<String>,
}

/// One cart line. Ephemeral: supplied per request, never persisted as-is.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CartLine {
    pub sku: Sku,
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    /// Unit selling price in rupees, as shown to the customer. Authoritative
    /// for what they agreed to pay; not re-priced from inventory.
    pub price: f64,
}
