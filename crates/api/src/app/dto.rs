use serde::Deserialize;
use serde_json::{Value, json};

use stitchkart_checkout::CheckoutReceipt;

/// JSON body returned to the payment widget on a successful checkout.
///
/// Amounts are reported both in rupees (for display) and paise (what the
/// gateway will charge).
pub fn receipt_to_json(receipt: &CheckoutReceipt) -> Value {
    json!({
        "order_id": receipt.order_id,
        "order_number": receipt.order_number,
        "subtotal": receipt.subtotal.to_rupees(),
        "shipping_fee": receipt.shipping_fee.to_rupees(),
        "total": receipt.total.to_rupees(),
        "amount_paise": receipt.total.as_u64(),
        "currency": "INR",
        "provider": receipt.provider,
        "gateway_order_id": receipt.gateway_order_id,
        "gateway_public_key": receipt.gateway_public_key,
    })
}

/// Dev-only variant seeding payload.
#[derive(Debug, Deserialize)]
pub struct SeedVariantRequest {
    pub sku: String,
    pub stock: Option<i64>,
    /// Unit selling price in rupees.
    pub price: f64,
    /// Unit procurement cost in rupees.
    #[serde(default)]
    pub cost: f64,
}
