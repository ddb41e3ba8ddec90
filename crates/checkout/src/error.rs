//! Checkout result taxonomy.
//!
//! Callers branch on the error kind, never on message strings: validation
//! failures, stock conflicts, dependency failures, and store failures each
//! map to a distinct HTTP shape at the API layer.

use thiserror::Error;

use stitchkart_catalog::StockFailure;
use stitchkart_core::Paise;

use crate::gateway::GatewayError;
use crate::stores::StoreError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Malformed client input (phone, pincode, address, cart shape).
    /// Always raised before any external side effect.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// One or more SKUs failed the read-only stock check. Carries the full
    /// per-SKU failure list so the client can adjust the cart.
    #[error("stock validation failed for {} sku(s)", .0.len())]
    StockConflict(Vec<StockFailure>),

    /// Total payable is below the gateway's minimum chargeable amount.
    /// Raised before any gateway call.
    #[error("total {total} is below the gateway minimum of {minimum}")]
    AmountBelowMinimum { total: Paise, minimum: Paise },

    /// The payment gateway call failed or returned no order id. Nothing was
    /// persisted locally.
    #[error("payment gateway failure: {0}")]
    Gateway(#[from] GatewayError),

    /// A database operation failed.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl CheckoutError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
