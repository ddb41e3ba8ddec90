//! Catalog domain module: variants and stock validation.
//!
//! Pure, read-only business rules (no IO). The checkout pipeline never
//! decrements stock here; inventory deduction happens at payment
//! confirmation, outside this crate.

pub mod stock;
pub mod variant;

pub use stock::{StockFailure, StockFailureReason, check_stock};
pub use variant::{Sku, Variant};
