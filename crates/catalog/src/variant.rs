use serde::{Deserialize, Serialize};

use stitchkart_core::{Paise, ProductId, VariantId};

/// Stock-keeping unit: identifies one purchasable variant (a specific size
/// of a product).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Inventory record for one SKU.
///
/// Read-only in the checkout flow: stock is compared, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub sku: Sku,
    /// Units on hand; `None` is treated as zero.
    pub stock: Option<i64>,
    /// Unit selling price.
    pub price: Paise,
    /// Unit procurement cost (informational, carried onto order lines).
    pub cost: Paise,
    pub product_id: ProductId,
}

impl Variant {
    /// Available units, with null stock treated as zero.
    pub fn available(&self) -> i64 {
        self.stock.unwrap_or(0)
    }
}
