//! Read-only stock validation for a proposed cart.
//!
//! Stock is read and compared, never decremented or locked, so two
//! concurrent checkouts can both pass against the same limited stock.
//! Oversell is resolved later, at payment confirmation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::variant::{Sku, Variant};

/// Why a SKU failed stock validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockFailureReason {
    VariantNotFound,
    InsufficientStock,
}

/// Per-SKU stock validation failure, with enough detail for the client to
/// adjust the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockFailure {
    pub sku: Sku,
    pub reason: StockFailureReason,
    /// Total quantity requested across all cart lines for this SKU.
    pub requested_quantity: i64,
    pub available_quantity: i64,
}

/// Validate requested quantities against fetched inventory variants.
///
/// Requested quantities for the same SKU are summed first, so a cart that
/// lists one SKU on several lines is checked against the aggregate.
///
/// If any requested SKU has no matching variant, only those missing SKUs are
/// reported (with zero availability) and the quantity comparison is skipped.
/// Otherwise every SKU whose aggregate request exceeds available stock (null
/// stock counts as zero) is reported. An empty vec means the cart is
/// satisfiable as of this read.
pub fn check_stock<'a, I>(requested: I, variants: &[Variant]) -> Vec<StockFailure>
where
    I: IntoIterator<Item = (&'a Sku, u32)>,
{
    let mut wanted: BTreeMap<&Sku, i64> = BTreeMap::new();
    for (sku, quantity) in requested {
        *wanted.entry(sku).or_insert(0) += i64::from(quantity);
    }

    let by_sku: BTreeMap<&Sku, &Variant> = variants.iter().map(|v| (&v.sku, v)).collect();

    let missing: Vec<StockFailure> = wanted
        .iter()
        .filter(|(sku, _)| !by_sku.contains_key(*sku))
        .map(|(sku, &quantity)| StockFailure {
            sku: (*sku).clone(),
            reason: StockFailureReason::VariantNotFound,
            requested_quantity: quantity,
            available_quantity: 0,
        })
        .collect();
    if !missing.is_empty() {
        return missing;
    }

    wanted
        .iter()
        .filter_map(|(sku, &quantity)| {
            let available = by_sku[*sku].available();
            (quantity > available).then(|| StockFailure {
                sku: (*sku).clone(),
                reason: StockFailureReason::InsufficientStock,
                requested_quantity: quantity,
                available_quantity: available,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stitchkart_core::{Paise, ProductId, VariantId};

    fn variant(sku: &str, stock: Option<i64>) -> Variant {
        Variant {
            id: VariantId::new(),
            sku: Sku::from(sku),
            stock,
            price: Paise::new(50_000),
            cost: Paise::new(20_000),
            product_id: ProductId::new(),
        }
    }

    fn lines(pairs: &[(&str, u32)]) -> Vec<(Sku, u32)> {
        pairs.iter().map(|(s, q)| (Sku::from(*s), *q)).collect()
    }

    fn check(pairs: &[(&str, u32)], variants: &[Variant]) -> Vec<StockFailure> {
        let owned = lines(pairs);
        check_stock(owned.iter().map(|(s, q)| (s, *q)), variants)
    }

    #[test]
    fn passes_when_stock_covers_request() {
        let failures = check(&[("A1", 2)], &[variant("A1", Some(5))]);
        assert!(failures.is_empty());
    }

    #[test]
    fn reports_missing_variants_with_zero_availability() {
        let failures = check(&[("A1", 2), ("B2", 1)], &[variant("A1", Some(5))]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].sku, Sku::from("B2"));
        assert_eq!(failures[0].reason, StockFailureReason::VariantNotFound);
        assert_eq!(failures[0].requested_quantity, 1);
        assert_eq!(failures[0].available_quantity, 0);
    }

    #[test]
    fn missing_variants_short_circuit_quantity_checks() {
        // A1 is also short, but only the missing SKU is reported.
        let failures = check(&[("A1", 99), ("B2", 1)], &[variant("A1", Some(5))]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].reason, StockFailureReason::VariantNotFound);
    }

    #[test]
    fn aggregates_duplicate_sku_lines_before_comparing() {
        let failures = check(&[("A1", 2), ("A1", 4)], &[variant("A1", Some(5))]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].reason, StockFailureReason::InsufficientStock);
        assert_eq!(failures[0].requested_quantity, 6);
        assert_eq!(failures[0].available_quantity, 5);
    }

    #[test]
    fn null_stock_is_treated_as_zero() {
        let failures = check(&[("A1", 1)], &[variant("A1", None)]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].reason, StockFailureReason::InsufficientStock);
        assert_eq!(failures[0].available_quantity, 0);
    }

    #[test]
    fn exact_stock_match_passes() {
        let failures = check(&[("A1", 5)], &[variant("A1", Some(5))]);
        assert!(failures.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Splitting a quantity across duplicate lines never changes the
            /// validation outcome.
            #[test]
            fn split_lines_equal_single_line(
                total in 1u32..50,
                split in 0u32..50,
                stock in 0i64..50,
            ) {
                let split = split.min(total.saturating_sub(1));
                let variants = [variant("A1", Some(stock))];

                let single = check(&[("A1", total)], &variants);
                let multi = if split == 0 {
                    check(&[("A1", total)], &variants)
                } else {
                    check(&[("A1", split), ("A1", total - split)], &variants)
                };

                prop_assert_eq!(single, multi);
            }

            /// Validation fails iff the aggregate request exceeds stock.
            #[test]
            fn failure_iff_over_stock(quantity in 1u32..100, stock in 0i64..100) {
                let failures = check(&[("A1", quantity)], &[variant("A1", Some(stock))]);
                prop_assert_eq!(!failures.is_empty(), i64::from(quantity) > stock);
            }
        }
    }
}
