//! # Totals Engine
//!
//! Aggregate totals for quotation and invoice documents.
//!
//! ## The Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   items[]                                                               │
//! │     │  Σ quantity × unit_price                                          │
//! │     ▼                                                                   │
//! │   subtotal ──× (header_discount_percent / 100)──▶ header_discount       │
//! │     │                                                  │                │
//! │     └──────────────── − ───────────────────────────────┘                │
//! │     ▼                                                                   │
//! │   taxable_amount ──× FLAT_TAX_RATE (0.18)──▶ tax_amount                 │
//! │     │                                             │                     │
//! │     └──────────────── + ──────────────────────────┘                     │
//! │     ▼                                                                   │
//! │   grand_total                                                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Flat Rate
//! The aggregate ignores per-line `discount_percent` and `tax_percent`
//! entirely: after the header discount, every document is taxed at the flat
//! 18% document rate. A line's own rates feed only its row display figure
//! (`LineItem::line_total`), so the rows do not sum to the grand total when
//! line rates differ from the document's.
//!
//! The backend recompute and every stored document carry figures produced by
//! this exact arithmetic. `test_flat_rate_ignores_per_line_rates` pins the
//! behavior; switching to per-line tax aggregation needs a coordinated
//! backend and data migration, not a local edit.
//!
//! ## Numeric Ground Rules
//! - All arithmetic in `f64`, in the order shown above. No rounding
//!   anywhere in this module; display rounding happens in `format.rs`.
//! - No validation. Negative quantities, >100 percents and off-slab rates
//!   flow straight through (callers coerce text via `numeric`, so inputs
//!   are finite).
//! - Pure and O(n): safe to recompute on every keystroke.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::amount::Amount;
use crate::types::LineItem;

/// Document-level tax rate applied to the discounted subtotal.
pub const FLAT_TAX_RATE: f64 = 0.18;

// =============================================================================
// Totals Breakdown
// =============================================================================

/// Every figure of the totals panel, in computation order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsBreakdown {
    /// Σ quantity × unit_price over all lines.
    pub subtotal: Amount,
    /// subtotal × (header_discount_percent / 100).
    pub header_discount_amount: Amount,
    /// subtotal − header_discount_amount.
    pub taxable_amount: Amount,
    /// taxable_amount × [`FLAT_TAX_RATE`].
    pub tax_amount: Amount,
    /// taxable_amount + tax_amount.
    pub grand_total: Amount,
}

impl TotalsBreakdown {
    /// The all-zero breakdown of an empty document.
    pub const fn zero() -> Self {
        TotalsBreakdown {
            subtotal: Amount::zero(),
            header_discount_amount: Amount::zero(),
            taxable_amount: Amount::zero(),
            tax_amount: Amount::zero(),
            grand_total: Amount::zero(),
        }
    }
}

impl Default for TotalsBreakdown {
    fn default() -> Self {
        TotalsBreakdown::zero()
    }
}

// =============================================================================
// Computation
// =============================================================================

/// Computes the document totals from the lines and the header discount.
///
/// ## Example
/// ```rust
/// use quotient_core::{totals, LineItem};
///
/// let items = vec![LineItem {
///     description: "Zinc phosphate primer".to_string(),
///     hsn_code: None,
///     quantity: 2.0,
///     unit_price: 100.0,
///     discount_percent: 0.0,
///     tax_percent: 18.0,
/// }];
///
/// let breakdown = totals::compute(&items, 10.0);
/// assert_eq!(breakdown.subtotal.value(), 200.0);
/// assert_eq!(breakdown.header_discount_amount.value(), 20.0);
/// assert_eq!(breakdown.taxable_amount.value(), 180.0);
/// assert_eq!(breakdown.tax_amount.value(), 32.4);
/// assert_eq!(breakdown.grand_total.value(), 212.4);
/// ```
pub fn compute(items: &[LineItem], header_discount_percent: f64) -> TotalsBreakdown {
    let mut subtotal = Amount::zero();
    for item in items {
        subtotal += item.line_subtotal();
    }

    let header_discount_amount = subtotal.percent(header_discount_percent);
    let taxable_amount = subtotal - header_discount_amount;
    let tax_amount = taxable_amount * FLAT_TAX_RATE;
    let grand_total = taxable_amount + tax_amount;

    TotalsBreakdown {
        subtotal,
        header_discount_amount,
        taxable_amount,
        tax_amount,
        grand_total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::numeric::parse_or_zero;
    use proptest::prelude::*;

    fn line(quantity: f64, unit_price: f64) -> LineItem {
        LineItem {
            description: "Property item".to_string(),
            hsn_code: None,
            quantity,
            unit_price,
            discount_percent: 0.0,
            tax_percent: 18.0,
        }
    }

    proptest! {
        // Whole-unit quantities and prices keep the comparison clear of
        // ulp-level noise while covering the realistic input range.
        #[test]
        fn prop_grand_monotonic_in_quantity(
            qty in 0u32..10_000,
            bump in 1u32..1_000,
            price in 0u32..100_000,
            hd in 0u8..=100,
        ) {
            let before = compute(&[line(qty as f64, price as f64)], hd as f64);
            let after = compute(&[line((qty + bump) as f64, price as f64)], hd as f64);
            prop_assert!(after.grand_total.value() >= before.grand_total.value());
        }

        #[test]
        fn prop_grand_monotonic_in_price(
            qty in 0u32..10_000,
            price in 0u32..100_000,
            bump in 1u32..10_000,
            hd in 0u8..=100,
        ) {
            let before = compute(&[line(qty as f64, price as f64)], hd as f64);
            let after = compute(&[line(qty as f64, (price + bump) as f64)], hd as f64);
            prop_assert!(after.grand_total.value() >= before.grand_total.value());
        }

        #[test]
        fn prop_per_line_rates_never_change_aggregate(
            rows in prop::collection::vec(
                (0.0f64..1_000.0, 0.0f64..100_000.0, 0.0f64..100.0, 0.0f64..100.0),
                0..20,
            ),
            hd in 0.0f64..100.0,
        ) {
            let rated: Vec<LineItem> = rows
                .iter()
                .map(|&(qty, price, disc, tax)| LineItem {
                    discount_percent: disc,
                    tax_percent: tax,
                    ..line(qty, price)
                })
                .collect();
            let unrated: Vec<LineItem> = rows
                .iter()
                .map(|&(qty, price, _, _)| line(qty, price))
                .collect();

            prop_assert_eq!(compute(&rated, hd), compute(&unrated, hd));
        }

        #[test]
        fn prop_zero_line_is_identity(
            rows in prop::collection::vec((0.0f64..1_000.0, 0.0f64..100_000.0), 0..20),
            hd in 0.0f64..100.0,
            dead_price in 0.0f64..100_000.0,
        ) {
            let base: Vec<LineItem> =
                rows.iter().map(|&(qty, price)| line(qty, price)).collect();
            let mut padded = base.clone();
            padded.push(line(0.0, dead_price));

            prop_assert_eq!(compute(&base, hd), compute(&padded, hd));
        }

        // Form-realistic text (numbers bounded well below overflow, or
        // garbage that coerces to zero) can never produce NaN figures.
        #[test]
        fn prop_outputs_finite_for_coerced_text(
            raw in prop::collection::vec(
                (
                    "[0-9]{1,6}(\\.[0-9]{1,3})?|[a-zA-Z ,;]{0,10}",
                    "[0-9]{1,7}(\\.[0-9]{1,2})?|[a-zA-Z ,;]{0,10}",
                ),
                0..20,
            ),
            hd_raw in "[0-9]{1,3}(\\.[0-9]{1,2})?|[a-zA-Z ,;]{0,10}",
        ) {
            let items: Vec<LineItem> = raw
                .iter()
                .map(|(qty, price)| line(parse_or_zero(qty), parse_or_zero(price)))
                .collect();
            let breakdown = compute(&items, parse_or_zero(&hd_raw));

            prop_assert!(breakdown.subtotal.value().is_finite());
            prop_assert!(breakdown.header_discount_amount.value().is_finite());
            prop_assert!(breakdown.taxable_amount.value().is_finite());
            prop_assert!(breakdown.tax_amount.value().is_finite());
            prop_assert!(breakdown.grand_total.value().is_finite());
        }
    }
}
