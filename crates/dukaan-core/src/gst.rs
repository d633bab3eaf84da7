//! # GST Engine
//!
//! Computes the CGST/SGST/IGST breakdown for a cart of line items.
//!
//! ## The Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INDIAN GST JURISDICTION SPLIT                                          │
//! │                                                                         │
//! │  Intra-state sale (seller and buyer in the same state):                │
//! │    every line's tax splits evenly                                       │
//! │    CGST (central half) + SGST (state half), IGST = 0                   │
//! │                                                                         │
//! │  Inter-state sale:                                                      │
//! │    the whole tax is IGST, CGST = SGST = 0                              │
//! │                                                                         │
//! │  Rates differ PER ITEM (chai at 5%, a kettle at 18%), so the split is  │
//! │  applied per line at accumulation time, not to the aggregate.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Rounding Contract
//! The printed receipt shows CGST, SGST, and IGST individually, and the
//! printed tax total must equal their visible sum. That forces an order of
//! operations:
//!
//! 1. accumulate each bucket at FULL precision across all items
//! 2. round each bucket once, half away from zero, at the paisa
//! 3. total = rounded CGST + rounded SGST + rounded IGST
//!
//! Rounding the raw aggregate instead of summing the rounded parts can
//! disagree with the visible sum by a paisa, which on a tax document is an
//! audit defect. Step 3 is therefore not an optimization target.
//!
//! Full precision costs nothing here: a line's raw tax is the integer
//! `line_total_paise × rate_bps`, so the accumulators hold exact
//! "paise·bps" numerators and the only rounding in the whole pipeline is
//! step 2's single division per bucket.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_GST_RATE_BPS;

/// Denominator converting a paise·bps numerator to paise.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// GST Breakdown
// =============================================================================

/// The tax breakdown for one sale, at paisa precision.
///
/// ## Invariants
/// - `total_gst_paise == cgst_paise + sgst_paise + igst_paise`, exactly
/// - intra-state: `igst_paise == 0` and `cgst_paise == sgst_paise`
/// - inter-state: `cgst_paise == sgst_paise == 0`
///
/// Only [`TaxCalculator::compute`] constructs non-zero breakdowns, which is
/// what keeps these invariants true everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstBreakdown {
    /// Central GST in paise.
    pub cgst_paise: i64,
    /// State GST in paise.
    pub sgst_paise: i64,
    /// Integrated GST in paise (inter-state sales only).
    pub igst_paise: i64,
    /// Sum of the three rounded buckets, in paise.
    pub total_gst_paise: i64,
}

impl GstBreakdown {
    /// All-zero breakdown (empty cart, or a cart of exempt goods).
    pub const fn zero() -> Self {
        GstBreakdown {
            cgst_paise: 0,
            sgst_paise: 0,
            igst_paise: 0,
            total_gst_paise: 0,
        }
    }

    /// Returns the CGST amount as Money.
    #[inline]
    pub fn cgst(&self) -> Money {
        Money::from_paise(self.cgst_paise)
    }

    /// Returns the SGST amount as Money.
    #[inline]
    pub fn sgst(&self) -> Money {
        Money::from_paise(self.sgst_paise)
    }

    /// Returns the IGST amount as Money.
    #[inline]
    pub fn igst(&self) -> Money {
        Money::from_paise(self.igst_paise)
    }

    /// Returns the total GST as Money.
    #[inline]
    pub fn total_gst(&self) -> Money {
        Money::from_paise(self.total_gst_paise)
    }
}

impl Default for GstBreakdown {
    fn default() -> Self {
        GstBreakdown::zero()
    }
}

// =============================================================================
// Tax Calculator
// =============================================================================

/// The single authority for GST computation.
///
/// Stateless and pure: identical inputs produce bit-identical breakdowns,
/// and concurrent calls need no coordination. Cart preview, invoice
/// assembly, and receipt rendering all consume this one function, so their
/// numbers can never diverge.
pub struct TaxCalculator;

impl TaxCalculator {
    /// Computes the GST breakdown for a snapshot of cart lines.
    ///
    /// An empty slice is a valid input and yields the zero breakdown. A
    /// line whose rate exceeds 100% fails with
    /// [`CoreError::InvalidTaxRate`]; rates are never clamped.
    ///
    /// ## Example
    /// ```rust
    /// use dukaan_core::cart::CartItem;
    /// use dukaan_core::gst::TaxCalculator;
    ///
    /// let items = vec![CartItem {
    ///     product_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
    ///     name: "Electric Kettle".to_string(),
    ///     hsn_code: Some("8516".to_string()),
    ///     unit_price_paise: 1_500_000, // ₹15,000.00
    ///     gst_rate_bps: 1800,          // 18%
    ///     quantity: 1,
    /// }];
    ///
    /// // Inter-state: the whole 18% is IGST
    /// let gst = TaxCalculator::compute(&items, true).unwrap();
    /// assert_eq!(gst.igst_paise, 270_000); // ₹2,700.00
    /// assert_eq!(gst.cgst_paise, 0);
    /// assert_eq!(gst.sgst_paise, 0);
    /// assert_eq!(gst.total_gst_paise, 270_000);
    /// ```
    pub fn compute(items: &[CartItem], is_inter_state: bool) -> CoreResult<GstBreakdown> {
        // Exact numerators in paise·bps units. The intra-state halving is
        // folded into the denominator at rounding time, so an odd numerator
        // loses nothing before the final division.
        let mut cgst_num: i128 = 0;
        let mut sgst_num: i128 = 0;
        let mut igst_num: i128 = 0;

        for item in items {
            if item.gst_rate_bps > MAX_GST_RATE_BPS {
                return Err(CoreError::InvalidTaxRate {
                    rate_bps: item.gst_rate_bps,
                });
            }
            debug_assert!(item.quantity >= 1, "cart line with non-positive quantity");
            debug_assert!(item.unit_price_paise >= 0, "cart line with negative price");

            let line_tax_num = item.line_total_paise() as i128 * item.gst_rate_bps as i128;

            if is_inter_state {
                igst_num += line_tax_num;
            } else {
                // Per-line split: this line's tax goes half to the central
                // bucket, half to the state bucket.
                cgst_num += line_tax_num;
                sgst_num += line_tax_num;
            }
        }

        let cgst_paise = round_to_paise(cgst_num, BPS_SCALE * 2);
        let sgst_paise = round_to_paise(sgst_num, BPS_SCALE * 2);
        let igst_paise = round_to_paise(igst_num, BPS_SCALE);

        Ok(GstBreakdown {
            cgst_paise,
            sgst_paise,
            igst_paise,
            // The sum of the rounded buckets, NOT a re-rounding of the raw
            // aggregate. See the module docs for why the order matters.
            total_gst_paise: cgst_paise + sgst_paise + igst_paise,
        })
    }
}

/// Rounds a non-negative exact numerator to whole paise, half away from
/// zero: `(num + denom/2) / denom`, the same integer pattern the rest of
/// this codebase uses for monetary rounding.
fn round_to_paise(num: i128, denom: i128) -> i64 {
    ((num + denom / 2) / denom) as i64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price_paise: i64, qty: i64, rate_bps: u32) -> CartItem {
        CartItem {
            product_id: format!("product-{}-{}", price_paise, rate_bps),
            name: "Test Product".to_string(),
            hsn_code: None,
            unit_price_paise: price_paise,
            gst_rate_bps: rate_bps,
            quantity: qty,
        }
    }

    #[test]
    fn test_empty_cart_is_zero() {
        let gst = TaxCalculator::compute(&[], false).unwrap();
        assert_eq!(gst, GstBreakdown::zero());

        let gst = TaxCalculator::compute(&[], true).unwrap();
        assert_eq!(gst, GstBreakdown::zero());
    }

    #[test]
    fn test_intra_state_single_item() {
        // ₹80.00 at 5%: tax ₹4.00 → CGST ₹2.00 + SGST ₹2.00
        let items = vec![line(8000, 1, 500)];
        let gst = TaxCalculator::compute(&items, false).unwrap();

        assert_eq!(gst.cgst_paise, 200);
        assert_eq!(gst.sgst_paise, 200);
        assert_eq!(gst.igst_paise, 0);
        assert_eq!(gst.total_gst_paise, 400);
    }

    #[test]
    fn test_inter_state_single_item() {
        // ₹15,000.00 at 18%: the whole ₹2,700.00 is IGST
        let items = vec![line(1_500_000, 1, 1800)];
        let gst = TaxCalculator::compute(&items, true).unwrap();

        assert_eq!(gst.cgst_paise, 0);
        assert_eq!(gst.sgst_paise, 0);
        assert_eq!(gst.igst_paise, 270_000);
        assert_eq!(gst.total_gst_paise, 270_000);
    }

    #[test]
    fn test_intra_state_mixed_rates() {
        // ₹80 at 5% (tax ₹4.00) + 2 × ₹500 at 12% (tax ₹120.00)
        // CGST = 2.00 + 60.00 = 62.00, SGST likewise, total ₹124.00
        let items = vec![line(8000, 1, 500), line(50_000, 2, 1200)];
        let gst = TaxCalculator::compute(&items, false).unwrap();

        assert_eq!(gst.cgst_paise, 6200);
        assert_eq!(gst.sgst_paise, 6200);
        assert_eq!(gst.igst_paise, 0);
        assert_eq!(gst.total_gst_paise, 12_400);
    }

    #[test]
    fn test_half_paisa_rounds_away_from_zero_per_bucket() {
        // ₹1.00 at 5%: raw tax is 5 paise, each half is 2.5 paise.
        // Each bucket rounds half away from zero → 3 + 3 = 6 paise total.
        // The intra-state total legitimately differs from the 5-paise
        // inter-state tax; the parts must reconcile with the total, and
        // they do.
        let items = vec![line(100, 1, 500)];

        let intra = TaxCalculator::compute(&items, false).unwrap();
        assert_eq!(intra.cgst_paise, 3);
        assert_eq!(intra.sgst_paise, 3);
        assert_eq!(intra.total_gst_paise, 6);

        let inter = TaxCalculator::compute(&items, true).unwrap();
        assert_eq!(inter.igst_paise, 5);
        assert_eq!(inter.total_gst_paise, 5);
    }

    #[test]
    fn test_total_is_sum_of_rounded_buckets() {
        // Two lines whose raw bucket values both land on fractions:
        // ₹0.99 at 18% → raw tax 17.82p, halves 8.91p
        // ₹1.05 at 5%  → raw tax  5.25p, halves 2.625p
        // CGST raw = 11.535p → 12p, SGST raw = 11.535p → 12p, total 24p
        let items = vec![line(99, 1, 1800), line(105, 1, 500)];
        let gst = TaxCalculator::compute(&items, false).unwrap();

        assert_eq!(gst.cgst_paise, 12);
        assert_eq!(gst.sgst_paise, 12);
        assert_eq!(
            gst.total_gst_paise,
            gst.cgst_paise + gst.sgst_paise + gst.igst_paise
        );
    }

    #[test]
    fn test_zero_rate_items_contribute_nothing() {
        // Exempt goods (0%) alongside a taxed line
        let items = vec![line(20_000, 3, 0), line(8000, 1, 500)];
        let gst = TaxCalculator::compute(&items, false).unwrap();

        assert_eq!(gst.cgst_paise, 200);
        assert_eq!(gst.sgst_paise, 200);
        assert_eq!(gst.total_gst_paise, 400);
    }

    #[test]
    fn test_fractional_slab_rate() {
        // 0.25% slab (rough precious stones): ₹10,000.00 → tax ₹25.00
        let items = vec![line(1_000_000, 1, 25)];
        let gst = TaxCalculator::compute(&items, true).unwrap();
        assert_eq!(gst.igst_paise, 2500);
    }

    #[test]
    fn test_rate_above_hundred_percent_rejected() {
        let items = vec![line(8000, 1, 10_001)];
        let err = TaxCalculator::compute(&items, false).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTaxRate { rate_bps: 10_001 }
        ));

        // 100% exactly is the inclusive upper bound
        let items = vec![line(8000, 1, 10_000)];
        let gst = TaxCalculator::compute(&items, true).unwrap();
        assert_eq!(gst.igst_paise, 8000);
    }

    #[test]
    fn test_cgst_always_equals_sgst_intra_state() {
        // Awkward prices and odd quantities across mixed slabs
        let items = vec![
            line(33, 7, 500),
            line(101, 3, 1200),
            line(999, 13, 1800),
            line(1, 1, 2800),
        ];
        let gst = TaxCalculator::compute(&items, false).unwrap();

        assert_eq!(gst.cgst_paise, gst.sgst_paise);
        assert_eq!(gst.igst_paise, 0);
        assert_eq!(gst.total_gst_paise, gst.cgst_paise + gst.sgst_paise);
    }

    #[test]
    fn test_idempotence() {
        let items = vec![line(8000, 1, 500), line(50_000, 2, 1200)];
        let first = TaxCalculator::compute(&items, false).unwrap();
        let second = TaxCalculator::compute(&items, false).unwrap();
        assert_eq!(first, second);
    }
}
