//! # Domain Types
//!
//! Core domain types used throughout Dukaan POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Invoice      │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  invoice_number │   │  id (UUID)      │       │
//! │  │  hsn_code       │   │  items (frozen) │   │  name, phone    │       │
//! │  │  price_paise    │   │  GstBreakdown   │   │  gst_number     │       │
//! │  │  gst_rate_bps   │   │  total_paise    │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    GstRate      │   │ PaymentMethod   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  Cash           │                             │
//! │  │  500 = 5%       │   │  Card           │                             │
//! │  └─────────────────┘   │  Upi            │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An invoice never references live catalog rows. Line items are frozen
//! copies taken at checkout, so later price or rate edits can never
//! retroactively alter a past invoice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::gst::GstBreakdown;
use crate::money::Money;

// =============================================================================
// GST Rate
// =============================================================================

/// GST rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5%, 1800 bps = 18% (common Indian GST slabs)
///
/// Basis points also represent the fractional slabs exactly: 0.25% for
/// rough precious stones is 25 bps, 3% for gold is 300 bps. A float percent
/// cannot be trusted to round-trip those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstRate(u32);

impl GstRate {
    /// Creates a GST rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        GstRate(bps)
    }

    /// Creates a GST rate from a percentage (for convenience at the UI
    /// boundary, where rates arrive as numbers like `5` or `18`).
    pub fn from_percentage(pct: f64) -> Self {
        GstRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate (exempt goods).
    #[inline]
    pub const fn zero() -> Self {
        GstRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for GstRate {
    fn default() -> Self {
        GstRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to cashier and on receipt.
    pub name: String,

    /// Barcode (EAN-13, UPC-A, etc.).
    pub barcode: Option<String>,

    /// HSN code for GST classification (4-8 digits), printed per line on
    /// tax invoices.
    pub hsn_code: Option<String>,

    /// Catalog category name.
    pub category: String,

    /// Price in paise (smallest currency unit).
    pub price_paise: i64,

    /// GST rate in basis points (500 = 5%).
    pub gst_rate_bps: u32,

    /// Current stock level.
    pub stock: i64,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }

    /// Returns the GST rate.
    #[inline]
    pub fn gst_rate(&self) -> GstRate {
        GstRate::from_bps(self.gst_rate_bps)
    }

    /// Checks if the product can be sold in the requested quantity.
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.is_active && quantity <= self.stock
    }
}

// =============================================================================
// Customer
// =============================================================================

/// An optional customer attached to an invoice (walk-in sales have none).
///
/// Name and phone are required once a customer is attached; address and
/// GSTIN stay optional (B2C customers rarely have a GSTIN).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Billing address.
    pub address: Option<String>,

    /// GSTIN, for B2B invoices where the buyer claims input credit.
    pub gst_number: Option<String>,
}

// =============================================================================
// Payment Method
// =============================================================================

#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// UPI transfer (PhonePe, GPay, etc.).
    Upi,
}

// =============================================================================
// Invoice Item
// =============================================================================

/// A line item on an invoice.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceItem {
    /// Product this line was sold from (for reporting joins only; the
    /// fields below are authoritative for this invoice).
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// HSN code at time of sale (frozen).
    pub hsn_code: Option<String>,

    /// Unit price in paise at time of sale (frozen).
    pub unit_price_paise: i64,

    /// Quantity sold.
    pub quantity: i64,

    /// GST rate in basis points at time of sale (frozen).
    pub gst_rate_bps: u32,

    /// Line total before tax (unit_price × quantity), exact.
    pub line_total_paise: i64,
}

impl InvoiceItem {
    /// Freezes a cart line into an invoice line.
    pub fn from_cart_item(item: &CartItem) -> Self {
        InvoiceItem {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            hsn_code: item.hsn_code.clone(),
            unit_price_paise: item.unit_price_paise,
            quantity: item.quantity,
            gst_rate_bps: item.gst_rate_bps,
            line_total_paise: item.line_total_paise(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_paise(self.line_total_paise)
    }
}

// =============================================================================
// Receipt Line
// =============================================================================

/// Per-item disclosure for receipt rendering.
///
/// The renderer prints GST% and HSN per line from these values without
/// recomputing anything. Deliberately carries the rate, not a per-line tax
/// amount: tax is rounded per bucket across the whole invoice, so a
/// per-line rounded tax column could fail to sum to the printed totals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptLine {
    pub name: String,
    pub hsn_code: Option<String>,
    pub quantity: i64,
    pub unit_price_paise: i64,
    pub line_total_paise: i64,
    pub gst_rate_bps: u32,
}

// =============================================================================
// Invoice
// =============================================================================

/// A finalized sale. Immutable once assembled.
///
/// ## Lifecycle
/// ```text
/// Cart snapshot ──► TaxCalculator ──► InvoiceAssembler ──► Invoice (id: None)
///                                                               │
///                                      persistence commit ──► with_id(...)
/// ```
///
/// The persistence collaborator stores the record verbatim and never
/// recomputes totals on read.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    /// Storage identifier. `None` until the persistence collaborator
    /// assigns one after a successful write.
    pub id: Option<String>,

    /// Human-readable invoice number, e.g. `INV-20260806-000042`.
    /// Unique per business account; see [`crate::invoice::invoice_number`].
    pub invoice_number: String,

    /// Customer, if one was attached at checkout.
    pub customer: Option<Customer>,

    /// Frozen line items.
    pub items: Vec<InvoiceItem>,

    /// Sum of line totals, in paise. Exact (integer aggregation).
    pub subtotal_paise: i64,

    /// CGST/SGST/IGST split for this sale.
    pub gst: GstBreakdown,

    /// Grand total: subtotal + total GST. Exact at paisa precision.
    pub total_paise: i64,

    /// When the invoice was created (UTC; serializes as ISO 8601).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// How the sale was paid.
    pub payment_method: PaymentMethod,
}

impl Invoice {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_paise(self.subtotal_paise)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }

    /// Attaches the storage identifier assigned by the persistence
    /// collaborator. Consumes the draft; every computed field is unchanged.
    pub fn with_id(self, id: impl Into<String>) -> Invoice {
        Invoice {
            id: Some(id.into()),
            ..self
        }
    }

    /// Derives the per-item disclosure lines for receipt rendering.
    pub fn receipt_lines(&self) -> Vec<ReceiptLine> {
        self.items
            .iter()
            .map(|item| ReceiptLine {
                name: item.name.clone(),
                hsn_code: item.hsn_code.clone(),
                quantity: item.quantity,
                unit_price_paise: item.unit_price_paise,
                line_total_paise: item.line_total_paise,
                gst_rate_bps: item.gst_rate_bps,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_rate_from_bps() {
        let rate = GstRate::from_bps(500);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_gst_rate_from_percentage() {
        assert_eq!(GstRate::from_percentage(5.0).bps(), 500);
        assert_eq!(GstRate::from_percentage(18.0).bps(), 1800);
        // Fractional slabs survive the conversion
        assert_eq!(GstRate::from_percentage(0.25).bps(), 25);
    }

    #[test]
    fn test_product_can_sell() {
        let product = Product {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Masala Chai 250g".to_string(),
            barcode: None,
            hsn_code: Some("0902".to_string()),
            category: "Beverages".to_string(),
            price_paise: 8000,
            gst_rate_bps: 500,
            stock: 3,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(product.can_sell(3));
        assert!(!product.can_sell(4));

        let inactive = Product {
            is_active: false,
            ..product
        };
        assert!(!inactive.can_sell(1));
    }

    #[test]
    fn test_payment_method_serde() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"cash\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Upi).unwrap(),
            "\"upi\""
        );
        let method: PaymentMethod = serde_json::from_str("\"card\"").unwrap();
        assert_eq!(method, PaymentMethod::Card);
    }
}
