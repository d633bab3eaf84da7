//! # Invoice Assembly
//!
//! Builds an immutable invoice record from a cart snapshot, the GST
//! breakdown, an optional customer, and a payment method.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout (one-way)                                │
//! │                                                                         │
//! │  Cart snapshot ──► TaxCalculator::compute ──► GstBreakdown             │
//! │        │                                           │                    │
//! │        └──────────────┬────────────────────────────┘                    │
//! │                       ▼                                                 │
//! │             InvoiceAssembler::build ──► Invoice (id: None)             │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │        persistence collaborator writes it, assigns id                   │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │             invoice.with_id(storage_id) ──► display / print / export   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Assembly is pure: no storage, no printers, no clock. The caller passes
//! `now` in, and the persistence collaborator owns identifier assignment
//! and invoice-number uniqueness enforcement.

use chrono::{DateTime, Utc};

use crate::cart::CartItem;
use crate::error::{CoreError, CoreResult};
use crate::gst::GstBreakdown;
use crate::types::{Customer, Invoice, InvoiceItem, PaymentMethod};

// =============================================================================
// Invoice Number Generation
// =============================================================================

/// Formats an invoice number from the checkout time and a per-account
/// monotonic sequence: `INV-20260806-000042`.
///
/// A raw timestamp token (the classic `INV-<epoch-millis>`) collides under
/// rapid concurrent checkouts; a caller-supplied sequence cannot, as long
/// as the persistence collaborator allocates it atomically (a counter
/// increment or uniqueness constraint - its concern, not this crate's).
/// The date prefix keeps numbers human-readable, and numbers sort
/// lexicographically in creation order both within and across days.
pub fn invoice_number(now: DateTime<Utc>, sequence: u32) -> String {
    format!("INV-{}-{:06}", now.format("%Y%m%d"), sequence)
}

// =============================================================================
// Invoice Assembler
// =============================================================================

/// Builds invoice records. Stateless; the counterpart of
/// [`crate::gst::TaxCalculator`].
pub struct InvoiceAssembler;

impl InvoiceAssembler {
    /// Assembles an invoice draft from a cart snapshot.
    ///
    /// The caller computes `gst` from the same `items` slice via
    /// [`crate::gst::TaxCalculator::compute`] - assembly does not recompute
    /// tax, it records the breakdown it is handed.
    ///
    /// ## Totals
    /// - `subtotal` is the exact integer sum of line totals
    /// - `total = subtotal + gst.total_gst_paise`, with no further
    ///   rounding: both operands are already at paisa precision
    ///
    /// ## Failure Conditions
    /// - [`CoreError::EmptyCart`] when `items` is empty
    /// - [`CoreError::InvalidCustomer`] when a customer is attached with a
    ///   blank name or phone
    pub fn build(
        items: &[CartItem],
        gst: GstBreakdown,
        customer: Option<Customer>,
        payment_method: PaymentMethod,
        invoice_number: String,
        now: DateTime<Utc>,
    ) -> CoreResult<Invoice> {
        if items.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        if let Some(c) = &customer {
            if c.name.trim().is_empty() {
                return Err(CoreError::InvalidCustomer {
                    reason: "name is required".to_string(),
                });
            }
            if c.phone.trim().is_empty() {
                return Err(CoreError::InvalidCustomer {
                    reason: "phone is required".to_string(),
                });
            }
        }

        let subtotal_paise: i64 = items.iter().map(CartItem::line_total_paise).sum();

        Ok(Invoice {
            id: None,
            invoice_number,
            customer,
            items: items.iter().map(InvoiceItem::from_cart_item).collect(),
            subtotal_paise,
            gst,
            total_paise: subtotal_paise + gst.total_gst_paise,
            created_at: now,
            payment_method,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
