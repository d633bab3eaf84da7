//! # dukaan-core: Pure Business Logic for Dukaan POS
//!
//! This crate is the **heart** of Dukaan POS, a point-of-sale system for
//! small Indian retail businesses. It contains all business logic as pure
//! functions with zero I/O dependencies: the GST computation engine, invoice
//! assembly, cart math, and validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dukaan POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Web Frontend (collaborator)                    │   │
//! │  │    Catalog UI ──► Cart UI ──► Checkout UI ──► Receipt UI        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dukaan-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │    gst    │  │  invoice  │   │   │
//! │  │   │  Product  │  │   Money   │  │ TaxCalc   │  │ Assembler │   │   │
//! │  │   │  Invoice  │  │  (paise)  │  │ Breakdown │  │  numbers  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   cart    │  │ validation│                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           Persistence / Export collaborators                    │   │
//! │  │   store invoice drafts verbatim, assign ids, print receipts     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Invoice, PaymentMethod)
//! - [`money`] - Money type with integer paise arithmetic (no floating point!)
//! - [`gst`] - The GST engine: CGST/SGST/IGST split with audit-safe rounding
//! - [`invoice`] - Invoice assembly and invoice number generation
//! - [`cart`] - Cart and cart item snapshots
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **One Tax Authority**: GST is computed in exactly one place ([`gst`]), so
//!    the cart preview, the stored invoice, and the printed receipt can never
//!    disagree by a paisa
//!
//! ## Example Usage
//!
//! ```rust
//! use dukaan_core::cart::CartItem;
//! use dukaan_core::gst::TaxCalculator;
//!
//! // A snapshot line: 1 × ₹80.00 at 5% GST
//! let items = vec![CartItem {
//!     product_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//!     name: "Masala Chai 250g".to_string(),
//!     hsn_code: Some("0902".to_string()),
//!     unit_price_paise: 8000,
//!     gst_rate_bps: 500,
//!     quantity: 1,
//! }];
//!
//! // Intra-state sale: the 5% splits evenly into CGST + SGST
//! let gst = TaxCalculator::compute(&items, false).unwrap();
//! assert_eq!(gst.cgst_paise, 200); // ₹2.00
//! assert_eq!(gst.sgst_paise, 200); // ₹2.00
//! assert_eq!(gst.igst_paise, 0);
//! assert_eq!(gst.total_gst_paise, 400); // ₹4.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod gst;
pub mod invoice;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use dukaan_core::Money` instead of
// `use dukaan_core::money::Money`

pub use cart::{Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use gst::{GstBreakdown, TaxCalculator};
pub use invoice::{invoice_number, InvoiceAssembler};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum GST rate in basis points (10000 bps = 100%)
///
/// Rates above this are treated as upstream data corruption and rejected,
/// never clamped.
pub const MAX_GST_RATE_BPS: u32 = 10_000;
