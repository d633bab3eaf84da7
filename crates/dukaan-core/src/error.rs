//! # Error Types
//!
//! Domain-specific error types for dukaan-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dukaan-core errors (this file)                                        │
//! │  ├── CoreError        - Checkout precondition violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Everything here is synchronous and local: there is no I/O in this     │
//! │  crate, so there are no retryable conditions. The surrounding UI       │
//! │  branches on these variants to decide whether to re-prompt or abort    │
//! │  the checkout.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, rate, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout and cart precondition violations.
///
/// These errors represent business rule violations. The core never recovers
/// from them itself; it surfaces them to the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A line item carries a GST rate outside 0-100%.
    ///
    /// ## When This Occurs
    /// - Corrupt catalog data reached the cart (e.g., a rate stored as
    ///   basis points twice)
    ///
    /// The calculator rejects rather than clamps: clamping would mask the
    /// upstream corruption and issue a wrong-but-plausible invoice.
    #[error("Invalid GST rate: {rate_bps} bps is outside 0-10000")]
    InvalidTaxRate { rate_bps: u32 },

    /// Attempted to assemble an invoice from zero items.
    ///
    /// A zero-value invoice must never be persisted; checkout without items
    /// is a caller error, not a valid sale.
    #[error("Cannot create an invoice from an empty cart")]
    EmptyCart,

    /// A customer was attached to the invoice with required fields missing.
    #[error("Invalid customer: {reason}")]
    InvalidCustomer { reason: String },

    /// Insufficient stock to complete the cart operation.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { product: "Masala Chai", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 Masala Chai in stock"
    /// ```
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Cart has exceeded maximum allowed items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Referenced product is not in the cart.
    #[error("Product not in cart: {0}")]
    ProductNotInCart(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, malformed phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
