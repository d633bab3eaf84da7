//! # Cart
//!
//! The pre-checkout cart and its frozen line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Operations                                  │
//! │                                                                         │
//! │  UI Action                Operation                State Change         │
//! │  ─────────────            ─────────────            ─────────────        │
//! │  Click Product ─────────► add_item() ────────────► coalesce or push    │
//! │  Change Quantity ───────► update_quantity() ─────► items[i].qty = n    │
//! │  Click Remove ──────────► remove_item() ─────────► items.remove(i)     │
//! │  Click Clear ───────────► clear() ───────────────► items.clear()       │
//! │  Checkout ──────────────► items snapshot ────────► TaxCalculator /     │
//! │                                                    InvoiceAssembler    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart belongs to the calling layer; the GST engine and the invoice
//! assembler only ever read a snapshot of its items. Note there is no tax
//! method here: tax lives in [`crate::gst`] alone, so a cart preview can
//! never round differently than the invoice it becomes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Price Freezing
/// All product fields are captured when the line is created. If the catalog
/// entry changes afterwards (price revision, rate change), this line - and
/// any invoice assembled from it - retains the values the customer saw.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product ID (UUID), for catalog lookups and coalescing.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// HSN code at time of adding (frozen).
    pub hsn_code: Option<String>,

    /// Price in paise at time of adding (frozen).
    pub unit_price_paise: i64,

    /// GST rate in basis points at time of adding (frozen).
    pub gst_rate_bps: u32,

    /// Quantity in cart. Always ≥ 1.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a new cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            hsn_code: product.hsn_code.clone(),
            unit_price_paise: product.price_paise,
            gst_rate_bps: product.gst_rate_bps,
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity). Exact.
    #[inline]
    pub fn line_total_paise(&self) -> i64 {
        self.unit_price_paise * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_paise(self.line_total_paise())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product again
///   coalesces into the existing row)
/// - Quantity is always ≥ 1 (updating to 0 removes the row)
/// - At most [`MAX_CART_ITEMS`] rows, [`MAX_ITEM_QUANTITY`] per row
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in the order they were first added.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// Stock is checked against the combined quantity, so clicking a
    /// product repeatedly cannot oversell it.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            if !product.can_sell(new_qty) {
                return Err(CoreError::InsufficientStock {
                    product: product.name.clone(),
                    available: product.stock,
                    requested: new_qty,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                product: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Updates the quantity of an item in the cart.
    ///
    /// Setting quantity to 0 removes the row. Stock is re-verified by the
    /// caller at checkout, since the cart does not hold catalog state.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        validate_quantity(quantity)?;

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::ProductNotInCart(product_id.to_string())),
        }
    }

    /// Removes an item from the cart by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ProductNotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (before tax), in paise. Exact.
    pub fn subtotal_paise(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_paise()).sum()
    }

    /// Returns the subtotal as Money.
    pub fn subtotal(&self) -> Money {
        Money::from_paise(self.subtotal_paise())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
