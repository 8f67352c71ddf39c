//! # Cart & Wishlist
//!
//! The shopper's in-progress selection. Pure containers - persistence is
//! the store layer's job.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           Command                Cart Change            │
//! │  ──────────────           ───────                ───────────            │
//! │                                                                         │
//! │  Add to Cart ───────────► add_to_cart() ───────► accumulate or append  │
//! │                                                                         │
//! │  Change Quantity ───────► update_cart_item() ──► set / remove at <= 0  │
//! │                                                                         │
//! │  Remove ────────────────► remove_from_cart() ──► retain (no-op absent) │
//! │                                                                         │
//! │  Checkout done ─────────► clear_cart() ────────► items.clear()         │
//! │                                                                         │
//! │  NOTE: Every mutation is followed by a synchronous persist of the      │
//! │        full cart + wishlist arrays in the app layer.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{OrderItem, Product};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// One product-and-quantity line in the cart.
///
/// ## Design Notes
/// - `product_id`: reference back to the catalog
/// - name/price/image are denormalized copies frozen at add time, so the
///   cart renders consistently even if the catalog changes underneath it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (catalog reference)
    pub product_id: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    /// Image reference at time of adding (frozen)
    pub image: String,

    /// Quantity in cart; invariant: >= 1
    pub quantity: u32,

    /// When this line was first added
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            image: product.image.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

impl From<&CartItem> for OrderItem {
    /// Freezes a cart line onto an order at checkout.
    fn from(item: &CartItem) -> Self {
        OrderItem {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
            image: item.image.clone(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per `product_id` (adding the same product accumulates)
/// - Quantity >= 1 (a quantity reaching zero removes the line, never a
///   zero-quantity record)
/// - At most `MAX_CART_ITEMS` lines, `MAX_ITEM_QUANTITY` per line
///
/// Quantity is deliberately NOT capped at available stock; the storefront
/// does not enforce that check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items, in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart or accumulates quantity if already present.
    pub fn add(&mut self, product: &Product, quantity: u32) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity.saturating_add(quantity);
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
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
        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Removes a line by product ID. A no-op when the product is absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Overwrites the quantity of a line.
    ///
    /// ## Behavior
    /// - quantity <= 0: behaves as [`Cart::remove`]
    /// - absent product id: no-op
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove(product_id);
            return Ok(());
        }
        if quantity > MAX_ITEM_QUANTITY as i64 {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity as u32,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity as u32;
        }
        Ok(())
    }

    /// Clears all lines (used post-checkout).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities over all lines.
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Money::zero(), |acc, m| acc + m)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for command responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u32,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_item_count(),
            total_cents: cart.total_price().cents(),
        }
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// One saved product on the wishlist. No quantity - membership only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub product_id: String,
    pub name: String,
    pub price_cents: i64,
    pub image: String,
    pub added_at: DateTime<Utc>,
}

/// Set-like wishlist keyed by product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub entries: Vec<WishlistEntry>,
}

impl Wishlist {
    pub fn new() -> Self {
        Wishlist {
            entries: Vec::new(),
        }
    }

    /// Adds a product. Duplicate adds are no-ops.
    pub fn add(&mut self, product: &Product) {
        if self.contains(&product.id) {
            return;
        }
        self.entries.push(WishlistEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price_cents: product.price_cents,
            image: product.image.clone(),
            added_at: Utc::now(),
        });
    }

    /// Removes a product. A no-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
