//! # bazaar-core: Pure Business Logic for Bazaar
//!
//! This crate is the **heart** of the Bazaar demo. It contains all business
//! logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Bazaar Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Role Dashboards (apps/dashboard)               │   │
//! │  │   Customer ─ Vendor ─ Admin ─ Moderator ─ Inventory ─ Delivery  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  filters  │  │   │
//! │  │   │   Order   │  │  TaxRate  │  │ Wishlist  │  │   sorts   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               bazaar-store (Local Storage Layer)                │   │
//! │  │          JSON files per key, fixture loading, seed data         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Order, delivery records, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and wishlist containers with their invariants
//! - [`catalog`] - Pure catalog filtering and sorting
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Money` instead of
// `use bazaar_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals, Wishlist, WishlistEntry};
pub use catalog::{CatalogFilter, PriceBucket, SortKey, StockFilter};
pub use error::{CoreError, ValidationError};
pub use money::{Money, TaxRate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and keeps the persisted JSON payload small.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Deliberately NOT tied to available stock: the storefront never caps
/// cart quantity at stock.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Tax applied at checkout, in basis points (800 = 8%)
///
/// The storefront shows item prices pre-tax and adds a flat 8% at order
/// placement.
pub const CHECKOUT_TAX_RATE_BPS: u32 = 800;

/// Stock count below which a product is reported as "low stock"
/// (inventory and vendor dashboards).
pub const LOW_STOCK_THRESHOLD: u32 = 10;
