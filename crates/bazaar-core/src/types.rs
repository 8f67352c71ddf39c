//! # Domain Types
//!
//! Core domain types used throughout Bazaar.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  id             │       │
//! │  │  vendor_id      │   │  order_number   │   │  email          │       │
//! │  │  price_cents    │   │  status         │   │  role           │       │
//! │  │  stock/rating   │   │  total_cents    │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Role-dashboard records: VendorApplication, DeliveryAssignment,        │
//! │  ReviewSubmission, FlaggedProduct, VendorOrder. Each role keeps its    │
//! │  own copies - there is NO shared order ledger across roles.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Orders carry both:
//! - `id`: UUID v4 - immutable, machine identity
//! - `order_number`: timestamp-derived, human-readable (`ORD-<epoch-millis>`)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{Money, TaxRate};
use crate::{CHECKOUT_TAX_RATE_BPS, LOW_STOCK_THRESHOLD};

// =============================================================================
// Roles & Users
// =============================================================================

/// The six dashboard roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Vendor,
    Admin,
    Moderator,
    InventoryManager,
    DeliveryAgent,
}

impl Role {
    /// Human-readable label for dashboard headers.
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Vendor => "Vendor",
            Role::Admin => "Admin",
            Role::Moderator => "Moderator",
            Role::InventoryManager => "Inventory Manager",
            Role::DeliveryAgent => "Delivery Agent",
        }
    }
}

/// Whether a user account may act on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Suspended,
}

/// A platform user, as loaded from the user fixture or fabricated at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique, stable identifier.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub joined_at: DateTime<Utc>,
}

/// The single active identity + role tag.
///
/// Exactly one session exists at a time; it is persisted under the `user`
/// and `role` local-storage keys and destroyed at logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: User,
    pub role: Role,
}

// =============================================================================
// Product
// =============================================================================

/// Stock level bucket used by the inventory and vendor dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// stock >= LOW_STOCK_THRESHOLD
    InStock,
    /// 0 < stock < LOW_STOCK_THRESHOLD
    Low,
    /// stock == 0
    Out,
}

impl StockLevel {
    /// Badge text shown next to the stock count.
    pub const fn label(&self) -> &'static str {
        match self {
            StockLevel::InStock => "In Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::Out => "Out of Stock",
        }
    }
}

/// A product in the catalog.
///
/// Created by seed data; mutated only in dashboard-held memory (stock edits,
/// featured toggles) - never written back to the fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier.
    pub id: String,

    /// Owning vendor.
    pub vendor_id: String,

    /// Display name.
    pub name: String,

    /// Longer description, searched together with the name.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units on hand.
    pub stock: u32,

    /// Category label, e.g. "Electronics".
    pub category: String,

    /// Image reference (path or URL, never dereferenced here).
    pub image: String,

    /// Average rating, 0.0 - 5.0.
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub review_count: u32,

    /// Shown on the featured shelf when set.
    pub featured: bool,

    /// Soft-delete flag.
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Buckets the current stock count.
    pub fn stock_level(&self) -> StockLevel {
        if self.stock == 0 {
            StockLevel::Out
        } else if self.stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

/// The status of a customer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Next step in the vendor's fulfillment ladder, if any.
    ///
    /// pending → processing → shipped; everything later is owned by the
    /// delivery side and not advanced by vendors.
    pub const fn next_fulfillment_step(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            _ => None,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// How the customer chose to pay at checkout.
///
/// A tag only - no payment is ever processed in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    CashOnDelivery,
}

/// Shipping address captured by the checkout wizard.
///
/// Snapshotted onto the order - later edits to a profile would not rewrite
/// placed orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Defaults to "US" in the checkout form.
    pub country: String,
}

/// A line item frozen onto an order at checkout.
///
/// Uses the snapshot pattern: name and price are copied from the cart line
/// so the order renders consistently even if the catalog changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    /// Product name at time of purchase (frozen).
    pub name: String,
    /// Unit price in cents at time of purchase (frozen).
    pub unit_price_cents: i64,
    pub quantity: u32,
    /// Image reference at time of purchase (frozen).
    pub image: String,
}

impl OrderItem {
    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// A placed customer order.
///
/// Append-only in the customer's own store: once created it is never
/// mutated there. Other roles keep their own independent copies with their
/// own status fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable business identifier derived from the creation
    /// timestamp: `ORD-<epoch-millis>`.
    pub order_number: String,

    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a new pending order from snapshotted items.
    ///
    /// Both identifiers are minted here: a fresh UUID v4 `id` and the
    /// timestamp-derived `order_number`. Totals are computed here too:
    /// subtotal is the sum of line totals, tax is the flat checkout rate
    /// (8%) on the subtotal, rounded half-up.
    pub fn place(
        items: Vec<OrderItem>,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
        created_at: DateTime<Utc>,
    ) -> Self {
        let subtotal: Money = items
            .iter()
            .map(OrderItem::line_total)
            .fold(Money::zero(), |acc, m| acc + m);
        let tax = subtotal.calculate_tax(TaxRate::from_bps(CHECKOUT_TAX_RATE_BPS));

        Order {
            id: Uuid::new_v4().to_string(),
            order_number: format!("ORD-{}", created_at.timestamp_millis()),
            items,
            subtotal_cents: subtotal.cents(),
            tax_cents: tax.cents(),
            total_cents: (subtotal + tax).cents(),
            shipping_address,
            payment_method,
            status: OrderStatus::Pending,
            created_at,
        }
    }

    /// Grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Vendor Applications (admin dashboard)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

/// A vendor's application to sell on the platform, reviewed by the admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorApplication {
    pub id: String,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

// =============================================================================
// Deliveries (delivery-agent dashboard)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Assigned,
    InTransit,
    Delivered,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPriority {
    Normal,
    Medium,
    High,
}

/// A line item on a delivery manifest (the agent's own snapshot).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryItem {
    pub product_id: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

/// A delivery assigned to the agent.
///
/// The 4-digit `confirmation_code` is embedded in the record itself: the
/// customer reads it out and the agent must type it back to complete the
/// drop-off. This is demo theater, not security.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAssignment {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<DeliveryItem>,
    pub total_cents: i64,
    pub status: DeliveryStatus,
    pub priority: DeliveryPriority,
    pub address: ShippingAddress,
    /// Exactly 4 ASCII digits.
    pub confirmation_code: String,
    pub distance_miles: f64,
    pub assigned_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Moderation (moderator dashboard)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

/// A customer review awaiting moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub author: String,
    /// 1-5 stars.
    pub rating: u8,
    pub content: String,
    pub submitted_at: DateTime<Utc>,
    pub status: ReviewStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagStatus {
    Flagged,
    Dismissed,
    Removed,
}

/// A product reported by users, queued for the moderator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedProduct {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub reason: String,
    pub reported_by: String,
    pub flagged_at: DateTime<Utc>,
    pub status: FlagStatus,
}

// =============================================================================
// Vendor Orders (vendor dashboard)
// =============================================================================

/// The vendor's own, unsynchronized copy of an incoming order.
///
/// Status changes here are invisible to the customer's order store - a
/// deliberate property of the demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorOrder {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price_cents: i64, quantity: u32) -> OrderItem {
        OrderItem {
            product_id: "p1".to_string(),
            name: "Test".to_string(),
            unit_price_cents: price_cents,
            quantity,
            image: String::new(),
        }
    }

    #[test]
    fn test_order_place_computes_totals() {
        let order = Order::place(
            vec![item(19999, 1), item(3499, 2)],
            ShippingAddress::default(),
            PaymentMethod::Card,
            Utc::now(),
        );

        assert_eq!(order.subtotal_cents, 26997);
        assert_eq!(order.tax_cents, 2160); // 8% of $269.97, rounded
        assert_eq!(order.total_cents, 29157);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.order_number.starts_with("ORD-"));
    }

    #[test]
    fn test_order_place_mints_a_fresh_uuid() {
        let when = Utc::now();
        let a = Order::place(
            vec![item(100, 1)],
            ShippingAddress::default(),
            PaymentMethod::Card,
            when,
        );
        let b = Order::place(
            vec![item(100, 1)],
            ShippingAddress::default(),
            PaymentMethod::Card,
            when,
        );

        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
        // Same instant: business numbers collide, machine ids never do
        assert_eq!(a.order_number, b.order_number);
    }

    #[test]
    fn test_stock_level_buckets() {
        let mut product = Product {
            id: "p".to_string(),
            vendor_id: "v".to_string(),
            name: "n".to_string(),
            description: String::new(),
            price_cents: 100,
            stock: 0,
            category: "c".to_string(),
            image: String::new(),
            rating: 0.0,
            review_count: 0,
            featured: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(product.stock_level(), StockLevel::Out);
        product.stock = 3;
        assert_eq!(product.stock_level(), StockLevel::Low);
        product.stock = 10;
        assert_eq!(product.stock_level(), StockLevel::InStock);
    }

    #[test]
    fn test_fulfillment_ladder() {
        assert_eq!(
            OrderStatus::Pending.next_fulfillment_step(),
            Some(OrderStatus::Processing)
        );
        assert_eq!(
            OrderStatus::Processing.next_fulfillment_step(),
            Some(OrderStatus::Shipped)
        );
        assert_eq!(OrderStatus::Shipped.next_fulfillment_step(), None);
        assert_eq!(OrderStatus::Delivered.next_fulfillment_step(), None);
    }

    #[test]
    fn test_status_serde_tags() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"processing\""
        );
        assert_eq!(
            serde_json::to_string(&Role::InventoryManager).unwrap(),
            "\"inventory_manager\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::InTransit).unwrap(),
            "\"in_transit\""
        );
    }
}
