//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bazaar-store errors (separate crate)                                  │
//! │  └── StoreError       - Local-storage / fixture failures               │
//! │                                                                         │
//! │  Dashboard API errors (in app)                                         │
//! │  └── ApiError         - What a front-end would see (serialized)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → UI        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, role, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to an inline user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to inline messages by the dashboard.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order cannot be found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Delivery assignment cannot be found.
    #[error("Delivery not found: {0}")]
    DeliveryNotFound(String),

    /// Cart has exceeded maximum allowed line items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The checkout wizard was asked to do something out of order.
    ///
    /// ## When This Occurs
    /// - Submitting payment before the address step
    /// - Placing the order before the review step
    #[error("Checkout step out of order: expected {expected}, currently at {current}")]
    CheckoutStepOutOfOrder {
        expected: &'static str,
        current: &'static str,
    },

    /// A status transition that the entity does not allow.
    ///
    /// ## When This Occurs
    /// - Shipping an order that is still pending
    /// - Completing a delivery that was never started
    #[error("{entity} {id} is {current}, cannot {action}")]
    InvalidStatusTransition {
        entity: &'static str,
        id: String,
        current: String,
        action: &'static str,
    },

    /// The 4-digit confirmation code did not match the assignment.
    #[error("Delivery code does not match for order {order_number}")]
    DeliveryCodeMismatch { order_number: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// They are surfaced as inline form messages - no retry counter, no lockout.
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

    /// Invalid format (e.g., bad email, non-digit delivery code).
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
