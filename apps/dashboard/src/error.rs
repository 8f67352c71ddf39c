//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bazaar                                 │
//! │                                                                         │
//! │  Dashboard                   Command Layer                              │
//! │  ─────────                   ─────────────                              │
//! │                                                                         │
//! │  add_to_cart("8", 1)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ───── StoreError::WriteFailed ───────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Domain Error? ──── CoreError::ProductNotFound ── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Every failure renders as an INLINE message next to the control that   │
//! │  triggered it. No retry counters, no lockouts, no error pages.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use bazaar_core::CoreError;
use bazaar_store::StoreError;

/// API error returned from dashboard commands.
///
/// ## Serialization
/// This is what a front-end receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for inline display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// No session, or the session's role may not perform this action
    Unauthorized,

    /// Local-storage read/write failed
    StorageError,

    /// Business rule violation (bad status transition, out-of-order step)
    BusinessLogic,

    /// Cart operation failed
    CartError,

    /// Delivery confirmation code mismatch
    CodeMismatch,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::DeliveryNotFound(id) => ApiError::not_found("Delivery", &id),
            CoreError::CartTooLarge { max } => ApiError::new(
                ErrorCode::CartError,
                format!("Cart cannot have more than {} items", max),
            ),
            CoreError::QuantityTooLarge { requested, max } => ApiError::new(
                ErrorCode::ValidationError,
                format!("Quantity {} exceeds maximum allowed ({})", requested, max),
            ),
            CoreError::EmptyCart => {
                ApiError::new(ErrorCode::CartError, "Cart is empty")
            }
            CoreError::CheckoutStepOutOfOrder { expected, current } => ApiError::new(
                ErrorCode::BusinessLogic,
                format!("Complete the {} step first (currently at {})", expected, current),
            ),
            CoreError::InvalidStatusTransition {
                entity,
                id,
                current,
                action,
            } => ApiError::new(
                ErrorCode::BusinessLogic,
                format!("{} {} is {}, cannot {}", entity, id, current, action),
            ),
            CoreError::DeliveryCodeMismatch { order_number } => ApiError::new(
                ErrorCode::CodeMismatch,
                format!("Confirmation code does not match for order {}", order_number),
            ),
            CoreError::Validation(err) => ApiError::validation(err.to_string()),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::FixtureUnavailable { ref path, .. } => {
                // Log the path; the UI shows a generic zero state
                tracing::warn!(path = %path, "fixture unavailable");
                ApiError::new(ErrorCode::StorageError, "Demo data unavailable")
            }
            StoreError::FixtureMalformed { ref path, .. } => {
                tracing::error!(path = %path, "fixture malformed");
                ApiError::new(ErrorCode::StorageError, "Demo data corrupted")
            }
            other => {
                tracing::error!(%other, "local-storage operation failed");
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let api: ApiError = CoreError::ProductNotFound("42".to_string()).into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert!(api.message.contains("42"));

        let api: ApiError = CoreError::DeliveryCodeMismatch {
            order_number: "ORD-1001".to_string(),
        }
        .into();
        assert_eq!(api.code, ErrorCode::CodeMismatch);
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let api = ApiError::not_found("Product", "42");
        let json = serde_json::to_string(&api).unwrap();
        assert!(json.contains("\"NOT_FOUND\""));
    }
}
