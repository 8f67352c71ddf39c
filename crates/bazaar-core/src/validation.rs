//! # Validation Module
//!
//! Input validation rules for Bazaar forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard form                                               │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate inline feedback                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command function (Rust)                                      │
//! │  └── THIS MODULE: field validation before any state change             │
//! │                                                                         │
//! │  Failures surface as inline messages - no retry counter, no lockout.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::ShippingAddress;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Wireless Headphones").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product description. Can be empty; capped at 2000 characters.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.len() > 2000 {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: 2000,
        });
    }
    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns the full catalog)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

/// Validates an email address, loosely.
///
/// One `@` with something on both sides is enough for a demo login form;
/// real deliverability checking is out of scope.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates a delivery confirmation code.
///
/// ## Rules
/// - Exactly 4 ASCII digits (the customer reads it to the agent)
pub fn validate_delivery_code(code: &str) -> ValidationResult<()> {
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "delivery code".to_string(),
            reason: "must be exactly 4 digits".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    if qty > MAX_ITEM_QUANTITY as i64 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (zero allowed: free items)
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(19999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validates a stock count edit (inventory dashboard).
///
/// The incoming value is i64 because the form accepts free text; negative
/// stock is rejected inline.
pub fn validate_stock(stock: i64) -> ValidationResult<u32> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: u32::MAX as i64,
        });
    }
    if stock > u32::MAX as i64 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: u32::MAX as i64,
        });
    }
    Ok(stock as u32)
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the checkout shipping address: every field except country is
/// required (country defaults to "US").
pub fn validate_shipping_address(address: &ShippingAddress) -> ValidationResult<()> {
    let required: [(&str, &str); 8] = [
        ("first name", &address.first_name),
        ("last name", &address.last_name),
        ("email", &address.email),
        ("phone", &address.phone),
        ("street", &address.street),
        ("city", &address.city),
        ("state", &address.state),
        ("zip code", &address.zip_code),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }
    }

    validate_email(&address.email)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Wireless Headphones").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(19999).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert_eq!(validate_stock(0).unwrap(), 0);
        assert_eq!(validate_stock(42).unwrap(), 42);
        assert!(validate_stock(-5).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("vendor@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("name@nodot").is_err());
    }

    #[test]
    fn test_validate_delivery_code() {
        assert!(validate_delivery_code("1234").is_ok());
        assert!(validate_delivery_code("123").is_err());
        assert!(validate_delivery_code("12345").is_err());
        assert!(validate_delivery_code("12a4").is_err());
    }

    #[test]
    fn test_validate_shipping_address() {
        let full = ShippingAddress {
            first_name: "John".into(),
            last_name: "Customer".into(),
            email: "john@example.com".into(),
            phone: "+1 555 123 4567".into(),
            street: "123 Main St".into(),
            city: "New York".into(),
            state: "NY".into(),
            zip_code: "10001".into(),
            country: "US".into(),
        };
        assert!(validate_shipping_address(&full).is_ok());

        let mut missing = full.clone();
        missing.city = String::new();
        assert!(validate_shipping_address(&missing).is_err());

        // Country is optional - the form defaults it
        let mut no_country = full;
        no_country.country = String::new();
        assert!(validate_shipping_address(&no_country).is_ok());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  watch  ").unwrap(), "watch");
        assert!(validate_search_query(&"x".repeat(150)).is_err());
    }
}
