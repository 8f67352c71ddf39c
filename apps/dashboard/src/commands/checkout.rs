//! # Checkout Commands
//!
//! The three-step checkout wizard and order placement.
//!
//! ## Wizard Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Wizard                                      │
//! │                                                                         │
//! │  ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐          │
//! │  │ Shipping │───►│ Payment  │───►│  Review  │───►│  Placed  │          │
//! │  │ (step 1) │    │ (step 2) │    │ (step 3) │    │          │          │
//! │  └──────────┘    └──────────┘    └──────────┘    └──────────┘          │
//! │       │               │               │                                 │
//! │  submit_shipping  submit_payment  place_order                          │
//! │  (validated       (Card or COD,   (order appended,                     │
//! │   address)         tag only)       cart cleared)                       │
//! │                                                                         │
//! │  Steps may only advance in order; skipping is rejected inline.          │
//! │  Placing the order: subtotal + 8% tax, ORD-<epoch-millis> number.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use bazaar_core::{
    validation::validate_shipping_address, CoreError, Order, OrderItem, PaymentMethod,
    ShippingAddress,
};
use bazaar_store::{CartRepository, OrderRepository};

use crate::error::ApiError;
use crate::state::CartState;

/// Where the shopper is in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Review,
}

impl CheckoutStep {
    const fn name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }
}

/// The in-progress checkout. One per checkout attempt; dropped on cancel.
///
/// The wizard holds NO money math - totals are computed at placement from
/// the cart's frozen lines.
#[derive(Debug, Clone)]
pub struct CheckoutWizard {
    step: CheckoutStep,
    address: Option<ShippingAddress>,
    payment: Option<PaymentMethod>,
}

impl CheckoutWizard {
    fn expect_step(&self, expected: CheckoutStep) -> Result<(), CoreError> {
        if self.step != expected {
            return Err(CoreError::CheckoutStepOutOfOrder {
                expected: expected.name(),
                current: self.step.name(),
            });
        }
        Ok(())
    }

    /// The current step, for rendering the progress bar.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }
}

/// Starts a checkout. Rejected when the cart is empty.
pub fn begin_checkout(cart: &CartState) -> Result<CheckoutWizard, ApiError> {
    if cart.with_cart(|c| c.is_empty()) {
        return Err(CoreError::EmptyCart.into());
    }
    Ok(CheckoutWizard {
        step: CheckoutStep::Shipping,
        address: None,
        payment: None,
    })
}

/// Step 1: captures the shipping address.
pub fn submit_shipping(
    wizard: &mut CheckoutWizard,
    address: ShippingAddress,
) -> Result<(), ApiError> {
    wizard.expect_step(CheckoutStep::Shipping).map_err(ApiError::from)?;

    let mut address = address;
    if address.country.trim().is_empty() {
        address.country = "US".to_string();
    }
    validate_shipping_address(&address).map_err(|e| ApiError::validation(e.to_string()))?;

    wizard.address = Some(address);
    wizard.step = CheckoutStep::Payment;
    Ok(())
}

/// Step 2: captures the payment method (a tag; nothing is charged).
pub fn submit_payment(
    wizard: &mut CheckoutWizard,
    method: PaymentMethod,
) -> Result<(), ApiError> {
    wizard.expect_step(CheckoutStep::Payment).map_err(ApiError::from)?;

    wizard.payment = Some(method);
    wizard.step = CheckoutStep::Review;
    Ok(())
}

/// Step 3: places the order.
///
/// ## Effects (in order)
/// 1. Snapshot the cart lines onto a new pending order
/// 2. Append the order to the persisted history
/// 3. Clear the cart, in memory and on disk
///
/// The wizard is consumed; a new checkout starts from step 1.
pub fn place_order(
    wizard: CheckoutWizard,
    cart: &CartState,
    orders: &OrderRepository,
    cart_repo: &CartRepository,
) -> Result<Order, ApiError> {
    wizard.expect_step(CheckoutStep::Review).map_err(ApiError::from)?;

    // Both captured by the earlier steps; reaching Review guarantees it
    let address = wizard
        .address
        .ok_or_else(|| ApiError::internal("checkout reached review without an address"))?;
    let payment = wizard
        .payment
        .ok_or_else(|| ApiError::internal("checkout reached review without a payment method"))?;

    let order = cart.with_cart_mut(|c| {
        if c.is_empty() {
            return Err(ApiError::from(CoreError::EmptyCart));
        }

        let items: Vec<OrderItem> = c.items.iter().map(OrderItem::from).collect();
        let order = Order::place(items, address, payment, chrono::Utc::now());

        orders.append(order.clone())?;

        c.clear();
        cart_repo.save_cart(c)?;

        Ok(order)
    })?;

    info!(
        order_number = %order.order_number,
        total_cents = order.total_cents,
        "order placed"
    );
    Ok(order)
}

/// The customer's order history, newest first.
pub fn order_history(orders: &OrderRepository) -> Vec<Order> {
    orders.list()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::state::CatalogState;
    use bazaar_core::OrderStatus;
    use bazaar_store::seed::SeedData;
    use bazaar_store::LocalStorage;

    struct Fixture {
        catalog: CatalogState,
        cart: CartState,
        cart_repo: CartRepository,
        orders: OrderRepository,
    }

    fn fixture() -> Fixture {
        let dir = std::env::temp_dir().join(format!("bazaar-checkout-{}", uuid::Uuid::new_v4()));
        let storage = LocalStorage::open(dir).unwrap();
        Fixture {
            catalog: CatalogState::new(SeedData::demo().products),
            cart: CartState::new(),
            cart_repo: CartRepository::new(storage.clone()),
            orders: OrderRepository::new(storage),
        }
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            first_name: "John".into(),
            last_name: "Customer".into(),
            email: "john@example.com".into(),
            phone: "555-0100".into(),
            street: "123 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            country: String::new(), // form default kicks in
        }
    }

    #[test]
    fn test_full_checkout_flow() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.cart_repo, "1", 1).unwrap();
        add_to_cart(&f.catalog, &f.cart, &f.cart_repo, "6", 2).unwrap();

        let mut wizard = begin_checkout(&f.cart).unwrap();
        submit_shipping(&mut wizard, address()).unwrap();
        submit_payment(&mut wizard, PaymentMethod::Card).unwrap();
        let order = place_order(wizard, &f.cart, &f.orders, &f.cart_repo).unwrap();

        // $269.97 + 8% tax
        assert_eq!(order.subtotal_cents, 26997);
        assert_eq!(order.tax_cents, 2160);
        assert_eq!(order.total_cents, 29157);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.order_number.starts_with("ORD-"));
        assert_eq!(order.shipping_address.country, "US");

        // Cart emptied, in memory and on disk
        assert!(f.cart.with_cart(|c| c.is_empty()));
        assert!(f.cart_repo.load_cart().is_empty());

        // History persisted
        let history = order_history(&f.orders);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, order.id);
    }

    #[test]
    fn test_empty_cart_cannot_begin() {
        let f = fixture();
        let err = begin_checkout(&f.cart).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::CartError);
    }

    #[test]
    fn test_steps_cannot_be_skipped() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.cart_repo, "1", 1).unwrap();

        let mut wizard = begin_checkout(&f.cart).unwrap();
        // Payment before shipping
        let err = submit_payment(&mut wizard, PaymentMethod::Card).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::BusinessLogic);

        // Placing before review
        let err =
            place_order(wizard.clone(), &f.cart, &f.orders, &f.cart_repo).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_invalid_address_stays_on_step_one() {
        let f = fixture();
        add_to_cart(&f.catalog, &f.cart, &f.cart_repo, "1", 1).unwrap();

        let mut wizard = begin_checkout(&f.cart).unwrap();
        let mut bad = address();
        bad.city = String::new();

        assert!(submit_shipping(&mut wizard, bad).is_err());
        assert_eq!(wizard.step(), CheckoutStep::Shipping);

        // A valid resubmission advances
        submit_shipping(&mut wizard, address()).unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_orders_accumulate_newest_first() {
        let f = fixture();

        for product_id in ["1", "4"] {
            add_to_cart(&f.catalog, &f.cart, &f.cart_repo, product_id, 1).unwrap();
            let mut wizard = begin_checkout(&f.cart).unwrap();
            submit_shipping(&mut wizard, address()).unwrap();
            submit_payment(&mut wizard, PaymentMethod::CashOnDelivery).unwrap();
            place_order(wizard, &f.cart, &f.orders, &f.cart_repo).unwrap();
        }

        let history = order_history(&f.orders);
        assert_eq!(history.len(), 2);
        assert!(history[0].created_at >= history[1].created_at);
    }
}
