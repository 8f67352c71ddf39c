//! # Cart State
//!
//! Holds the in-memory cart and wishlist.
//!
//! ## Thread Safety
//! Both containers are wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify them
//! 2. Only one command should modify at a time
//! 3. Commands can run concurrently
//!
//! ## Persistence
//! The cart commands persist through [`bazaar_store::CartRepository`] after
//! every mutation - this container is the memory half only.

use std::sync::{Arc, Mutex};

use bazaar_core::{Cart, Wishlist};

/// The shopper's cart + wishlist, shared across commands.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    wishlist: Arc<Mutex<Wishlist>>,
}

impl CartState {
    /// Creates an empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cart state pre-populated from persisted values.
    pub fn restored(cart: Cart, wishlist: Wishlist) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
            wishlist: Arc::new(Mutex::new(wishlist)),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Executes a function with read access to the wishlist.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&wishlist)
    }

    /// Executes a function with write access to the wishlist.
    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&mut wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::Product;
    use chrono::Utc;

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            vendor_id: "v-1".to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price_cents: 999,
            stock: 5,
            category: "Home".to_string(),
            image: String::new(),
            rating: 4.0,
            review_count: 2,
            featured: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_clones_share_cart() {
        let state = CartState::new();
        let clone = state.clone();

        state
            .with_cart_mut(|cart| cart.add(&test_product("1"), 2))
            .unwrap();

        assert_eq!(clone.with_cart(|c| c.total_item_count()), 2);
    }

    #[test]
    fn test_cart_and_wishlist_are_independent() {
        let state = CartState::new();
        state.with_wishlist_mut(|w| w.add(&test_product("1")));

        assert!(state.with_cart(|c| c.is_empty()));
        assert_eq!(state.with_wishlist(|w| w.len()), 1);
    }
}
