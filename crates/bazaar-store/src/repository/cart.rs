//! # Cart Repository
//!
//! Persists the cart and wishlist arrays under their local-storage keys.
//!
//! ## Persistence Rule
//! The app layer saves the FULL arrays after every mutation, synchronously.
//! There is no partial update and no dirty tracking - the payloads are
//! tiny.

use tracing::debug;

use bazaar_core::{Cart, Wishlist};

use crate::error::StoreResult;
use crate::local::{keys, LocalStorage};

/// Repository for the shopper's cart and wishlist.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CartRepository::new(storage);
///
/// let mut cart = repo.load_cart();
/// cart.add(&product, 1)?;
/// repo.save_cart(&cart)?;
/// ```
#[derive(Debug, Clone)]
pub struct CartRepository {
    storage: LocalStorage,
}

impl CartRepository {
    /// Creates a new CartRepository over a storage directory.
    pub fn new(storage: LocalStorage) -> Self {
        CartRepository { storage }
    }

    /// Loads the persisted cart; absent or malformed = empty cart.
    pub fn load_cart(&self) -> Cart {
        self.storage.get(keys::CART)
    }

    /// Persists the full cart array.
    pub fn save_cart(&self, cart: &Cart) -> StoreResult<()> {
        debug!(items = cart.item_count(), "persisting cart");
        self.storage.set(keys::CART, cart)
    }

    /// Loads the persisted wishlist; absent or malformed = empty wishlist.
    pub fn load_wishlist(&self) -> Wishlist {
        self.storage.get(keys::WISHLIST)
    }

    /// Persists the full wishlist array.
    pub fn save_wishlist(&self, wishlist: &Wishlist) -> StoreResult<()> {
        debug!(entries = wishlist.len(), "persisting wishlist");
        self.storage.set(keys::WISHLIST, wishlist)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::Product;
    use chrono::Utc;

    fn temp_repo() -> CartRepository {
        let dir = std::env::temp_dir().join(format!("bazaar-cart-{}", uuid::Uuid::new_v4()));
        CartRepository::new(LocalStorage::open(dir).unwrap())
    }

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            vendor_id: "v1".to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            price_cents,
            stock: 10,
            category: "Electronics".to_string(),
            image: String::new(),
            rating: 4.0,
            review_count: 1,
            featured: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_survives_reload() {
        let repo = temp_repo();

        let mut cart = repo.load_cart();
        assert!(cart.is_empty());
        cart.add(&product("1", 19999), 2).unwrap();
        repo.save_cart(&cart).unwrap();

        // Fresh repository over the same directory = a page reload
        let reloaded = CartRepository::new(LocalStorage::open(repo.storage.root()).unwrap());
        let cart = reloaded.load_cart();
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.total_price().cents(), 39998);
    }

    #[test]
    fn test_cleared_cart_persists_empty() {
        let repo = temp_repo();

        let mut cart = repo.load_cart();
        cart.add(&product("1", 999), 1).unwrap();
        repo.save_cart(&cart).unwrap();

        cart.clear();
        repo.save_cart(&cart).unwrap();

        assert!(repo.load_cart().is_empty());
    }

    #[test]
    fn test_wishlist_round_trip() {
        let repo = temp_repo();

        let mut wishlist = repo.load_wishlist();
        wishlist.add(&product("1", 999));
        wishlist.add(&product("1", 999)); // idempotent
        repo.save_wishlist(&wishlist).unwrap();

        let loaded = repo.load_wishlist();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains("1"));
    }
}
