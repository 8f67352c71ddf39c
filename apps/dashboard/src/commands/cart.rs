//! # Cart Commands
//!
//! Cart and wishlist manipulation for the storefront.
//!
//! ## Persistence Contract
//! Every mutation here follows the same shape:
//!
//! 1. Mutate the in-memory container (pure bazaar-core logic)
//! 2. Persist the FULL array through the repository, synchronously
//! 3. Return the updated view
//!
//! The save happens before the command returns, so a crash immediately
//! after any command loses nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use bazaar_core::{validation::validate_quantity, Cart, CartItem, CartTotals, Wishlist};
use bazaar_store::CartRepository;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(state: &CartState) -> CartResponse {
    state.with_cart(|cart| CartResponse::from(cart))
}

/// Adds a product to the cart (accumulating quantity if already present).
pub fn add_to_cart(
    catalog: &CatalogState,
    state: &CartState,
    repo: &CartRepository,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    validate_quantity(quantity).map_err(|e| ApiError::validation(e.to_string()))?;

    let product = catalog
        .find(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    let response = state.with_cart_mut(|cart| {
        cart.add(&product, quantity as u32)?;
        repo.save_cart(cart)?;
        Ok::<_, ApiError>(CartResponse::from(&*cart))
    })?;

    debug!(product_id, quantity, "added to cart");
    Ok(response)
}

/// Overwrites a line's quantity; zero or negative removes the line.
pub fn update_cart_item(
    state: &CartState,
    repo: &CartRepository,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    let response = state.with_cart_mut(|cart| {
        cart.set_quantity(product_id, quantity)?;
        repo.save_cart(cart)?;
        Ok::<_, ApiError>(CartResponse::from(&*cart))
    })?;

    debug!(product_id, quantity, "cart line updated");
    Ok(response)
}

/// Removes a line. A no-op when the product is not in the cart.
pub fn remove_from_cart(
    state: &CartState,
    repo: &CartRepository,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    let response = state.with_cart_mut(|cart| {
        cart.remove(product_id);
        repo.save_cart(cart)?;
        Ok::<_, ApiError>(CartResponse::from(&*cart))
    })?;

    debug!(product_id, "removed from cart");
    Ok(response)
}

/// Empties the cart.
pub fn clear_cart(state: &CartState, repo: &CartRepository) -> Result<CartResponse, ApiError> {
    state.with_cart_mut(|cart| {
        cart.clear();
        repo.save_cart(cart)?;
        Ok(CartResponse::from(&*cart))
    })
}

/// Gets the current wishlist.
pub fn get_wishlist(state: &CartState) -> Wishlist {
    state.with_wishlist(|w| w.clone())
}

/// Toggles a product's wishlist membership. Returns true when the product
/// is on the wishlist after the call.
pub fn toggle_wishlist(
    catalog: &CatalogState,
    state: &CartState,
    repo: &CartRepository,
    product_id: &str,
) -> Result<bool, ApiError> {
    let product = catalog
        .find(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    let on_list = state.with_wishlist_mut(|wishlist| {
        let on_list = if wishlist.contains(product_id) {
            wishlist.remove(product_id);
            false
        } else {
            wishlist.add(&product);
            true
        };
        repo.save_wishlist(wishlist)?;
        Ok::<_, ApiError>(on_list)
    })?;

    debug!(product_id, on_list, "wishlist toggled");
    Ok(on_list)
}

/// Moves a wishlist entry into the cart (quantity 1) and off the wishlist.
pub fn move_to_cart(
    catalog: &CatalogState,
    state: &CartState,
    repo: &CartRepository,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    let response = add_to_cart(catalog, state, repo, product_id, 1)?;

    state.with_wishlist_mut(|wishlist| {
        wishlist.remove(product_id);
        repo.save_wishlist(wishlist)
    })?;

    Ok(response)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_store::seed::SeedData;
    use bazaar_store::LocalStorage;

    fn fixture() -> (CatalogState, CartState, CartRepository) {
        let dir = std::env::temp_dir().join(format!("bazaar-cartcmd-{}", uuid::Uuid::new_v4()));
        let storage = LocalStorage::open(dir).unwrap();
        (
            CatalogState::new(SeedData::demo().products),
            CartState::new(),
            CartRepository::new(storage),
        )
    }

    #[test]
    fn test_add_accumulates_and_persists() {
        let (catalog, state, repo) = fixture();

        add_to_cart(&catalog, &state, &repo, "1", 1).unwrap();
        let response = add_to_cart(&catalog, &state, &repo, "1", 2).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 3);
        // Persisted copy matches memory
        assert_eq!(repo.load_cart().total_item_count(), 3);
    }

    #[test]
    fn test_add_unknown_product_is_not_found() {
        let (catalog, state, repo) = fixture();
        let err = add_to_cart(&catalog, &state, &repo, "999", 1).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[test]
    fn test_add_rejects_nonpositive_quantity() {
        let (catalog, state, repo) = fixture();
        assert!(add_to_cart(&catalog, &state, &repo, "1", 0).is_err());
        assert!(add_to_cart(&catalog, &state, &repo, "1", -2).is_err());
        assert!(state.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let (catalog, state, repo) = fixture();
        add_to_cart(&catalog, &state, &repo, "1", 2).unwrap();

        let response = update_cart_item(&state, &repo, "1", 0).unwrap();
        assert!(response.items.is_empty());
        assert!(repo.load_cart().is_empty());
    }

    #[test]
    fn test_checkout_scenario_totals() {
        // 199.99 × 1 + 34.99 × 2 = 269.97
        let (catalog, state, repo) = fixture();
        add_to_cart(&catalog, &state, &repo, "1", 1).unwrap();
        let response = add_to_cart(&catalog, &state, &repo, "6", 2).unwrap();

        assert_eq!(response.totals.total_cents, 26997);
        assert_eq!(response.totals.total_quantity, 3);
    }

    #[test]
    fn test_wishlist_toggle_and_move() {
        let (catalog, state, repo) = fixture();

        assert!(toggle_wishlist(&catalog, &state, &repo, "3").unwrap());
        assert!(!toggle_wishlist(&catalog, &state, &repo, "3").unwrap());
        assert!(toggle_wishlist(&catalog, &state, &repo, "3").unwrap());

        let response = move_to_cart(&catalog, &state, &repo, "3").unwrap();
        assert_eq!(response.items[0].product_id, "3");
        assert!(!state.with_wishlist(|w| w.contains("3")));
        // Both sides persisted
        assert!(repo.load_wishlist().is_empty());
        assert_eq!(repo.load_cart().item_count(), 1);
    }
}
