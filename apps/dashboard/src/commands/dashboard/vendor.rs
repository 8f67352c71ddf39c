//! # Vendor Commands
//!
//! The vendor dashboard: the vendor's product list, featured toggles, and
//! the fulfillment ladder over the vendor's own order copies.
//!
//! ## Fulfillment Ladder
//! pending → processing → shipped. Vendors go no further; delivered is
//! the delivery side's word, and it never flows back here in the demo.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use bazaar_core::validation::{
    validate_description, validate_price_cents, validate_product_name,
};
use bazaar_core::{CoreError, OrderStatus, Product, Role, VendorOrder};

use crate::commands::require_role;
use crate::error::ApiError;
use crate::state::{CatalogState, SessionState, VendorState};

/// Form input for a new product listing.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: u32,
    pub category: String,
    pub image: String,
}

/// Header counts for the vendor dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorStats {
    pub products: usize,
    pub featured: usize,
    pub pending_orders: usize,
    pub shipped_orders: usize,
}

/// Lists the vendor's own products (by vendor id, inactive included).
pub fn list_products(
    session: &SessionState,
    catalog: &CatalogState,
    vendor_id: &str,
) -> Result<Vec<Product>, ApiError> {
    require_role(session, Role::Vendor)?;
    Ok(catalog.with_products(|products| {
        products
            .iter()
            .filter(|p| p.vendor_id == vendor_id)
            .cloned()
            .collect()
    }))
}

/// Adds a new listing under the vendor's id.
///
/// The listing joins the shared in-memory catalog immediately; like every
/// catalog mutation it does not survive a restart.
pub fn add_product(
    session: &SessionState,
    catalog: &CatalogState,
    vendor_id: &str,
    input: NewProduct,
) -> Result<Product, ApiError> {
    require_role(session, Role::Vendor)?;

    validate_product_name(&input.name).map_err(|e| ApiError::validation(e.to_string()))?;
    validate_description(&input.description).map_err(|e| ApiError::validation(e.to_string()))?;
    validate_price_cents(input.price_cents).map_err(|e| ApiError::validation(e.to_string()))?;

    let now = Utc::now();
    let product = Product {
        id: uuid::Uuid::new_v4().to_string(),
        vendor_id: vendor_id.to_string(),
        name: input.name.trim().to_string(),
        description: input.description,
        price_cents: input.price_cents,
        stock: input.stock,
        category: input.category,
        image: input.image,
        rating: 0.0,
        review_count: 0,
        featured: false,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    catalog.with_products_mut(|products| products.push(product.clone()));

    info!(product_id = %product.id, vendor_id, "product listed");
    Ok(product)
}

/// Toggles a product's featured flag. Returns the new flag value.
pub fn toggle_featured(
    session: &SessionState,
    catalog: &CatalogState,
    product_id: &str,
) -> Result<bool, ApiError> {
    require_role(session, Role::Vendor)?;

    let featured = catalog.with_products_mut(|products| {
        let product = products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;
        product.featured = !product.featured;
        product.updated_at = Utc::now();
        Ok::<_, ApiError>(product.featured)
    })?;

    info!(product_id, featured, "featured toggled");
    Ok(featured)
}

/// Lists the vendor's incoming orders, newest first.
pub fn list_orders(
    session: &SessionState,
    state: &VendorState,
) -> Result<Vec<VendorOrder>, ApiError> {
    require_role(session, Role::Vendor)?;

    let mut orders = state.with_orders(|orders| orders.to_vec());
    orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
    Ok(orders)
}

/// Advances an order one step up the fulfillment ladder.
///
/// Shipped (or later) orders have no next step and are rejected.
pub fn advance_order(
    session: &SessionState,
    state: &VendorState,
    order_id: &str,
) -> Result<VendorOrder, ApiError> {
    require_role(session, Role::Vendor)?;

    let order = state.with_orders_mut(|orders| {
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ApiError::not_found("Order", order_id))?;

        let next = order.status.next_fulfillment_step().ok_or_else(|| {
            ApiError::from(CoreError::InvalidStatusTransition {
                entity: "Order",
                id: order.order_number.clone(),
                current: format!("{:?}", order.status).to_lowercase(),
                action: "advance",
            })
        })?;

        order.status = next;
        Ok::<_, ApiError>(order.clone())
    })?;

    info!(order_id, status = ?order.status, "order advanced");
    Ok(order)
}

/// Computes the vendor's header counts.
pub fn vendor_stats(
    session: &SessionState,
    catalog: &CatalogState,
    state: &VendorState,
    vendor_id: &str,
) -> Result<VendorStats, ApiError> {
    require_role(session, Role::Vendor)?;

    let (products, featured) = catalog.with_products(|all| {
        let mine: Vec<&Product> = all.iter().filter(|p| p.vendor_id == vendor_id).collect();
        (mine.len(), mine.iter().filter(|p| p.featured).count())
    });

    let (pending_orders, shipped_orders) = state.with_orders(|orders| {
        (
            orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            orders
                .iter()
                .filter(|o| o.status == OrderStatus::Shipped)
                .count(),
        )
    });

    Ok(VendorStats {
        products,
        featured,
        pending_orders,
        shipped_orders,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{Session, User, UserStatus};
    use bazaar_store::seed::SeedData;

    fn vendor_session() -> SessionState {
        let user = User {
            id: "u-2".to_string(),
            name: "Demo Vendor".to_string(),
            email: "vendor@example.com".to_string(),
            role: Role::Vendor,
            status: UserStatus::Active,
            joined_at: Utc::now(),
        };
        SessionState::restored(Some(Session {
            user,
            role: Role::Vendor,
        }))
    }

    #[test]
    fn test_lists_own_products_only() {
        let session = vendor_session();
        let catalog = CatalogState::new(SeedData::demo().products);

        let products = list_products(&session, &catalog, "v-1").unwrap();
        assert_eq!(products.len(), 8); // whole demo catalog belongs to v-1

        let none = list_products(&session, &catalog, "v-2").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_fulfillment_ladder_stops_at_shipped() {
        let session = vendor_session();
        let state = VendorState::new(SeedData::demo().vendor_orders);

        // vo-1 is pending
        let order = advance_order(&session, &state, "vo-1").unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        let order = advance_order(&session, &state, "vo-1").unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);

        let err = advance_order(&session, &state, "vo-1").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_toggle_featured_round_trip() {
        let session = vendor_session();
        let catalog = CatalogState::new(SeedData::demo().products);

        // Product 2 starts unfeatured
        assert!(toggle_featured(&session, &catalog, "2").unwrap());
        assert!(!toggle_featured(&session, &catalog, "2").unwrap());
    }

    #[test]
    fn test_requires_vendor_role() {
        let state = VendorState::new(SeedData::demo().vendor_orders);
        assert!(list_orders(&SessionState::new(), &state).is_err());
    }

    fn listing() -> NewProduct {
        NewProduct {
            name: "Mechanical Keyboard".to_string(),
            description: "Hot-swappable switches".to_string(),
            price_cents: 12999,
            stock: 15,
            category: "Electronics".to_string(),
            image: "/images/keyboard.jpg".to_string(),
        }
    }

    #[test]
    fn test_add_product_joins_catalog() {
        let session = vendor_session();
        let catalog = CatalogState::new(SeedData::demo().products);

        let product = add_product(&session, &catalog, "v-1", listing()).unwrap();
        assert!(product.is_active);
        assert!(!product.featured);
        assert_eq!(catalog.len(), 9);
        assert_eq!(list_products(&session, &catalog, "v-1").unwrap().len(), 9);
    }

    #[test]
    fn test_add_product_validates_fields() {
        let session = vendor_session();
        let catalog = CatalogState::new(SeedData::demo().products);

        let mut bad = listing();
        bad.name = "   ".to_string();
        assert!(add_product(&session, &catalog, "v-1", bad).is_err());

        let mut bad = listing();
        bad.price_cents = -1;
        assert!(add_product(&session, &catalog, "v-1", bad).is_err());

        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_stats_match_seed() {
        let session = vendor_session();
        let catalog = CatalogState::new(SeedData::demo().products);
        let state = VendorState::new(SeedData::demo().vendor_orders);

        let stats = vendor_stats(&session, &catalog, &state, "v-1").unwrap();
        assert_eq!(stats.products, 8);
        assert_eq!(stats.featured, 2);
        assert_eq!(stats.pending_orders, 1); // vo-1
        assert_eq!(stats.shipped_orders, 1); // vo-3
    }
}
