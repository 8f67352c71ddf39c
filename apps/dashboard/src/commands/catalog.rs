//! # Catalog Commands
//!
//! Storefront browsing: filtering, sorting, categories, product detail.
//! All derivation is pure (bazaar-core); these commands just marshal the
//! filter in and the list out.

use tracing::debug;

use bazaar_core::catalog::{self, CatalogFilter};
use bazaar_core::validation::validate_search_query;
use bazaar_core::Product;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Returns the filtered, sorted product list for the storefront.
///
/// The search text is validated (trimmed, length-capped) before the pure
/// derivation runs; inactive products are filtered out for shoppers.
pub fn browse(state: &CatalogState, mut filter: CatalogFilter) -> Result<Vec<Product>, ApiError> {
    filter.search = validate_search_query(&filter.search)
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let results = state.with_products(|products| {
        let active: Vec<Product> = products.iter().filter(|p| p.is_active).cloned().collect();
        catalog::apply(&active, &filter)
    });

    debug!(count = results.len(), "catalog browsed");
    Ok(results)
}

/// The distinct category list, in first-seen catalog order.
pub fn categories(state: &CatalogState) -> Vec<String> {
    state.with_products(catalog::categories)
}

/// Products on the featured shelf.
pub fn featured(state: &CatalogState) -> Vec<Product> {
    state.with_products(|products| {
        products
            .iter()
            .filter(|p| p.featured && p.is_active)
            .cloned()
            .collect()
    })
}

/// Product detail lookup.
pub fn get_product(state: &CatalogState, product_id: &str) -> Result<Product, ApiError> {
    state
        .find(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

// =============================================================================
// Unit Tests
// =============================================================================
