//! # Inventory Commands
//!
//! The inventory dashboard: stock overview and stock edits over the
//! shared catalog copy.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use bazaar_core::catalog::{CatalogFilter, StockFilter};
use bazaar_core::validation::validate_stock;
use bazaar_core::{catalog, Product, Role, StockLevel};

use crate::commands::require_role;
use crate::error::ApiError;
use crate::state::{CatalogState, SessionState};

/// Summary counts for the inventory dashboard header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

/// Computes the header counts over the whole catalog.
pub fn stock_summary(
    session: &SessionState,
    catalog: &CatalogState,
) -> Result<StockSummary, ApiError> {
    require_role(session, Role::InventoryManager)?;

    Ok(catalog.with_products(|products| StockSummary {
        total: products.len(),
        in_stock: count_level(products, StockLevel::InStock),
        low_stock: count_level(products, StockLevel::Low),
        out_of_stock: count_level(products, StockLevel::Out),
    }))
}

fn count_level(products: &[Product], level: StockLevel) -> usize {
    products.iter().filter(|p| p.stock_level() == level).count()
}

/// Lists products at a stock level, name-sorted (the inventory table view).
pub fn products_at_level(
    session: &SessionState,
    state: &CatalogState,
    filter: StockFilter,
) -> Result<Vec<Product>, ApiError> {
    require_role(session, Role::InventoryManager)?;

    let catalog_filter = CatalogFilter {
        stock: filter,
        ..Default::default()
    };
    Ok(state.with_products(|products| catalog::apply(products, &catalog_filter)))
}

/// Overwrites a product's stock count.
///
/// The incoming value is i64 because the form accepts free text; negative
/// values are rejected inline and the catalog is untouched.
pub fn set_stock(
    session: &SessionState,
    catalog: &CatalogState,
    product_id: &str,
    stock: i64,
) -> Result<Product, ApiError> {
    require_role(session, Role::InventoryManager)?;

    let stock = validate_stock(stock).map_err(|e| ApiError::validation(e.to_string()))?;

    let product = catalog.with_products_mut(|products| {
        let product = products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;
        product.stock = stock;
        product.updated_at = Utc::now();
        Ok::<_, ApiError>(product.clone())
    })?;

    info!(product_id, stock, level = ?product.stock_level(), "stock updated");
    Ok(product)
}

// =============================================================================
// Unit Tests
// =============================================================================
