//! # Catalog State
//!
//! Holds the in-memory product catalog, loaded once from the products
//! fixture at startup.
//!
//! ## Mutation Scope
//! Vendor, admin, moderator and inventory dashboards all edit THIS copy:
//! stock changes, featured toggles, deactivations. None of it is written
//! back to the fixture - a restart reloads the seed catalog. That reset
//! is the demo's intended behavior, not a bug.

use std::sync::{Arc, Mutex};

use bazaar_core::Product;

/// The shared product catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Arc<Mutex<Vec<Product>>>,
}

impl CatalogState {
    /// Creates a catalog state over a loaded product list.
    pub fn new(products: Vec<Product>) -> Self {
        CatalogState {
            products: Arc::new(Mutex::new(products)),
        }
    }

    /// Executes a function with read access to the full catalog.
    pub fn with_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Product]) -> R,
    {
        let products = self.products.lock().expect("Catalog mutex poisoned");
        f(&products)
    }

    /// Executes a function with write access to the full catalog.
    pub fn with_products_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Product>) -> R,
    {
        let mut products = self.products.lock().expect("Catalog mutex poisoned");
        f(&mut products)
    }

    /// Looks up one product by id.
    pub fn find(&self, product_id: &str) -> Option<Product> {
        self.with_products(|products| products.iter().find(|p| p.id == product_id).cloned())
    }

    /// Number of products, active or not.
    pub fn len(&self) -> usize {
        self.with_products(|p| p.len())
    }

    /// Whether the catalog is empty (fixture missing at startup).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
