//! # Fixture Store
//!
//! Loads the static demo datasets that stand in for a backend API. Each
//! dashboard fetches its fixture ONCE at startup and then mutates its own
//! in-memory copy; nothing is ever written back to these files.
//!
//! Loading is async (tokio::fs) because it is the app's one I/O boundary
//! that models a network fetch. Local-storage writes stay synchronous.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use bazaar_core::{
    DeliveryAssignment, FlaggedProduct, Product, ReviewSubmission, User, VendorApplication,
    VendorOrder,
};

use crate::error::{StoreError, StoreResult};

/// The well-known fixture file names.
pub mod files {
    pub const PRODUCTS: &str = "products.json";
    pub const USERS: &str = "users.json";
    pub const VENDOR_APPLICATIONS: &str = "vendor_applications.json";
    pub const DELIVERIES: &str = "deliveries.json";
    pub const REVIEWS: &str = "reviews.json";
    pub const FLAGGED_PRODUCTS: &str = "flagged_products.json";
    pub const VENDOR_ORDERS: &str = "vendor_orders.json";
}

/// A directory of JSON fixture files, one per dataset.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    /// Creates a fixture store over a directory. The directory is not
    /// touched until the first load.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FixtureStore { root: root.into() }
    }

    /// The directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> StoreResult<Vec<T>> {
        let path = self.root.join(file);
        let bytes =
            tokio::fs::read(&path)
                .await
                .map_err(|source| StoreError::FixtureUnavailable {
                    path: path.display().to_string(),
                    source,
                })?;

        let records: Vec<T> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::FixtureMalformed {
                path: path.display().to_string(),
                source,
            })?;

        debug!(file, count = records.len(), "fixture loaded");
        Ok(records)
    }

    /// The product catalog.
    pub async fn products(&self) -> StoreResult<Vec<Product>> {
        self.load(files::PRODUCTS).await
    }

    /// Platform users, for the admin's user table.
    pub async fn users(&self) -> StoreResult<Vec<User>> {
        self.load(files::USERS).await
    }

    /// Vendor applications, for the admin's review queue.
    pub async fn vendor_applications(&self) -> StoreResult<Vec<VendorApplication>> {
        self.load(files::VENDOR_APPLICATIONS).await
    }

    /// Delivery assignments, for the delivery-agent dashboard.
    pub async fn deliveries(&self) -> StoreResult<Vec<DeliveryAssignment>> {
        self.load(files::DELIVERIES).await
    }

    /// Review submissions, for the moderator's queue.
    pub async fn reviews(&self) -> StoreResult<Vec<ReviewSubmission>> {
        self.load(files::REVIEWS).await
    }

    /// Flagged products, for the moderator's queue.
    pub async fn flagged_products(&self) -> StoreResult<Vec<FlaggedProduct>> {
        self.load(files::FLAGGED_PRODUCTS).await
    }

    /// The vendor's incoming orders (their own unsynchronized copies).
    pub async fn vendor_orders(&self) -> StoreResult<Vec<VendorOrder>> {
        self.load(files::VENDOR_ORDERS).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("bazaar-fixtures-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_loads_seeded_fixtures() {
        let dir = temp_dir();
        SeedData::demo().write_to(&dir).unwrap();

        let store = FixtureStore::new(&dir);
        let products = store.products().await.unwrap();
        assert_eq!(products.len(), 8);
        assert!(products.iter().any(|p| p.name.contains("Headphones")));

        let deliveries = store.deliveries().await.unwrap();
        assert_eq!(deliveries.len(), 3);
        assert!(deliveries
            .iter()
            .all(|d| d.confirmation_code.len() == 4));
    }

    #[tokio::test]
    async fn test_missing_fixture_is_unavailable() {
        let store = FixtureStore::new(temp_dir());
        let err = store.products().await.unwrap_err();
        assert!(matches!(err, StoreError::FixtureUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_malformed_fixture_is_rejected() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(files::PRODUCTS), b"{\"not\": \"an array\"}").unwrap();

        let store = FixtureStore::new(&dir);
        let err = store.products().await.unwrap_err();
        assert!(matches!(err, StoreError::FixtureMalformed { .. }));
    }
}
