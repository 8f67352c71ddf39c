//! # Demo Seed Data
//!
//! The full demo dataset: the 8-product catalog, one user per role, and
//! the per-dashboard queues (applications, deliveries, reviews, flags,
//! vendor orders).
//!
//! The data is deliberately small and deterministic except for timestamps,
//! which are anchored to "now" so relative displays ("2 days ago") stay
//! plausible whenever the demo is reseeded.

use std::fs;
use std::path::Path;

use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::info;

use bazaar_core::{
    ApplicationStatus, DeliveryAssignment, DeliveryItem, DeliveryPriority, DeliveryStatus,
    FlagStatus, FlaggedProduct, OrderStatus, Product, ReviewStatus, ReviewSubmission, Role,
    ShippingAddress, User, UserStatus, VendorApplication, VendorOrder,
};

use crate::error::{StoreError, StoreResult};
use crate::fixtures::files;

/// Every fixture dataset, ready to be written out.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub vendor_applications: Vec<VendorApplication>,
    pub deliveries: Vec<DeliveryAssignment>,
    pub reviews: Vec<ReviewSubmission>,
    pub flagged_products: Vec<FlaggedProduct>,
    pub vendor_orders: Vec<VendorOrder>,
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    stock: u32,
    category: &str,
    rating: f64,
    review_count: u32,
    featured: bool,
) -> Product {
    let now = Utc::now();
    Product {
        id: id.to_string(),
        vendor_id: "v-1".to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        stock,
        category: category.to_string(),
        image: format!("/images/products/{id}.jpg"),
        rating,
        review_count,
        featured,
        is_active: true,
        created_at: now - Duration::days(90),
        updated_at: now - Duration::days(7),
    }
}

fn user(id: &str, name: &str, email: &str, role: Role, joined_days_ago: i64) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status: UserStatus::Active,
        joined_at: Utc::now() - Duration::days(joined_days_ago),
    }
}

fn address(first: &str, last: &str, street: &str, city: &str, state: &str, zip: &str) -> ShippingAddress {
    ShippingAddress {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: "555-0142".to_string(),
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip.to_string(),
        country: "US".to_string(),
    }
}

impl SeedData {
    /// Builds the complete demo dataset.
    pub fn demo() -> Self {
        let now = Utc::now();

        let products = vec![
            product(
                "1",
                "Wireless Bluetooth Headphones",
                "Premium noise-cancelling over-ear headphones with 30-hour battery life.",
                19999,
                25,
                "Electronics",
                4.5,
                128,
                true,
            ),
            product(
                "2",
                "Organic Cotton T-Shirt",
                "Soft, breathable tee made from 100% organic cotton.",
                2999,
                50,
                "Clothing",
                4.2,
                64,
                false,
            ),
            product(
                "3",
                "Smart Fitness Watch",
                "Tracks heart rate, sleep, and workouts with a 7-day battery.",
                29999,
                15,
                "Electronics",
                4.7,
                256,
                true,
            ),
            product(
                "4",
                "Artisan Coffee Beans",
                "Single-origin, small-batch roasted whole beans. 12oz bag.",
                2499,
                40,
                "Food",
                4.8,
                89,
                false,
            ),
            product(
                "5",
                "Leather Messenger Bag",
                "Full-grain leather bag with a padded 15-inch laptop sleeve.",
                8999,
                12,
                "Accessories",
                4.3,
                42,
                false,
            ),
            product(
                "6",
                "Stainless Steel Water Bottle",
                "Double-walled, vacuum-insulated 24oz bottle. Keeps drinks cold 24 hours.",
                3499,
                60,
                "Home",
                4.6,
                157,
                false,
            ),
            product(
                "7",
                "Yoga Mat",
                "Non-slip, 6mm-thick mat with alignment lines and carrying strap.",
                4999,
                8,
                "Sports",
                4.4,
                73,
                false,
            ),
            product(
                "8",
                "Desk Lamp",
                "Adjustable LED lamp with three color temperatures and USB charging port.",
                5999,
                0,
                "Home",
                4.1,
                31,
                false,
            ),
        ];

        let users = vec![
            user("u-1", "Demo Customer", "customer@example.com", Role::Customer, 320),
            user("u-2", "Demo Vendor", "vendor@example.com", Role::Vendor, 280),
            user("u-3", "Demo Admin", "admin@example.com", Role::Admin, 400),
            user("u-4", "Demo Moderator", "moderator@example.com", Role::Moderator, 190),
            user(
                "u-5",
                "Demo Inventory Manager",
                "inventory@example.com",
                Role::InventoryManager,
                150,
            ),
            user(
                "u-6",
                "Demo Delivery Agent",
                "delivery@example.com",
                Role::DeliveryAgent,
                95,
            ),
        ];

        let vendor_applications = vec![
            VendorApplication {
                id: "app-1".to_string(),
                business_name: "Sunrise Ceramics".to_string(),
                contact_name: "Maya Chen".to_string(),
                email: "maya@sunriseceramics.example.com".to_string(),
                submitted_at: now - Duration::days(3),
                status: ApplicationStatus::Pending,
            },
            VendorApplication {
                id: "app-2".to_string(),
                business_name: "Northwind Outdoor Gear".to_string(),
                contact_name: "Sam Okafor".to_string(),
                email: "sam@northwindgear.example.com".to_string(),
                submitted_at: now - Duration::days(1),
                status: ApplicationStatus::Pending,
            },
            VendorApplication {
                id: "app-3".to_string(),
                business_name: "Old Town Books".to_string(),
                contact_name: "Priya Nair".to_string(),
                email: "priya@oldtownbooks.example.com".to_string(),
                submitted_at: now - Duration::days(12),
                status: ApplicationStatus::Approved,
            },
        ];

        let deliveries = vec![
            DeliveryAssignment {
                id: "del-1".to_string(),
                order_number: "ORD-1001".to_string(),
                customer_name: "John Smith".to_string(),
                customer_phone: "555-0101".to_string(),
                items: vec![
                    DeliveryItem {
                        product_id: "1".to_string(),
                        name: "Wireless Bluetooth Headphones".to_string(),
                        price_cents: 19999,
                        quantity: 1,
                    },
                    DeliveryItem {
                        product_id: "6".to_string(),
                        name: "Stainless Steel Water Bottle".to_string(),
                        price_cents: 3499,
                        quantity: 2,
                    },
                ],
                total_cents: 26997,
                status: DeliveryStatus::Assigned,
                priority: DeliveryPriority::Normal,
                address: address("John", "Smith", "123 Main St", "Springfield", "IL", "62701"),
                confirmation_code: "1234".to_string(),
                distance_miles: 2.3,
                assigned_at: now - Duration::hours(2),
                estimated_delivery: now + Duration::hours(3),
                delivered_at: None,
            },
            DeliveryAssignment {
                id: "del-2".to_string(),
                order_number: "ORD-1002".to_string(),
                customer_name: "Sarah Johnson".to_string(),
                customer_phone: "555-0102".to_string(),
                items: vec![DeliveryItem {
                    product_id: "3".to_string(),
                    name: "Smart Fitness Watch".to_string(),
                    price_cents: 29999,
                    quantity: 1,
                }],
                total_cents: 29999,
                status: DeliveryStatus::InTransit,
                priority: DeliveryPriority::High,
                address: address("Sarah", "Johnson", "456 Oak Ave", "Springfield", "IL", "62702"),
                confirmation_code: "5678".to_string(),
                distance_miles: 5.1,
                assigned_at: now - Duration::hours(4),
                estimated_delivery: now + Duration::hours(1),
                delivered_at: None,
            },
            DeliveryAssignment {
                id: "del-3".to_string(),
                order_number: "ORD-1003".to_string(),
                customer_name: "Mike Davis".to_string(),
                customer_phone: "555-0103".to_string(),
                items: vec![DeliveryItem {
                    product_id: "4".to_string(),
                    name: "Artisan Coffee Beans".to_string(),
                    price_cents: 2499,
                    quantity: 3,
                }],
                total_cents: 7497,
                status: DeliveryStatus::Delivered,
                priority: DeliveryPriority::Normal,
                address: address("Mike", "Davis", "789 Pine Rd", "Springfield", "IL", "62703"),
                confirmation_code: "9012".to_string(),
                distance_miles: 1.2,
                assigned_at: now - Duration::days(1),
                estimated_delivery: now - Duration::hours(20),
                delivered_at: Some(now - Duration::hours(21)),
            },
        ];

        let reviews = vec![
            ReviewSubmission {
                id: "rev-1".to_string(),
                product_id: "1".to_string(),
                product_name: "Wireless Bluetooth Headphones".to_string(),
                author: "audiofan42".to_string(),
                rating: 5,
                content: "Best headphones I've owned. Battery easily lasts a week of commutes."
                    .to_string(),
                submitted_at: now - Duration::hours(6),
                status: ReviewStatus::Pending,
            },
            ReviewSubmission {
                id: "rev-2".to_string(),
                product_id: "7".to_string(),
                product_name: "Yoga Mat".to_string(),
                author: "flexibleflyer".to_string(),
                rating: 2,
                content: "Started peeling after two weeks. CHECK OUT cheapmats dot example for better deals!!"
                    .to_string(),
                submitted_at: now - Duration::hours(3),
                status: ReviewStatus::Pending,
            },
            ReviewSubmission {
                id: "rev-3".to_string(),
                product_id: "4".to_string(),
                product_name: "Artisan Coffee Beans".to_string(),
                author: "morningperson".to_string(),
                rating: 4,
                content: "Great flavor, a touch pricey for 12oz.".to_string(),
                submitted_at: now - Duration::days(2),
                status: ReviewStatus::Approved,
            },
        ];

        let flagged_products = vec![
            FlaggedProduct {
                id: "flag-1".to_string(),
                product_id: "5".to_string(),
                product_name: "Leather Messenger Bag".to_string(),
                reason: "Listing claims full-grain leather; buyer reports bonded leather".to_string(),
                reported_by: "verifiedbuyer7".to_string(),
                flagged_at: now - Duration::hours(8),
                status: FlagStatus::Flagged,
            },
            FlaggedProduct {
                id: "flag-2".to_string(),
                product_id: "8".to_string(),
                product_name: "Desk Lamp".to_string(),
                reason: "Stock photo appears to be from another brand's listing".to_string(),
                reported_by: "lampcollector".to_string(),
                flagged_at: now - Duration::days(1),
                status: FlagStatus::Flagged,
            },
        ];

        let vendor_orders = vec![
            VendorOrder {
                id: "vo-1".to_string(),
                order_number: "ORD-2001".to_string(),
                customer_name: "John Smith".to_string(),
                total_cents: 26997,
                status: OrderStatus::Pending,
                placed_at: now - Duration::hours(1),
            },
            VendorOrder {
                id: "vo-2".to_string(),
                order_number: "ORD-2002".to_string(),
                customer_name: "Sarah Johnson".to_string(),
                total_cents: 29999,
                status: OrderStatus::Processing,
                placed_at: now - Duration::hours(8),
            },
            VendorOrder {
                id: "vo-3".to_string(),
                order_number: "ORD-2003".to_string(),
                customer_name: "Mike Davis".to_string(),
                total_cents: 7497,
                status: OrderStatus::Shipped,
                placed_at: now - Duration::days(2),
            },
        ];

        SeedData {
            products,
            users,
            vendor_applications,
            deliveries,
            reviews,
            flagged_products,
            vendor_orders,
        }
    }

    /// Writes every dataset into `dir` as pretty-printed JSON, one file
    /// per fixture, creating the directory if needed.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> StoreResult<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| StoreError::RootUnavailable {
            path: dir.display().to_string(),
            source,
        })?;

        write_fixture(dir, files::PRODUCTS, &self.products)?;
        write_fixture(dir, files::USERS, &self.users)?;
        write_fixture(dir, files::VENDOR_APPLICATIONS, &self.vendor_applications)?;
        write_fixture(dir, files::DELIVERIES, &self.deliveries)?;
        write_fixture(dir, files::REVIEWS, &self.reviews)?;
        write_fixture(dir, files::FLAGGED_PRODUCTS, &self.flagged_products)?;
        write_fixture(dir, files::VENDOR_ORDERS, &self.vendor_orders)?;

        info!(dir = %dir.display(), "demo fixtures written");
        Ok(())
    }
}

fn write_fixture<T: Serialize>(dir: &Path, file: &str, records: &[T]) -> StoreResult<()> {
    let json = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Serialize {
        key: file.to_string(),
        source,
    })?;
    fs::write(dir.join(file), json).map_err(|source| StoreError::WriteFailed {
        key: file.to_string(),
        source,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::StockLevel;

    #[test]
    fn test_demo_catalog_shape() {
        let seed = SeedData::demo();
        assert_eq!(seed.products.len(), 8);

        // One low-stock and one out-of-stock product for the inventory view
        assert!(seed
            .products
            .iter()
            .any(|p| p.stock_level() == StockLevel::Low));
        assert!(seed
            .products
            .iter()
            .any(|p| p.stock_level() == StockLevel::Out));

        // Featured shelf has something on it
        assert!(seed.products.iter().any(|p| p.featured));
    }

    #[test]
    fn test_demo_has_one_user_per_role() {
        let seed = SeedData::demo();
        assert_eq!(seed.users.len(), 6);

        for role in [
            Role::Customer,
            Role::Vendor,
            Role::Admin,
            Role::Moderator,
            Role::InventoryManager,
            Role::DeliveryAgent,
        ] {
            assert!(seed.users.iter().any(|u| u.role == role), "{role:?}");
        }
    }

    #[test]
    fn test_confirmation_codes_are_four_digits() {
        let seed = SeedData::demo();
        for delivery in &seed.deliveries {
            assert_eq!(delivery.confirmation_code.len(), 4);
            assert!(delivery
                .confirmation_code
                .chars()
                .all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_write_to_creates_all_fixture_files() {
        let dir = std::env::temp_dir().join(format!("bazaar-seed-{}", uuid::Uuid::new_v4()));
        SeedData::demo().write_to(&dir).unwrap();

        for file in [
            files::PRODUCTS,
            files::USERS,
            files::VENDOR_APPLICATIONS,
            files::DELIVERIES,
            files::REVIEWS,
            files::FLAGGED_PRODUCTS,
            files::VENDOR_ORDERS,
        ] {
            assert!(dir.join(file).exists(), "{file}");
        }
    }
}
