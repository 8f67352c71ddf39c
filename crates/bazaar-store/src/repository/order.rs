//! # Order Repository
//!
//! Persists the customer's placed orders under the `orders` key.
//!
//! ## Rules
//! - The key is append-only in normal operation: checkout pushes one
//!   order, nothing edits or removes past entries.
//! - Listing returns newest-first, matching the order-history view.

use tracing::debug;

use bazaar_core::Order;

use crate::error::StoreResult;
use crate::local::{keys, LocalStorage};

/// Repository for the `orders` key.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    storage: LocalStorage,
}

impl OrderRepository {
    /// Creates a new OrderRepository over a storage directory.
    pub fn new(storage: LocalStorage) -> Self {
        OrderRepository { storage }
    }

    /// Lists placed orders, newest first.
    pub fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.storage.get(keys::ORDERS);
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Appends a newly-placed order.
    pub fn append(&self, order: Order) -> StoreResult<()> {
        debug!(order_number = %order.order_number, total = order.total_cents, "appending order");
        let mut orders: Vec<Order> = self.storage.get(keys::ORDERS);
        orders.push(order);
        self.storage.set(keys::ORDERS, &orders)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{OrderItem, PaymentMethod, ShippingAddress};
    use chrono::{Duration, Utc};

    fn temp_repo() -> OrderRepository {
        let dir = std::env::temp_dir().join(format!("bazaar-orders-{}", uuid::Uuid::new_v4()));
        OrderRepository::new(LocalStorage::open(dir).unwrap())
    }

    fn order(placed_minutes_ago: i64) -> Order {
        let created_at = Utc::now() - Duration::minutes(placed_minutes_ago);
        Order::place(
            vec![OrderItem {
                product_id: "1".to_string(),
                name: "Wireless Bluetooth Headphones".to_string(),
                unit_price_cents: 19999,
                quantity: 1,
                image: String::new(),
            }],
            ShippingAddress::default(),
            PaymentMethod::Card,
            created_at,
        )
    }

    #[test]
    fn test_append_then_list() {
        let repo = temp_repo();
        assert!(repo.list().is_empty());

        let older = order(10);
        let newer = order(0);
        repo.append(older.clone()).unwrap();
        repo.append(newer.clone()).unwrap();

        let orders = repo.list();
        assert_eq!(orders.len(), 2);
        // Newest first
        assert_eq!(orders[0].id, newer.id);
        assert_eq!(orders[1].id, older.id);
    }

    #[test]
    fn test_orders_survive_reload() {
        let repo = temp_repo();
        repo.append(order(0)).unwrap();

        let reloaded = OrderRepository::new(LocalStorage::open(repo.storage.root()).unwrap());
        assert_eq!(reloaded.list().len(), 1);
    }
}
