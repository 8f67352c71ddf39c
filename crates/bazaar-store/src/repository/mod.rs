//! # Repositories
//!
//! Typed access to the local-storage keys, one repository per entity
//! family:
//!
//! - [`cart::CartRepository`] - `cart` + `wishlist` keys
//! - [`session::SessionRepository`] - `user` + `role` keys
//! - [`order::OrderRepository`] - `orders` key (append-only)
//!
//! Repositories are thin: they pick the key, pick the type, and delegate
//! to [`crate::LocalStorage`]. All business rules live in bazaar-core.

pub mod cart;
pub mod order;
pub mod session;
