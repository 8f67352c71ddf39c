//! # bazaar-store: Local Storage & Fixtures for Bazaar
//!
//! This crate provides persistence for the Bazaar demo. There is no real
//! backend: the "database" is a directory of JSON files mirroring browser
//! local storage, and the "API" is a set of static fixture files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Bazaar Data Flow                                │
//! │                                                                         │
//! │  Dashboard command (add_to_cart)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    bazaar-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ LocalStorage  │    │ Repositories  │    │ FixtureStore │  │   │
//! │  │   │  (local.rs)   │    │  (cart.rs,    │    │ (fixtures.rs)│  │   │
//! │  │   │               │    │  session.rs,  │    │              │  │   │
//! │  │   │ one JSON file │◄───│  order.rs)    │    │ products.json│  │   │
//! │  │   │ per key       │    │               │    │ users.json   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data dir>/storage/{user,role,cart,wishlist,orders}.json              │
//! │  <data dir>/fixtures/{products,users,deliveries,...}.json              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`local`] - The local-storage directory (key → JSON file)
//! - [`repository`] - Typed repositories (cart, session, order)
//! - [`fixtures`] - Async fixture loading
//! - [`seed`] - Demo dataset generation
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bazaar_store::{FixtureStore, LocalStorage, repository::CartRepository};
//!
//! let storage = LocalStorage::open("/tmp/bazaar/storage")?;
//! let carts = CartRepository::new(storage.clone());
//!
//! let mut cart = carts.load_cart();
//! // ... mutate ...
//! carts.save_cart(&cart)?;
//!
//! let fixtures = FixtureStore::new("/tmp/bazaar/fixtures");
//! let products = fixtures.products().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod local;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use fixtures::FixtureStore;
pub use local::{keys, LocalStorage};

// Repository re-exports for convenience
pub use repository::cart::CartRepository;
pub use repository::order::OrderRepository;
pub use repository::session::SessionRepository;
