//! # State Module
//!
//! Shared state containers for the dashboard app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own container:
//!
//! 1. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 2. **Reduced Contention**: Independent states don't block each other
//! 3. **Easier Testing**: Each container can be built in isolation
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ SessionState │ │  CartState   │ │ CatalogState │ │ Role queues  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │ Option<      │ │ Cart +       │ │ Vec<Product> │ │ AdminState   │   │
//! │  │  Session>    │ │ Wishlist     │ │ (in-memory;  │ │ VendorState  │   │
//! │  │ (persisted)  │ │ (persisted)  │ │  role edits  │ │ Moderator-   │   │
//! │  │              │ │              │ │  never saved)│ │ DeliveryState│   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY: every container is Arc<Mutex<T>> with closure-style    │
//! │  accessors; clones share the same underlying state.                    │
//! │                                                                         │
//! │  PERSISTENCE SPLIT: session + cart/wishlist/orders write through to    │
//! │  local storage; catalog and role-queue mutations are memory-only and   │
//! │  reset on restart.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod dashboard;
mod session;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use dashboard::{AdminState, DeliveryState, ModeratorState, VendorState};
pub use session::SessionState;
