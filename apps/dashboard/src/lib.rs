//! # Bazaar Dashboard Library
//!
//! The orchestration layer for the Bazaar demo: shared state containers,
//! command functions for every dashboard action, and the startup wiring.
//!
//! ## Module Organization
//! ```text
//! bazaar_dashboard/
//! ├── lib.rs          ◄─── You are here (App wiring & bootstrap)
//! ├── auth.rs         ◄─── Demo credential validation
//! ├── error.rs        ◄─── API error type for commands
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Active session container
//! │   ├── cart.rs     ◄─── Cart + wishlist containers
//! │   ├── catalog.rs  ◄─── Shared product catalog
//! │   └── dashboard.rs◄─── Per-role queue containers
//! └── commands/
//!     ├── mod.rs      ◄─── Exports + role gate
//!     ├── session.rs  ◄─── login / logout / restore
//!     ├── catalog.rs  ◄─── Storefront browsing
//!     ├── cart.rs     ◄─── Cart + wishlist manipulation
//!     ├── checkout.rs ◄─── 3-step wizard + order placement
//!     └── dashboard/  ◄─── admin, vendor, moderator, inventory, delivery
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Bootstrap                             │
//! │                                                                         │
//! │  1. Seed fixtures if the fixture directory is empty ──────────────────► │
//! │                                                                         │
//! │  2. Open local storage (one JSON file per key) ───────────────────────► │
//! │                                                                         │
//! │  3. Restore session + cart + wishlist from storage ───────────────────► │
//! │                                                                         │
//! │  4. Load fixtures into the per-dashboard states ──────────────────────► │
//! │     A missing fixture logs a warning and leaves that queue empty -      │
//! │     the dashboard renders a zero state, never an error page.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod commands;
pub mod error;
pub mod state;

use std::path::Path;

use tracing::{info, warn};

use bazaar_store::seed::SeedData;
use bazaar_store::{
    fixtures::files, CartRepository, FixtureStore, LocalStorage, OrderRepository,
    SessionRepository,
};

use error::ApiError;
use state::{AdminState, CartState, CatalogState, DeliveryState, ModeratorState, SessionState, VendorState};

/// Everything a dashboard command can be handed, wired together.
///
/// Clones share the same underlying state, so the demo binary and tests
/// can hand pieces to concurrent tasks freely.
#[derive(Clone)]
pub struct App {
    pub session: SessionState,
    pub cart: CartState,
    pub catalog: CatalogState,
    pub admin: AdminState,
    pub vendor: VendorState,
    pub moderator: ModeratorState,
    pub delivery: DeliveryState,

    pub session_repo: SessionRepository,
    pub cart_repo: CartRepository,
    pub order_repo: OrderRepository,
}

impl App {
    /// Wires the whole app over a data directory.
    ///
    /// Layout: `<data_dir>/storage/` for local-storage keys,
    /// `<data_dir>/fixtures/` for the demo datasets. Fixtures are written
    /// on first run and reused afterwards.
    pub async fn bootstrap(data_dir: &Path) -> Result<Self, ApiError> {
        let fixture_dir = data_dir.join("fixtures");
        if !fixture_dir.join(files::PRODUCTS).exists() {
            info!(dir = %fixture_dir.display(), "first run, writing demo fixtures");
            SeedData::demo().write_to(&fixture_dir)?;
        }

        let storage = LocalStorage::open(data_dir.join("storage"))?;
        let session_repo = SessionRepository::new(storage.clone());
        let cart_repo = CartRepository::new(storage.clone());
        let order_repo = OrderRepository::new(storage);

        // Restore the persisted half of the state
        let session = commands::session::restore(&session_repo);
        let cart = CartState::restored(cart_repo.load_cart(), cart_repo.load_wishlist());

        // Load the fixture-backed half; absent fixtures leave empty queues
        let fixtures = FixtureStore::new(&fixture_dir);
        let catalog = CatalogState::new(load_or_empty(fixtures.products().await, files::PRODUCTS));
        let admin = AdminState::new(
            load_or_empty(fixtures.users().await, files::USERS),
            load_or_empty(
                fixtures.vendor_applications().await,
                files::VENDOR_APPLICATIONS,
            ),
        );
        let vendor = VendorState::new(load_or_empty(
            fixtures.vendor_orders().await,
            files::VENDOR_ORDERS,
        ));
        let moderator = ModeratorState::new(
            load_or_empty(fixtures.reviews().await, files::REVIEWS),
            load_or_empty(fixtures.flagged_products().await, files::FLAGGED_PRODUCTS),
        );
        let delivery =
            DeliveryState::new(load_or_empty(fixtures.deliveries().await, files::DELIVERIES));

        info!(
            products = catalog.len(),
            "bazaar app bootstrapped"
        );

        Ok(App {
            session,
            cart,
            catalog,
            admin,
            vendor,
            moderator,
            delivery,
            session_repo,
            cart_repo,
            order_repo,
        })
    }
}

fn load_or_empty<T>(result: Result<Vec<T>, bazaar_store::StoreError>, file: &str) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(err) => {
            warn!(file, %err, "fixture load failed, dashboard starts empty");
            Vec::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
