//! # Bazaar Demo Binary
//!
//! A scripted walk through the demo: a customer logs in, browses,
//! fills a cart, and checks out; then the back-office roles each take
//! one action on their own dashboards.
//!
//! ## Data Location
//! - Linux: `~/.local/share/bazaar/`
//! - macOS: `~/Library/Application Support/com.bazaar.demo/`
//! - Windows: `%APPDATA%/bazaar/demo/data/`
//!
//! Run with `RUST_LOG=debug` for the full command trace.

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bazaar_core::catalog::{CatalogFilter, SortKey};
use bazaar_core::{PaymentMethod, Role, ShippingAddress};
use bazaar_dashboard::auth::DemoCredentials;
use bazaar_dashboard::commands::{cart, catalog, checkout, dashboard, session};
use bazaar_dashboard::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let dirs = ProjectDirs::from("com", "bazaar", "demo")
        .ok_or("could not determine a data directory")?;
    let data_dir = dirs.data_dir().to_path_buf();
    info!(data_dir = %data_dir.display(), "starting bazaar demo");

    let app = App::bootstrap(&data_dir).await?;

    // ----- Customer: browse, cart, checkout ---------------------------------

    let (email, password) = DemoCredentials::pair_for(Role::Customer);
    session::login(
        &DemoCredentials,
        &app.session,
        &app.session_repo,
        email,
        password,
        Role::Customer,
    )?;

    let filter = CatalogFilter {
        sort: SortKey::PriceLowHigh,
        ..Default::default()
    };
    let products = catalog::browse(&app.catalog, filter)?;
    println!("Catalog ({} products, price low to high):", products.len());
    for product in &products {
        println!(
            "  {:<34} {:>9}  [{}]",
            product.name,
            product.price().to_string(),
            product.stock_level().label()
        );
    }

    cart::add_to_cart(&app.catalog, &app.cart, &app.cart_repo, "1", 1)?;
    let response = cart::add_to_cart(&app.catalog, &app.cart, &app.cart_repo, "6", 2)?;
    println!(
        "\nCart: {} items, subtotal ${}.{:02}",
        response.totals.total_quantity,
        response.totals.total_cents / 100,
        response.totals.total_cents % 100
    );

    let mut wizard = checkout::begin_checkout(&app.cart)?;
    checkout::submit_shipping(
        &mut wizard,
        ShippingAddress {
            first_name: "John".into(),
            last_name: "Customer".into(),
            email: "john@example.com".into(),
            phone: "555-0100".into(),
            street: "123 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            country: String::new(),
        },
    )?;
    checkout::submit_payment(&mut wizard, PaymentMethod::Card)?;
    let order = checkout::place_order(wizard, &app.cart, &app.order_repo, &app.cart_repo)?;
    println!(
        "Placed {}: subtotal ${}.{:02}, tax ${}.{:02}, total ${}.{:02}",
        order.order_number,
        order.subtotal_cents / 100,
        order.subtotal_cents % 100,
        order.tax_cents / 100,
        order.tax_cents % 100,
        order.total_cents / 100,
        order.total_cents % 100
    );

    session::logout(&app.session, &app.session_repo)?;

    // ----- Back-office vignettes --------------------------------------------

    login_as(&app, Role::Vendor)?;
    let advanced = dashboard::vendor::advance_order(&app.session, &app.vendor, "vo-1")?;
    println!("\nVendor advanced {} to {:?}", advanced.order_number, advanced.status);

    login_as(&app, Role::InventoryManager)?;
    let summary = dashboard::inventory::stock_summary(&app.session, &app.catalog)?;
    println!(
        "Inventory: {} products ({} low, {} out)",
        summary.total, summary.low_stock, summary.out_of_stock
    );

    login_as(&app, Role::DeliveryAgent)?;
    dashboard::delivery::start_delivery(&app.session, &app.delivery, "del-1")?;
    let delivered =
        dashboard::delivery::complete_delivery(&app.session, &app.delivery, "del-1", "1234")?;
    println!("Delivered {} with code 1234", delivered.order_number);

    session::logout(&app.session, &app.session_repo)?;
    info!("demo complete");
    Ok(())
}

fn login_as(app: &App, role: Role) -> Result<(), Box<dyn std::error::Error>> {
    let (email, password) = DemoCredentials::pair_for(role);
    session::login(
        &DemoCredentials,
        &app.session,
        &app.session_repo,
        email,
        password,
        role,
    )?;
    Ok(())
}
