//! End-to-end customer journey: login, browse, cart, wishlist, checkout,
//! and persistence across a simulated restart.

use std::path::PathBuf;

use bazaar_core::catalog::{CatalogFilter, PriceBucket, SortKey};
use bazaar_core::{PaymentMethod, Role, ShippingAddress};
use bazaar_dashboard::auth::DemoCredentials;
use bazaar_dashboard::commands::{cart, catalog, checkout, session};
use bazaar_dashboard::App;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("bazaar-e2e-{}", uuid::Uuid::new_v4()))
}

fn login_customer(app: &App) {
    session::login(
        &DemoCredentials,
        &app.session,
        &app.session_repo,
        "customer@example.com",
        "cust123",
        Role::Customer,
    )
    .unwrap();
}

fn full_address() -> ShippingAddress {
    ShippingAddress {
        first_name: "John".into(),
        last_name: "Customer".into(),
        email: "john@example.com".into(),
        phone: "555-0100".into(),
        street: "123 Main St".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        zip_code: "62701".into(),
        country: "US".into(),
    }
}

#[tokio::test]
async fn browse_filter_and_sort() {
    let app = App::bootstrap(&temp_dir()).await.unwrap();

    // Electronics under/over price buckets
    let filter = CatalogFilter {
        category: Some("Electronics".to_string()),
        ..Default::default()
    };
    let electronics = catalog::browse(&app.catalog, filter).unwrap();
    assert_eq!(electronics.len(), 2);

    let filter = CatalogFilter {
        price: PriceBucket::Under50,
        sort: SortKey::PriceLowHigh,
        ..Default::default()
    };
    let cheap = catalog::browse(&app.catalog, filter).unwrap();
    assert!(cheap.iter().all(|p| p.price_cents < 5000));
    assert!(cheap.windows(2).all(|w| w[0].price_cents <= w[1].price_cents));

    // Search narrows by name or description
    let filter = CatalogFilter {
        search: "watch".to_string(),
        ..Default::default()
    };
    let watches = catalog::browse(&app.catalog, filter).unwrap();
    assert_eq!(watches.len(), 1);
    assert_eq!(watches[0].name, "Smart Fitness Watch");

    // Impossible combination is an empty list, not an error
    let filter = CatalogFilter {
        search: "watch".to_string(),
        category: Some("Food".to_string()),
        ..Default::default()
    };
    assert!(catalog::browse(&app.catalog, filter).unwrap().is_empty());
}

#[tokio::test]
async fn cart_survives_restart() {
    let dir = temp_dir();

    {
        let app = App::bootstrap(&dir).await.unwrap();
        login_customer(&app);
        cart::add_to_cart(&app.catalog, &app.cart, &app.cart_repo, "1", 1).unwrap();
        cart::add_to_cart(&app.catalog, &app.cart, &app.cart_repo, "6", 2).unwrap();
        cart::toggle_wishlist(&app.catalog, &app.cart, &app.cart_repo, "3").unwrap();
    }

    // "Restart": a fresh App over the same directory
    let app = App::bootstrap(&dir).await.unwrap();
    assert_eq!(app.session.role(), Some(Role::Customer));
    assert_eq!(app.cart.with_cart(|c| c.total_item_count()), 3);
    assert_eq!(app.cart.with_cart(|c| c.total_price().cents()), 26997);
    assert!(app.cart.with_wishlist(|w| w.contains("3")));
}

#[tokio::test]
async fn checkout_places_order_and_clears_cart() {
    let app = App::bootstrap(&temp_dir()).await.unwrap();
    login_customer(&app);

    cart::add_to_cart(&app.catalog, &app.cart, &app.cart_repo, "1", 1).unwrap();
    cart::add_to_cart(&app.catalog, &app.cart, &app.cart_repo, "6", 2).unwrap();

    let mut wizard = checkout::begin_checkout(&app.cart).unwrap();
    checkout::submit_shipping(&mut wizard, full_address()).unwrap();
    checkout::submit_payment(&mut wizard, PaymentMethod::Card).unwrap();
    let order = checkout::place_order(wizard, &app.cart, &app.order_repo, &app.cart_repo).unwrap();

    // $269.97 subtotal, 8% tax
    assert_eq!(order.subtotal_cents, 26997);
    assert_eq!(order.total_cents, 29157);
    assert!(order.order_number.starts_with("ORD-"));

    assert!(app.cart.with_cart(|c| c.is_empty()));
    let history = checkout::order_history(&app.order_repo);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].items.len(), 2);
}

#[tokio::test]
async fn logout_keeps_cart_and_history() {
    let dir = temp_dir();
    let app = App::bootstrap(&dir).await.unwrap();
    login_customer(&app);

    cart::add_to_cart(&app.catalog, &app.cart, &app.cart_repo, "4", 1).unwrap();
    session::logout(&app.session, &app.session_repo).unwrap();

    assert!(!app.session.is_authenticated());

    // The session keys are gone; the cart key is not
    let restarted = App::bootstrap(&dir).await.unwrap();
    assert!(restarted.session.role().is_none());
    assert_eq!(restarted.cart.with_cart(|c| c.item_count()), 1);
}

#[tokio::test]
async fn wrong_credentials_name_the_demo_pair() {
    let app = App::bootstrap(&temp_dir()).await.unwrap();

    let err = session::login(
        &DemoCredentials,
        &app.session,
        &app.session_repo,
        "customer@example.com",
        "wrong",
        Role::Customer,
    )
    .unwrap_err();

    assert!(err.message.contains("customer@example.com"));
    assert!(err.message.contains("cust123"));
}
