//! Back-office role journeys: gating, per-role queues, and the
//! deliberate isolation between dashboards.

use std::path::PathBuf;

use bazaar_core::catalog::CatalogFilter;
use bazaar_core::{OrderStatus, Role, UserStatus};
use bazaar_dashboard::auth::DemoCredentials;
use bazaar_dashboard::commands::dashboard::{admin, delivery, inventory, moderator, vendor};
use bazaar_dashboard::commands::{catalog, session};
use bazaar_dashboard::App;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("bazaar-roles-{}", uuid::Uuid::new_v4()))
}

fn login_as(app: &App, role: Role) {
    let (email, password) = DemoCredentials::pair_for(role);
    session::login(
        &DemoCredentials,
        &app.session,
        &app.session_repo,
        email,
        password,
        role,
    )
    .unwrap();
}

#[tokio::test]
async fn commands_are_role_gated() {
    let app = App::bootstrap(&temp_dir()).await.unwrap();

    // Logged out: everything back-office is rejected
    assert!(admin::list_users(&app.session, &app.admin).is_err());
    assert!(vendor::list_orders(&app.session, &app.vendor).is_err());

    // Customer session cannot reach the admin dashboard
    login_as(&app, Role::Customer);
    let err = admin::list_users(&app.session, &app.admin).unwrap_err();
    assert!(err.message.contains("Admin"));

    // Logging in as admin (replacing the session) opens it up
    login_as(&app, Role::Admin);
    assert_eq!(admin::list_users(&app.session, &app.admin).unwrap().len(), 6);
}

#[tokio::test]
async fn admin_reviews_applications_and_suspends_users() {
    let app = App::bootstrap(&temp_dir()).await.unwrap();
    login_as(&app, Role::Admin);

    let apps = admin::list_applications(&app.session, &app.admin).unwrap();
    assert_eq!(apps.len(), 3);

    admin::decide_application(&app.session, &app.admin, "app-1", true).unwrap();
    admin::decide_application(&app.session, &app.admin, "app-2", false).unwrap();
    assert!(admin::decide_application(&app.session, &app.admin, "app-2", true).is_err());

    let user = admin::set_user_status(&app.session, &app.admin, "u-1", UserStatus::Suspended)
        .unwrap();
    assert_eq!(user.status, UserStatus::Suspended);
}

#[tokio::test]
async fn vendor_ships_its_own_copy_only() {
    let app = App::bootstrap(&temp_dir()).await.unwrap();
    login_as(&app, Role::Vendor);

    let before = vendor::list_orders(&app.session, &app.vendor).unwrap();
    assert_eq!(before.len(), 3);

    vendor::advance_order(&app.session, &app.vendor, "vo-1").unwrap();
    let shipped = vendor::advance_order(&app.session, &app.vendor, "vo-1").unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);

    // The customer's persisted order history is untouched by vendor activity
    assert!(app.order_repo.list().is_empty());
}

#[tokio::test]
async fn moderator_removal_reaches_the_storefront() {
    let app = App::bootstrap(&temp_dir()).await.unwrap();
    login_as(&app, Role::Moderator);

    let storefront_before = {
        login_as(&app, Role::Moderator);
        catalog::browse(&app.catalog, CatalogFilter::default()).unwrap().len()
    };

    moderator::remove_flagged_product(&app.session, &app.moderator, &app.catalog, "flag-1")
        .unwrap();

    let storefront_after = catalog::browse(&app.catalog, CatalogFilter::default())
        .unwrap()
        .len();
    assert_eq!(storefront_after, storefront_before - 1);

    // Dismissed flags leave the catalog alone
    moderator::dismiss_flag(&app.session, &app.moderator, "flag-2").unwrap();
    assert!(app.catalog.find("8").unwrap().is_active);
}

#[tokio::test]
async fn inventory_edits_are_memory_only() {
    let dir = temp_dir();

    {
        let app = App::bootstrap(&dir).await.unwrap();
        login_as(&app, Role::InventoryManager);

        inventory::set_stock(&app.session, &app.catalog, "8", 50).unwrap();
        let summary = inventory::stock_summary(&app.session, &app.catalog).unwrap();
        assert_eq!(summary.out_of_stock, 0);
    }

    // Stock edits never persist: restart reloads the seed catalog
    let app = App::bootstrap(&dir).await.unwrap();
    assert_eq!(app.catalog.find("8").unwrap().stock, 0);
}

#[tokio::test]
async fn delivery_agent_completes_with_code() {
    let app = App::bootstrap(&temp_dir()).await.unwrap();
    login_as(&app, Role::DeliveryAgent);

    let assignments = delivery::list_assignments(&app.session, &app.delivery).unwrap();
    assert_eq!(assignments.len(), 3);

    delivery::start_delivery(&app.session, &app.delivery, "del-1").unwrap();

    // Wrong code: inline error, state unchanged, retry allowed
    assert!(delivery::complete_delivery(&app.session, &app.delivery, "del-1", "9999").is_err());
    let done = delivery::complete_delivery(&app.session, &app.delivery, "del-1", "1234").unwrap();
    assert!(done.delivered_at.is_some());
}
