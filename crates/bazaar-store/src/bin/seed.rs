//! # Demo Fixture Generator
//!
//! Writes the Bazaar demo fixtures into a directory.
//!
//! ## Usage
//! ```bash
//! # Write fixtures to ./bazaar_fixtures (default)
//! cargo run -p bazaar-store --bin seed
//!
//! # Specify target directory
//! cargo run -p bazaar-store --bin seed -- --dir ./data/fixtures
//! ```

use std::env;

use bazaar_store::fixtures::files;
use bazaar_store::seed::SeedData;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut dir = String::from("./bazaar_fixtures");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bazaar Demo Fixture Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --dir <PATH>   Target directory (default: ./bazaar_fixtures)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Bazaar Demo Fixture Generator");
    println!("================================");
    println!("Directory: {}", dir);
    println!();

    let seed = SeedData::demo();
    seed.write_to(&dir)?;

    println!("✓ {} ({} products)", files::PRODUCTS, seed.products.len());
    println!("✓ {} ({} users)", files::USERS, seed.users.len());
    println!(
        "✓ {} ({} applications)",
        files::VENDOR_APPLICATIONS,
        seed.vendor_applications.len()
    );
    println!("✓ {} ({} deliveries)", files::DELIVERIES, seed.deliveries.len());
    println!("✓ {} ({} reviews)", files::REVIEWS, seed.reviews.len());
    println!(
        "✓ {} ({} flags)",
        files::FLAGGED_PRODUCTS,
        seed.flagged_products.len()
    );
    println!(
        "✓ {} ({} orders)",
        files::VENDOR_ORDERS,
        seed.vendor_orders.len()
    );
    println!();
    println!("Done.");

    Ok(())
}
