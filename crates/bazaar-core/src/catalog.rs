//! # Catalog Filtering & Sorting
//!
//! Derives a display list from the full catalog. Pure and deterministic:
//! same products + same filter = same output, no side effects.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Catalog Derivation Pipeline                            │
//! │                                                                         │
//! │  full catalog                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search filter ──── case-insensitive substring on name + description   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  category filter ── exact match ("all" = no filter)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price bucket ───── under $50 / $50-$200 / over $200 / all             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stock filter ───── in stock / low / out / all (inventory view)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sort ───────────── name / price asc / price desc / rating desc        │
//! │                     (stable: ties keep original order)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, StockLevel};

// =============================================================================
// Filter Inputs
// =============================================================================

/// Price bucket filter. Boundaries are inclusive on the middle bucket,
/// matching the storefront's "$50 - $200" option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBucket {
    #[default]
    All,
    /// price < $50
    Under50,
    /// $50 <= price <= $200
    FiftyTo200,
    /// price > $200
    Over200,
}

impl PriceBucket {
    fn matches(&self, price: Money) -> bool {
        let cents = price.cents();
        match self {
            PriceBucket::All => true,
            PriceBucket::Under50 => cents < 5000,
            PriceBucket::FiftyTo200 => (5000..=20000).contains(&cents),
            PriceBucket::Over200 => cents > 20000,
        }
    }
}

/// Stock level filter used by the inventory dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    Low,
    Out,
}

impl StockFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::InStock => product.stock_level() == StockLevel::InStock,
            StockFilter::Low => product.stock_level() == StockLevel::Low,
            StockFilter::Out => product.stock_level() == StockLevel::Out,
        }
    }
}

/// Sort key for the derived list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Name ascending, case-insensitive (the storefront default).
    #[default]
    NameAsc,
    /// Price ascending ("Price: Low to High").
    PriceLowHigh,
    /// Price descending ("Price: High to Low").
    PriceHighLow,
    /// Rating descending.
    RatingDesc,
}

/// The complete filter state of the catalog view.
///
/// `Default` is the cleared-filters state: empty search, all categories,
/// all prices, all stock levels, sorted by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    /// Free-text search; empty = no search filter.
    pub search: String,
    /// Category equality filter; None = all categories.
    pub category: Option<String>,
    pub price: PriceBucket,
    pub stock: StockFilter,
    pub sort: SortKey,
}

impl CatalogFilter {
    /// The cleared-filters state (the "Clear" button).
    pub fn cleared() -> Self {
        CatalogFilter::default()
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Applies the filter to the catalog and returns the derived display list.
///
/// Recomputed whenever the catalog or any filter input changes. Ties under
/// every sort key keep the original array order (`sort_by` is stable).
pub fn apply(products: &[Product], filter: &CatalogFilter) -> Vec<Product> {
    let search = filter.search.trim().to_lowercase();

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| {
            if !search.is_empty()
                && !p.name.to_lowercase().contains(&search)
                && !p.description.to_lowercase().contains(&search)
            {
                return false;
            }
            if let Some(category) = &filter.category {
                if &p.category != category {
                    return false;
                }
            }
            filter.price.matches(p.price()) && filter.stock.matches(p)
        })
        .cloned()
        .collect();

    match filter.sort {
        SortKey::NameAsc => {
            filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceLowHigh => filtered.sort_by_key(|p| p.price_cents),
        SortKey::PriceHighLow => filtered.sort_by_key(|p| std::cmp::Reverse(p.price_cents)),
        SortKey::RatingDesc => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    filtered
}

/// Distinct category list in first-seen order (the category dropdown).
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

// =============================================================================
// Unit Tests
// =============================================================================
