//! Pure query functions over a loaded product slice.
//!
//! Everything here is synchronous and side-effect free so the filter engine
//! can be unit-tested without the store, the runtime, or a terminal. The
//! [`CatalogStore`](crate::catalog::CatalogStore) delegates to these after
//! resolving its load.

use crate::state::{FilterCriteria, Product};

/// Whether `category` names a real constraint (not `"all"` and not empty).
fn category_constrains(category: &str) -> bool {
    !category.is_empty() && category != "all"
}

/// What: Select products whose category matches exactly.
///
/// Inputs:
/// - `products`: Catalog slice in load order.
/// - `category`: Exact, case-sensitive category; `"all"` or empty matches
///   everything.
///
/// Output:
/// - Matching products, order preserved.
#[must_use]
pub fn by_category(products: &[Product], category: &str) -> Vec<Product> {
    if category_constrains(category) {
        products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    } else {
        products.to_vec()
    }
}

/// Whether `p` matches the lowercased search `needle`.
fn matches_search(p: &Product, needle: &str) -> bool {
    p.title.to_lowercase().contains(needle)
        || p.short_description.to_lowercase().contains(needle)
        || p.category.to_lowercase().contains(needle)
}

/// What: Case-insensitive substring search.
///
/// Inputs:
/// - `products`: Catalog slice in load order.
/// - `query`: Search text matched against title, short description, and
///   category; blank matches everything.
///
/// Output:
/// - Matching products, order preserved.
#[must_use]
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .cloned()
        .collect()
}

/// Featured subsequence, order preserved.
#[must_use]
pub fn featured(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.featured).cloned().collect()
}

/// Products rated at or above `min`; `0.0` (or less) imposes no constraint.
#[must_use]
pub fn with_min_rating(products: &[Product], min: f64) -> Vec<Product> {
    if min <= 0.0 {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.rating >= min)
        .cloned()
        .collect()
}

/// What: Apply conjunctive filter criteria.
///
/// Inputs:
/// - `products`: Catalog slice in load order.
/// - `criteria`: Category, search, and minimum-rating constraints.
///
/// Output:
/// - The intersection, each predicate narrowing the previous result in the
///   fixed order category → search → rating. An empty result is a valid
///   outcome, not an error.
#[must_use]
pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let pass = by_category(products, &criteria.category);
    let pass = search(&pass, &criteria.search);
    with_min_rating(&pass, criteria.min_rating)
}

/// First product whose id equals `id` exactly, or `None`.
#[must_use]
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// What: Derive the deduplicated, sorted category list.
///
/// Inputs:
/// - `products`: Catalog slice.
///
/// Output:
/// - Unique category names in lexicographic order; empty names skipped.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut names: Vec<String> = products
        .iter()
        .map(|p| p.category.clone())
        .filter(|c| !c.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}
