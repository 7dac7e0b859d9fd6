//! Aggregate statistics over a loaded catalog.

use crate::state::{CatalogStats, Product};
use crate::util::round1;

/// What: Compute aggregate counts for a product slice.
///
/// Inputs:
/// - `products`: Catalog slice (possibly empty).
///
/// Output:
/// - Totals, featured count, mean rating rounded to one decimal, distinct
///   category count, discounted count, and the discounted share as a rounded
///   percentage.
///
/// Details:
/// - An empty catalog yields zeros throughout; the percentage and mean guard
///   against division by zero.
#[must_use]
pub fn statistics(products: &[Product]) -> CatalogStats {
    let total = products.len();
    if total == 0 {
        return CatalogStats::default();
    }
    let featured = products.iter().filter(|p| p.featured).count();
    let rating_sum: f64 = products.iter().map(|p| p.rating).sum();
    let discounted = products.iter().filter(|p| p.has_discount()).count();

    #[allow(clippy::cast_precision_loss)]
    let average_rating = round1(rating_sum / total as f64);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let discount_percentage = ((discounted as f64 / total as f64) * 100.0).round() as u32;

    CatalogStats {
        total_products: total,
        featured_products: featured,
        average_rating,
        total_categories: super::query::categories(products).len(),
        products_with_discount: discounted,
        discount_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str, rating: f64, featured: bool, discount: &str) -> Product {
        Product {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: category.to_string(),
            rating,
            featured,
            discount: discount.to_string(),
            ..Product::default()
        }
    }

    #[test]
    /// What: Reference statistics example
    ///
    /// - Input: Four products, ratings [5,4,3,5], two featured, three
    ///   categories, one discounted
    /// - Output: totals 4/2, average 4.3, 3 categories, 1 discounted, 25%
    fn stats_reference_example() {
        let products = vec![
            item("p1", "a", 5.0, true, "10%"),
            item("p2", "b", 4.0, true, ""),
            item("p3", "c", 3.0, false, "0%"),
            item("p4", "a", 5.0, false, ""),
        ];
        let s = statistics(&products);
        assert_eq!(s.total_products, 4);
        assert_eq!(s.featured_products, 2);
        assert!((s.average_rating - 4.3).abs() < f64::EPSILON);
        assert_eq!(s.total_categories, 3);
        assert_eq!(s.products_with_discount, 1);
        assert_eq!(s.discount_percentage, 25);
    }

    #[test]
    /// What: Empty catalog yields zeroed statistics, no division by zero
    ///
    /// - Input: Empty slice
    /// - Output: All-zero stats
    fn stats_empty_catalog_guards() {
        let s = statistics(&[]);
        assert_eq!(s, CatalogStats::default());
        assert_eq!(s.discount_percentage, 0);
    }
}
