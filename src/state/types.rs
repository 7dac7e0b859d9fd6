//! Core value types used by Vitrine state.

/// A full product review shown in the review modal.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// One-paragraph review summary.
    #[serde(default)]
    pub summary: String,
    /// Points in favor, in display order.
    #[serde(default)]
    pub pros: Vec<String>,
    /// Points against, in display order.
    #[serde(default)]
    pub cons: Vec<String>,
    /// Closing verdict line.
    #[serde(default)]
    pub verdict: String,
}

/// A single catalog product, immutable once loaded.
///
/// Price fields are pre-formatted display strings as shipped by the catalog
/// document; `discount` is a percentage string where empty or `"0%"` means
/// "no discount". For the full review, see [`Review`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within a loaded catalog.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line description suitable for list display.
    #[serde(default)]
    pub short_description: String,
    /// Category name (exact, case-sensitive for filtering).
    #[serde(default)]
    pub category: String,
    /// Current price, display-formatted (e.g., `"$49.99"`).
    #[serde(default)]
    pub price: String,
    /// Pre-discount price, display-formatted; may be empty.
    #[serde(default)]
    pub original_price: String,
    /// Discount percentage string; empty or `"0%"` means none.
    #[serde(default)]
    pub discount: String,
    /// Rating in `[0, 5]`.
    #[serde(default)]
    pub rating: f64,
    /// Whether the product is featured.
    #[serde(default)]
    pub featured: bool,
    /// Short display token (emoji or similar) standing in for an image.
    #[serde(default)]
    pub image: String,
    /// Outbound affiliate URL.
    #[serde(default)]
    pub affiliate_link: String,
    /// Full review content.
    #[serde(default)]
    pub review: Review,
}

impl Product {
    /// Whether this product carries a real discount (`discount` non-empty and
    /// not `"0%"`).
    #[must_use]
    pub fn has_discount(&self) -> bool {
        !self.discount.is_empty() && self.discount != "0%"
    }
}

/// Conjunctive filter criteria applied to the catalog.
///
/// Each field has an identity value imposing no constraint: `"all"` (or
/// empty) category, empty search text, and a `0.0` rating threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterCriteria {
    /// Exact category to match; `"all"` or empty matches everything.
    pub category: String,
    /// Case-insensitive substring matched against title, short description,
    /// and category; empty matches everything.
    pub search: String,
    /// Minimum rating threshold; `0.0` matches everything.
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            search: String::new(),
            min_rating: 0.0,
        }
    }
}

impl FilterCriteria {
    /// Whether every field holds its identity value.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        (self.category == "all" || self.category.is_empty())
            && self.search.trim().is_empty()
            && self.min_rating <= 0.0
    }
}

/// Aggregate catalog statistics for the footer and the `--stats` CLI path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CatalogStats {
    /// Number of products in the catalog.
    pub total_products: usize,
    /// Number of featured products.
    pub featured_products: usize,
    /// Mean rating rounded to one decimal place; `0.0` for an empty catalog.
    pub average_rating: f64,
    /// Number of distinct categories.
    pub total_categories: usize,
    /// Number of products carrying a discount.
    pub products_with_discount: usize,
    /// Discounted share as a rounded percentage; `0` for an empty catalog.
    pub discount_percentage: u32,
}

/// Query sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses and drop stale ones.
    pub id: u64,
    /// Filter criteria snapshot at the time of the keystroke.
    pub criteria: FilterCriteria,
    /// Restrict results to featured products.
    pub featured_only: bool,
    /// Reset the catalog store and fetch afresh before evaluating (the
    /// Error-state retry affordance).
    pub reload: bool,
}

/// Outcome corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Matching products in catalog order, or a load-failure message.
    pub result: Result<Vec<Product>, String>,
}

/// Mutually exclusive display state of the results area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultsView {
    /// A query is in flight and nothing has arrived yet.
    #[default]
    Loading,
    /// Results are present and rendered as a list.
    Showing,
    /// The query succeeded but matched nothing.
    Empty,
    /// The query failed; Enter re-issues it after a catalog reload.
    Error {
        /// User-facing failure description.
        message: String,
    },
}
