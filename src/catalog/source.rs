//! Catalog document retrieval and parsing.
//!
//! A catalog source is either a local JSON file or an http(s) URL serving the
//! same document: an object with a `products` array. Every failure mode is
//! mapped into [`LoadError`] so the store can latch its loaded-empty state.

use std::path::PathBuf;

use crate::state::Product;

/// Failure modes of catalog retrieval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read.
    Io(String),
    /// The HTTP request failed at the transport level.
    Http(String),
    /// The HTTP response carried a non-success status.
    Status(u16),
    /// The document did not parse as a product catalog.
    Malformed(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "catalog file unreadable: {e}"),
            Self::Http(e) => write!(f, "catalog unreachable: {e}"),
            Self::Status(code) => write!(f, "catalog request returned status {code}"),
            Self::Malformed(e) => write!(f, "catalog document malformed: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where the catalog document lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local JSON file.
    File(PathBuf),
    /// Remote document over http(s).
    Url(String),
}

impl CatalogSource {
    /// What: Interpret a user-supplied source spec.
    ///
    /// Inputs:
    /// - `spec`: CLI/config value.
    ///
    /// Output:
    /// - `Url` when the spec starts with an http(s) scheme, `File` otherwise.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            Self::Url(spec.to_string())
        } else {
            Self::File(PathBuf::from(spec))
        }
    }

    /// Short human-readable description for logs and error text.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(p) => p.display().to_string(),
            Self::Url(u) => u.clone(),
        }
    }
}

/// On-the-wire catalog document shape.
#[derive(serde::Deserialize)]
struct CatalogDocument {
    /// Ordered product records.
    #[serde(default)]
    products: Vec<Product>,
}

/// What: Parse catalog JSON text into products.
///
/// Inputs:
/// - `text`: Raw document body.
///
/// Output:
/// - Products in document order, or `LoadError::Malformed`.
///
/// Details:
/// - Enforces the id-uniqueness invariant by keeping the first record for a
///   repeated id and logging the rest.
pub fn parse_document(text: &str) -> Result<Vec<Product>, LoadError> {
    let doc: CatalogDocument =
        serde_json::from_str(text).map_err(|e| LoadError::Malformed(e.to_string()))?;
    let mut products = doc.products;
    let mut seen = std::collections::HashSet::new();
    products.retain(|p| {
        let fresh = seen.insert(p.id.clone());
        if !fresh {
            tracing::warn!(id = %p.id, "duplicate product id in catalog; keeping first record");
        }
        fresh
    });
    Ok(products)
}

/// What: Retrieve and parse the catalog from its source.
///
/// Inputs:
/// - `source`: File path or URL.
///
/// Output:
/// - Parsed products, or the `LoadError` describing the failure.
///
/// Details:
/// - File reads are synchronous (the document is small and read once);
///   HTTP goes through reqwest and maps non-success statuses explicitly.
pub async fn fetch(source: &CatalogSource) -> Result<Vec<Product>, LoadError> {
    match source {
        CatalogSource::File(path) => {
            let text =
                std::fs::read_to_string(path).map_err(|e| LoadError::Io(e.to_string()))?;
            parse_document(&text)
        }
        CatalogSource::Url(url) => {
            // Bounded retrieval: a hung fetch must not pin the UI in Loading.
            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .map_err(|e| LoadError::Http(e.to_string()))?;
            let resp = client
                .get(url)
                .send()
                .await
                .map_err(|e| LoadError::Http(e.to_string()))?;
            let status = resp.status();
            if !status.is_success() {
                return Err(LoadError::Status(status.as_u16()));
            }
            let text = resp
                .text()
                .await
                .map_err(|e| LoadError::Http(e.to_string()))?;
            parse_document(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Source spec parsing distinguishes URLs from paths
    ///
    /// - Input: https URL, http URL, bare path
    /// - Output: `Url` for the schemes, `File` otherwise
    fn source_spec_parsing() {
        assert_eq!(
            CatalogSource::parse("https://example.com/c.json"),
            CatalogSource::Url("https://example.com/c.json".into())
        );
        assert!(matches!(CatalogSource::parse("http://host/c.json"), CatalogSource::Url(_)));
        assert_eq!(
            CatalogSource::parse("./catalog.json"),
            CatalogSource::File(PathBuf::from("./catalog.json"))
        );
    }

    #[test]
    /// What: Well-formed document parses in order; duplicates collapse
    ///
    /// - Input: Three records with one repeated id
    /// - Output: Two products, first occurrence wins, order preserved
    fn source_parse_dedups_ids() {
        let text = r#"{"products":[
            {"id":"p1","title":"A"},
            {"id":"p2","title":"B"},
            {"id":"p1","title":"A again"}
        ]}"#;
        let products = parse_document(text).expect("parse");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "A");
        assert_eq!(products[1].id, "p2");
    }

    #[test]
    /// What: Malformed and shape-mismatched documents yield Malformed
    ///
    /// - Input: Non-JSON text and a JSON array instead of an object
    /// - Output: `LoadError::Malformed` in both cases
    fn source_parse_malformed() {
        assert!(matches!(parse_document("nonsense"), Err(LoadError::Malformed(_))));
        assert!(matches!(parse_document("[1,2,3]"), Err(LoadError::Malformed(_))));
    }

    #[test]
    /// What: A document without a products field is an empty catalog
    ///
    /// - Input: `{}`
    /// - Output: Ok with zero products (absence is not malformed)
    fn source_parse_missing_products_field() {
        assert_eq!(parse_document("{}").expect("parse").len(), 0);
    }

    #[tokio::test]
    /// What: Fetching a missing file maps to Io, not a panic
    ///
    /// - Input: Path that does not exist
    /// - Output: `LoadError::Io`
    async fn source_fetch_missing_file_is_io() {
        let src = CatalogSource::File(PathBuf::from("/nonexistent/vitrine-catalog.json"));
        assert!(matches!(fetch(&src).await, Err(LoadError::Io(_))));
    }
}
