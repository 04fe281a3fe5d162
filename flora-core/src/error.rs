//! Error types shared across the catalog and admin layers.
use thiserror::Error;

/// Failures when loading or querying catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
    #[error("product {0} not found")]
    ProductNotFound(u64),
    #[error("blog {0} not found")]
    BlogNotFound(u64),
    #[error(transparent)]
    Paging(#[from] crate::pagination::PagingError),
}
