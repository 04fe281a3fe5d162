//! Flora storefront core
//!
//! Platform-agnostic logic for the Flora flower shop: the paging engine and
//! page-window renderer every listing uses, plus catalog queries, filters,
//! display formatting, the mock admin session and in-memory admin CRUD.
//! Nothing here touches the DOM.

pub mod admin;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod format;
pub mod pagination;
pub mod session;

use anyhow::Context;
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use admin::{
    AccountForm, AdminError, AdminStore, BlogForm, DashboardStats, ProductForm, Record,
    is_product_code_valid, is_username_valid,
};
pub use catalog::{
    Account, Blog, BlogDetail, BlogStatus, BundledLoader, Catalog, CatalogLoader, Category,
    Collection, EntityRef, JsonLoader, ListResponse, PLACEHOLDER_IMAGE, Product, ProductDetail,
    RelatedBlog, RelatedProduct,
};
pub use error::CatalogError;
pub use filter::{
    ALL_CATEGORIES, AccountFilter, AdminProductFilter, BlogFilter, PriceRange, ProductFilters,
    normalize_query,
};
pub use format::{
    DEFAULT_EXCERPT_LEN, all_product_images, display_range, format_blog_date,
    format_blog_datetime, format_price, product_code_for, truncate_content,
};
pub use pagination::{
    DEFAULT_PAGE_SIZE, PageSize, PageToken, PageTokens, PageWindow, PagingConfig, PagingError,
    PagingResult, PagingSession, WindowShape, compute_window, derive, reconcile_page, total_pages,
};
pub use session::{AdminSession, AuthError, Credentials, SESSION_STORAGE_KEY, authenticate};

const fn default_top_products() -> usize {
    10
}

const fn default_related_products() -> usize {
    5
}

const fn default_related_blogs() -> usize {
    3
}

const fn default_api_delay_ms() -> u32 {
    300
}

const fn default_list_delay_ms() -> u32 {
    500
}

const fn default_search_debounce_ms() -> u32 {
    500
}

const fn default_search_results() -> usize {
    5
}

/// Tunables for the storefront views and the mock API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default = "default_top_products")]
    pub top_products: usize,
    #[serde(default = "default_related_products")]
    pub related_products: usize,
    #[serde(default = "default_related_blogs")]
    pub related_blogs: usize,
    /// Simulated latency of single-record mock calls.
    #[serde(default = "default_api_delay_ms")]
    pub api_delay_ms: u32,
    /// Simulated latency of listing mock calls.
    #[serde(default = "default_list_delay_ms")]
    pub list_delay_ms: u32,
    /// Quiet period after the last keystroke before the header search fires.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u32,
    /// Rows in the header search dropdown.
    #[serde(default = "default_search_results")]
    pub search_results: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            top_products: default_top_products(),
            related_products: default_related_products(),
            related_blogs: default_related_blogs(),
            api_delay_ms: default_api_delay_ms(),
            list_delay_ms: default_list_delay_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            search_results: default_search_results(),
        }
    }
}

impl StorefrontConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or sets a zero page size.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub const fn paging(&self) -> PagingConfig {
        PagingConfig {
            page_size: self.page_size,
        }
    }
}

/// Catalog access bound to a loader and a view configuration.
pub struct Storefront<L>
where
    L: CatalogLoader,
{
    loader: L,
    config: StorefrontConfig,
}

impl<L> Storefront<L>
where
    L: CatalogLoader,
{
    pub const fn new(loader: L, config: StorefrontConfig) -> Self {
        Self { loader, config }
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Load a fresh catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails.
    pub fn open(&self) -> anyhow::Result<Catalog> {
        let catalog = self
            .loader
            .load_catalog()
            .context("failed to load storefront catalog")?;
        log::debug!(
            "catalog loaded: {} products, {} blogs",
            catalog.products.len(),
            catalog.blogs.len()
        );
        Ok(catalog)
    }

    /// Start a paging session sized for this storefront's listings.
    #[must_use]
    pub const fn paging_session(&self) -> PagingSession {
        PagingSession::from_config(self.config.paging())
    }

    /// Featured products for the home page.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn home_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.open()?.top_products(self.config.top_products))
    }

    /// Detail payload plus related products for one product page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] (wrapped) for unknown ids.
    pub fn product_page(&self, id: u64) -> anyhow::Result<(ProductDetail, Vec<RelatedProduct>)> {
        let catalog = self.open()?;
        let detail = catalog
            .product_detail(id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        let related = catalog.related_products(id, self.config.related_products);
        Ok((detail, related))
    }

    /// Detail payload plus related posts for one blog page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BlogNotFound`] (wrapped) for unknown ids.
    pub fn blog_page(&self, id: u64) -> anyhow::Result<(BlogDetail, Vec<RelatedBlog>)> {
        let catalog = self.open()?;
        let detail = catalog.blog_detail(id).ok_or(CatalogError::BlogNotFound(id))?;
        let related = catalog.related_blogs(id, self.config.related_blogs);
        Ok((detail, related))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingLoader {
        loads: Cell<usize>,
    }

    impl CatalogLoader for CountingLoader {
        type Error = CatalogError;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            self.loads.set(self.loads.get() + 1);
            Ok(Catalog::bundled().clone())
        }
    }

    struct BrokenLoader;

    impl CatalogLoader for BrokenLoader {
        type Error = CatalogError;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            Err(CatalogError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config = StorefrontConfig::from_json(r#"{"page_size": 12}"#).unwrap();
        assert_eq!(config.page_size.get(), 12);
        assert_eq!(config.top_products, 10);
        assert_eq!(config.related_products, 5);
        assert_eq!(config.related_blogs, 3);
        assert_eq!(config.api_delay_ms, 300);
        assert_eq!(config.list_delay_ms, 500);
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.search_results, 5);
        assert!(StorefrontConfig::from_json(r#"{"page_size": 0}"#).is_err());
        assert_eq!(StorefrontConfig::from_json("{}").unwrap(), StorefrontConfig::default());
    }

    #[test]
    fn storefront_reads_through_loader() {
        let storefront = Storefront::new(CountingLoader::default(), StorefrontConfig::default());
        assert_eq!(storefront.home_products().unwrap().len(), 10);
        let (detail, related) = storefront.product_page(3).unwrap();
        assert_eq!(detail.product.name, "Hoa Hướng Dương");
        assert_eq!(related.len(), 5);
        assert_eq!(storefront.loader.loads.get(), 2);
        assert_eq!(storefront.paging_session().page_size().get(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn missing_records_surface_typed_errors() {
        let storefront = Storefront::new(BundledLoader, StorefrontConfig::default());
        let err = storefront.product_page(404).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::ProductNotFound(404))
        ));
        let (blog, related) = storefront.blog_page(1).unwrap();
        assert_eq!(blog.tags.len(), 4);
        assert_eq!(related.len(), 3);
    }

    #[test]
    fn loader_failures_carry_context() {
        let storefront = Storefront::new(BrokenLoader, StorefrontConfig::default());
        let err = storefront.open().unwrap_err();
        assert_eq!(err.to_string(), "failed to load storefront catalog");
        assert!(format!("{err:#}").contains("offline"));
    }
}
