//! Mock backend for the storefront and admin pages.
//!
//! Every call answers from the bundled catalog after a short simulated delay,
//! so pages exercise their loading states the way they would against a real
//! API. The delay only happens in the browser.
use flora_core::{
    AdminSession, AuthError, Blog, BlogDetail, Catalog, Category, Collection, Credentials,
    ListResponse, PageSize, Product, ProductDetail, RelatedBlog, RelatedProduct,
    StorefrontConfig, authenticate,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Không tìm thấy sản phẩm #{0}")]
    ProductNotFound(u64),
    #[error("Không tìm thấy bài viết #{0}")]
    BlogNotFound(u64),
    #[error("Không tìm thấy danh mục {0}")]
    CategoryNotFound(String),
    #[error("Không tìm thấy bộ sưu tập {0}")]
    CollectionNotFound(String),
    #[error("Lỗi kết nối: {0}")]
    Transport(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Mock client over a catalog snapshot.
#[derive(Debug, Clone, Copy)]
pub struct MockApi {
    catalog: &'static Catalog,
    config: StorefrontConfig,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(Catalog::bundled(), StorefrontConfig::default())
    }
}

impl MockApi {
    #[must_use]
    pub const fn new(catalog: &'static Catalog, config: StorefrontConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    async fn list_delay(&self) -> Result<(), ApiError> {
        simulate_latency(self.config.list_delay_ms).await
    }

    async fn record_delay(&self) -> Result<(), ApiError> {
        simulate_latency(self.config.api_delay_ms).await
    }

    /// Every product, for views that filter and page on the client.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn all_products(&self) -> Result<Vec<Product>, ApiError> {
        self.list_delay().await?;
        Ok(self.catalog.products.clone())
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn products(&self, page: usize, limit: PageSize) -> Result<ListResponse<Product>, ApiError> {
        self.list_delay().await?;
        Ok(self.catalog.products_page(page, limit))
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn top_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record_delay().await?;
        Ok(self.catalog.top_products(self.config.top_products))
    }

    /// # Errors
    /// Returns [`ApiError::ProductNotFound`] for unknown ids.
    pub async fn product(&self, id: u64) -> Result<ProductDetail, ApiError> {
        self.record_delay().await?;
        self.catalog.product_detail(id).ok_or_else(|| {
            log::warn!("product {id} not found");
            ApiError::ProductNotFound(id)
        })
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn related_products(&self, id: u64) -> Result<Vec<RelatedProduct>, ApiError> {
        self.record_delay().await?;
        Ok(self.catalog.related_products(id, self.config.related_products))
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn products_by_category(
        &self,
        category_id: u64,
        page: usize,
        limit: PageSize,
    ) -> Result<ListResponse<Product>, ApiError> {
        self.list_delay().await?;
        Ok(self.catalog.products_by_category(category_id, page, limit))
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn search_products(
        &self,
        query: &str,
        page: usize,
        limit: PageSize,
    ) -> Result<ListResponse<Product>, ApiError> {
        self.list_delay().await?;
        Ok(self.catalog.search_products(query, page, limit))
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn blogs(&self, page: usize, limit: PageSize) -> Result<ListResponse<Blog>, ApiError> {
        self.list_delay().await?;
        Ok(self.catalog.blogs_page(page, limit))
    }

    /// Every post, for views that filter and page on the client.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn all_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        self.list_delay().await?;
        Ok(self.catalog.blogs.clone())
    }

    /// # Errors
    /// Returns [`ApiError::BlogNotFound`] for unknown ids.
    pub async fn blog(&self, id: u64) -> Result<BlogDetail, ApiError> {
        self.record_delay().await?;
        self.catalog.blog_detail(id).ok_or_else(|| {
            log::warn!("blog {id} not found");
            ApiError::BlogNotFound(id)
        })
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn related_blogs(&self, id: u64) -> Result<Vec<RelatedBlog>, ApiError> {
        self.record_delay().await?;
        Ok(self.catalog.related_blogs(id, self.config.related_blogs))
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn search_blogs(
        &self,
        query: &str,
        page: usize,
        limit: PageSize,
    ) -> Result<ListResponse<Blog>, ApiError> {
        self.list_delay().await?;
        Ok(self.catalog.search_blogs(query, page, limit))
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record_delay().await?;
        Ok(self.catalog.categories.clone())
    }

    /// # Errors
    /// Returns [`ApiError::CategoryNotFound`] for unknown slugs.
    pub async fn category_by_slug(&self, slug: &str) -> Result<Category, ApiError> {
        self.record_delay().await?;
        self.catalog
            .category_by_slug(slug)
            .cloned()
            .ok_or_else(|| ApiError::CategoryNotFound(slug.to_string()))
    }

    /// # Errors
    /// Returns [`ApiError::Transport`] if the simulated request fails.
    pub async fn collections(&self) -> Result<Vec<Collection>, ApiError> {
        self.record_delay().await?;
        Ok(self.catalog.collections.clone())
    }

    /// # Errors
    /// Returns [`ApiError::CollectionNotFound`] for unknown slugs.
    pub async fn collection_by_slug(&self, slug: &str) -> Result<Collection, ApiError> {
        self.record_delay().await?;
        self.catalog
            .collection_by_slug(slug)
            .cloned()
            .ok_or_else(|| ApiError::CollectionNotFound(slug.to_string()))
    }

    /// # Errors
    /// Returns [`ApiError::Auth`] when the credentials are rejected.
    pub async fn login(&self, credentials: &Credentials) -> Result<AdminSession, ApiError> {
        self.record_delay().await?;
        Ok(authenticate(credentials)?)
    }
}

#[cfg(target_arch = "wasm32")]
async fn simulate_latency(delay_ms: u32) -> Result<(), ApiError> {
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    crate::dom::sleep_ms(delay).await.map_err(|err| {
        let message = crate::dom::js_error_message(&err);
        log::error!("mock api delay failed: {message}");
        ApiError::Transport(message)
    })
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unused_async)]
async fn simulate_latency(_delay_ms: u32) -> Result<(), ApiError> {
    Ok(())
}
