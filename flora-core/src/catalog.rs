//! Storefront catalog: products, blogs, categories and collections.
//!
//! The catalog is an in-memory snapshot. Listing queries return
//! [`ListResponse`] pages cut by the paging engine, so the mock API and the
//! client-side pager always agree on slice boundaries.
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::CatalogError;
use crate::filter::{contains_query, normalize_query};
use crate::format::product_code_for;
use crate::pagination::{PageSize, derive};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Image used when a record carries no picture of its own.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400";

const DEFAULT_CREATED_AT: &str = "2024-01-15T10:00:00Z";
const DEFAULT_UPDATED_AT: &str = "2024-12-19T08:30:00Z";

const DEFAULT_FEATURES: [&str; 5] = [
    "🌸 Hoa tươi 100% chất lượng cao",
    "🎨 Thiết kế độc đáo, sang trọng",
    "🚚 Giao hàng nhanh chóng trong ngày",
    "💝 Tặng kèm thiệp chúc mừng miễn phí",
    "🔄 Đổi trả trong 24h nếu hoa không tươi",
];

const DEFAULT_BLOG_TAGS: [&str; 4] = ["hoa", "florist", "việt nam", "trang trí"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Id and display name of a category or collection embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Price in whole VND.
    pub price: i64,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<EntityRef>,
}

/// Detail page payload: a product with gallery, features and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProduct {
    pub id: u64,
    pub name: String,
    pub price: i64,
    pub image_url: String,
}

impl From<&Product> for RelatedProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

/// Per-product enrichment kept apart from the listing rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductExtras {
    pub product_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Publication state of a post. Only the admin list filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogStatus {
    Draft,
    #[default]
    Published,
}

impl BlogStatus {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "DRAFT" => Some(Self::Draft),
            "PUBLISHED" => Some(Self::Published),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub content: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub status: BlogStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetail {
    #[serde(flatten)]
    pub blog: Blog,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedBlog {
    pub id: u64,
    pub title: String,
    pub image_url: String,
    pub created_at: String,
}

impl From<&Blog> for RelatedBlog {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            image_url: blog.image_url.clone(),
            created_at: blog.created_at.clone(),
        }
    }
}

/// An admin login account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: u64,
    pub username: String,
    pub created_at: String,
}

/// One page of a listing, shaped like the storefront API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl<T: Clone> ListResponse<T> {
    /// Cut page `page` out of `rows`.
    #[must_use]
    pub fn paginate(rows: &[T], page: usize, limit: PageSize) -> Self {
        let result = derive(rows, limit, page);
        Self {
            items: result.items.to_vec(),
            total: result.total_items,
            page: result.current_page,
            limit: result.page_size.get(),
        }
    }
}

impl<T> ListResponse<T> {
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}

/// Source of catalog snapshots.
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a full catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Loader over the JSON compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLoader;

impl CatalogLoader for BundledLoader {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::from_json(BUNDLED_CATALOG)
    }
}

/// Loader over a caller-supplied JSON document.
#[derive(Debug, Clone)]
pub struct JsonLoader {
    json: String,
}

impl JsonLoader {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogLoader for JsonLoader {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::from_json(&self.json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub product_extras: Vec<ProductExtras>,
    #[serde(default)]
    pub blogs: Vec<Blog>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(BUNDLED_CATALOG).unwrap_or_else(|err| {
            log::error!("bundled catalog is unreadable: {err}");
            Self::default()
        })
    }

    /// Shared snapshot of the bundled catalog, parsed on first use.
    #[must_use]
    pub fn bundled() -> &'static Self {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    #[must_use]
    pub fn products_page(&self, page: usize, limit: PageSize) -> ListResponse<Product> {
        ListResponse::paginate(&self.products, page, limit)
    }

    /// Featured products, in catalog order.
    #[must_use]
    pub fn top_products(&self, limit: usize) -> Vec<Product> {
        self.products.iter().take(limit).cloned().collect()
    }

    #[must_use]
    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    fn extras_for(&self, id: u64) -> Option<&ProductExtras> {
        self.product_extras.iter().find(|extra| extra.product_id == id)
    }

    /// Product with every detail-page field filled in.
    #[must_use]
    pub fn product_detail(&self, id: u64) -> Option<ProductDetail> {
        let mut product = self.product(id)?.clone();
        let extras = self.extras_for(id);

        let description = extras
            .and_then(|extra| extra.description.clone())
            .or_else(|| product.description.take())
            .unwrap_or_else(|| {
                format!(
                    "{} - Được tuyển chọn kỹ lưỡng từ những bông hoa tươi đẹp nhất, mang đến vẻ đẹp tinh tế và sang trọng cho mọi dịp đặc biệt.",
                    product.name
                )
            });
        product.description = Some(description);
        if product.product_code.as_deref().is_none_or(str::is_empty) {
            product.product_code = Some(product_code_for(id));
        }

        let image_urls = extras
            .map(|extra| extra.image_urls.clone())
            .filter(|urls| !urls.is_empty())
            .unwrap_or_else(|| vec![product.image_url.clone()]);
        let features = extras
            .map(|extra| extra.features.clone())
            .filter(|features| !features.is_empty())
            .unwrap_or_else(|| DEFAULT_FEATURES.iter().map(ToString::to_string).collect());
        let created_at = extras
            .and_then(|extra| extra.created_at.clone())
            .unwrap_or_else(|| DEFAULT_CREATED_AT.to_string());
        let updated_at = extras
            .and_then(|extra| extra.updated_at.clone())
            .unwrap_or_else(|| DEFAULT_UPDATED_AT.to_string());

        Some(ProductDetail {
            product,
            image_urls,
            features,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        })
    }

    #[must_use]
    pub fn products_by_category(
        &self,
        category_id: u64,
        page: usize,
        limit: PageSize,
    ) -> ListResponse<Product> {
        let rows: Vec<Product> = self
            .products
            .iter()
            .filter(|product| product.category.as_ref().is_some_and(|c| c.id == category_id))
            .cloned()
            .collect();
        ListResponse::paginate(&rows, page, limit)
    }

    /// Other products to suggest next to `id`. Never includes `id` itself.
    #[must_use]
    pub fn related_products(&self, id: u64, limit: usize) -> Vec<RelatedProduct> {
        self.products
            .iter()
            .filter(|product| product.id != id)
            .take(limit)
            .map(RelatedProduct::from)
            .collect()
    }

    /// Case-insensitive name search.
    #[must_use]
    pub fn search_products(&self, query: &str, page: usize, limit: PageSize) -> ListResponse<Product> {
        let needle = normalize_query(query);
        let rows: Vec<Product> = self
            .products
            .iter()
            .filter(|product| contains_query(&product.name, &needle))
            .cloned()
            .collect();
        ListResponse::paginate(&rows, page, limit)
    }

    /// First product of every category that has one, for the shop banner.
    #[must_use]
    pub fn featured_by_category(&self) -> Vec<(&Category, &Product)> {
        self.categories
            .iter()
            .filter_map(|category| {
                self.products
                    .iter()
                    .find(|product| product.category.as_ref().is_some_and(|c| c.id == category.id))
                    .map(|product| (category, product))
            })
            .collect()
    }

    #[must_use]
    pub fn blogs_page(&self, page: usize, limit: PageSize) -> ListResponse<Blog> {
        ListResponse::paginate(&self.blogs, page, limit)
    }

    #[must_use]
    pub fn blog(&self, id: u64) -> Option<&Blog> {
        self.blogs.iter().find(|blog| blog.id == id)
    }

    #[must_use]
    pub fn blog_detail(&self, id: u64) -> Option<BlogDetail> {
        let blog = self.blog(id)?.clone();
        Some(BlogDetail {
            image_urls: vec![blog.image_url.clone()],
            tags: DEFAULT_BLOG_TAGS.iter().map(ToString::to_string).collect(),
            blog,
        })
    }

    /// Case-insensitive search over blog titles and bodies.
    #[must_use]
    pub fn search_blogs(&self, query: &str, page: usize, limit: PageSize) -> ListResponse<Blog> {
        let needle = normalize_query(query);
        let rows: Vec<Blog> = self
            .blogs
            .iter()
            .filter(|blog| contains_query(&blog.title, &needle) || contains_query(&blog.content, &needle))
            .cloned()
            .collect();
        ListResponse::paginate(&rows, page, limit)
    }

    #[must_use]
    pub fn related_blogs(&self, id: u64, limit: usize) -> Vec<RelatedBlog> {
        self.blogs
            .iter()
            .filter(|blog| blog.id != id)
            .take(limit)
            .map(RelatedBlog::from)
            .collect()
    }

    #[must_use]
    pub fn category_by_id(&self, id: u64) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.slug == slug)
    }

    #[must_use]
    pub fn collection_by_id(&self, id: u64) -> Option<&Collection> {
        self.collections.iter().find(|collection| collection.id == id)
    }

    #[must_use]
    pub fn collection_by_slug(&self, slug: &str) -> Option<&Collection> {
        self.collections.iter().find(|collection| collection.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn bundled_catalog_parses() {
        let catalog = BundledLoader.load_catalog().unwrap();
        assert_eq!(catalog.products.len(), 24);
        assert_eq!(catalog.categories.len(), 7);
        assert_eq!(catalog.collections.len(), 7);
        assert_eq!(catalog.blogs.len(), 6);
        assert_eq!(Catalog::bundled(), &catalog);
    }

    #[test]
    fn products_page_uses_engine_slices() {
        let catalog = Catalog::bundled();
        let page = catalog.products_page(3, limit(10));
        assert_eq!(page.total, 24);
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.items[0].id, 21);
        assert_eq!(page.total_pages(), 3);
        assert!(catalog.products_page(4, limit(10)).items.is_empty());
    }

    #[test]
    fn detail_fills_defaults() {
        let catalog = Catalog::bundled();
        let detail = catalog.product_detail(1).unwrap();
        assert_eq!(detail.product.product_code.as_deref(), Some("FL-0001"));
        assert_eq!(detail.image_urls.len(), 3);
        assert_eq!(detail.features.len(), 5);

        let plain = catalog.product_detail(15).unwrap();
        assert_eq!(plain.image_urls, vec![plain.product.image_url.clone()]);
        assert_eq!(plain.features[0], DEFAULT_FEATURES[0]);
        assert!(
            plain
                .product
                .description
                .as_deref()
                .unwrap()
                .starts_with("Cây Kim Tiền Để Bàn - ")
        );
        assert_eq!(plain.created_at.as_deref(), Some(DEFAULT_CREATED_AT));
        assert!(catalog.product_detail(999).is_none());
    }

    #[test]
    fn related_products_exclude_self() {
        let related = Catalog::bundled().related_products(1, 5);
        assert_eq!(related.len(), 5);
        assert!(related.iter().all(|product| product.id != 1));
        assert_eq!(related[0].id, 2);
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::bundled();
        let hits = catalog.search_products("  CẨM TÚ  ", 1, limit(20));
        assert_eq!(hits.total, 2);
        assert!(catalog.search_products("zzz", 1, limit(20)).items.is_empty());
        assert_eq!(catalog.search_products("", 1, limit(20)).total, 24);
    }

    #[test]
    fn category_listing_filters_then_pages() {
        let catalog = Catalog::bundled();
        let dried = catalog.products_by_category(2, 1, limit(2));
        assert_eq!(dried.total, 3);
        assert_eq!(dried.items.len(), 2);
        assert!(
            dried
                .items
                .iter()
                .all(|product| product.category.as_ref().unwrap().id == 2)
        );
    }

    #[test]
    fn blog_queries() {
        let catalog = Catalog::bundled();
        let detail = catalog.blog_detail(2).unwrap();
        assert_eq!(detail.tags.len(), 4);
        assert_eq!(catalog.search_blogs("đà lạt", 1, limit(10)).total, 1);
        let related = catalog.related_blogs(1, 3);
        assert_eq!(
            related.iter().map(|blog| blog.id).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn lookups_by_slug_and_id() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.category_by_slug("hoa-cuoi").map(|c| c.id), Some(3));
        assert_eq!(catalog.collection_by_id(2).map(|c| c.slug.as_str()), Some("luxury"));
        assert!(catalog.collection_by_slug("winter").is_none());
        assert!(catalog.category_by_id(42).is_none());
    }

    #[test]
    fn featured_by_category_skips_empty_categories() {
        let featured = Catalog::bundled().featured_by_category();
        assert_eq!(featured.len(), 7);
        assert_eq!(featured[0].1.id, 1);
    }

    #[test]
    fn json_loader_reports_parse_errors() {
        let err = JsonLoader::new("{not json").load_catalog().unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        let empty = JsonLoader::new("{}").load_catalog().unwrap();
        assert!(empty.products.is_empty());
    }
}
