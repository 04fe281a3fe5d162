//! Listing filters applied before paging.
//!
//! Every filter produces a new collection; the pager then reconciles its
//! current page against the filtered length.
use serde::{Deserialize, Serialize};

use crate::catalog::{Account, Blog, BlogStatus, Product};
use crate::format::format_price;

/// Trim and lowercase a search box value.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `haystack` contains an already-normalized `needle`. Empty needles match everything.
#[must_use]
pub fn contains_query(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Preset price brackets offered by the shop filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    Under300k,
    From300kTo500k,
    From500kTo1m,
    Over1m,
}

impl PriceRange {
    pub const ALL: [Self; 4] = [
        Self::Under300k,
        Self::From300kTo500k,
        Self::From500kTo1m,
        Self::Over1m,
    ];

    /// Inclusive `(min, max)` bounds; `None` means unbounded.
    #[must_use]
    pub const fn bounds(self) -> (Option<i64>, Option<i64>) {
        match self {
            Self::Under300k => (Some(0), Some(300_000)),
            Self::From300kTo500k => (Some(300_000), Some(500_000)),
            Self::From500kTo1m => (Some(500_000), Some(1_000_000)),
            Self::Over1m => (Some(1_000_000), None),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under300k => "Dưới 300.000đ",
            Self::From300kTo500k => "300.000đ - 500.000đ",
            Self::From500kTo1m => "500.000đ - 1.000.000đ",
            Self::Over1m => "Trên 1.000.000đ",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Under300k => "under_300k",
            Self::From300kTo500k => "from_300k_to_500k",
            Self::From500kTo1m => "from_500k_to_1m",
            Self::Over1m => "over_1m",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.key() == key)
    }

    /// Bucket for statistics. Bounds are half-open here so each price lands in exactly one bucket.
    #[must_use]
    pub const fn bucket_of(price: i64) -> Self {
        if price < 300_000 {
            Self::Under300k
        } else if price < 500_000 {
            Self::From300kTo500k
        } else if price < 1_000_000 {
            Self::From500kTo1m
        } else {
            Self::Over1m
        }
    }
}

/// Shop-side product filters. All active criteria must hold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub collection_id: Option<u64>,
    #[serde(default)]
    pub min_price: Option<i64>,
    #[serde(default)]
    pub max_price: Option<i64>,
}

impl ProductFilters {
    #[must_use]
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        let (min, max) = range.bounds();
        self.min_price = min;
        self.max_price = max;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category_id: Option<u64>) -> Self {
        self.category_id = category_id;
        self
    }

    #[must_use]
    pub fn with_collection(mut self, collection_id: Option<u64>) -> Self {
        self.collection_id = collection_id;
        self
    }

    /// Preset matching the current bounds, if any.
    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        PriceRange::ALL
            .into_iter()
            .find(|range| range.bounds() == (self.min_price, self.max_price))
    }

    #[must_use]
    pub const fn has_price_bounds(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    /// Badge count on the filter dropdown. The search box is not counted.
    #[must_use]
    pub const fn active_filter_count(&self) -> usize {
        self.category_id.is_some() as usize
            + self.collection_id.is_some() as usize
            + self.has_price_bounds() as usize
    }

    /// Chip text for the active price bounds.
    #[must_use]
    pub fn price_label(&self) -> Option<String> {
        match (self.min_price, self.max_price) {
            (None, None) => None,
            (Some(min), Some(max)) => Some(format!("{} - {}", format_price(min), format_price(max))),
            (Some(min), None) => Some(format!("Từ {}", format_price(min))),
            (None, Some(max)) => Some(format!("Đến {}", format_price(max))),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let needle = normalize_query(&self.search_query);
        self.matches_normalized(product, &needle)
    }

    fn matches_normalized(&self, product: &Product, needle: &str) -> bool {
        contains_query(&product.name, needle)
            && self
                .category_id
                .is_none_or(|id| product.category.as_ref().is_some_and(|c| c.id == id))
            && self
                .collection_id
                .is_none_or(|id| product.collection.as_ref().is_some_and(|c| c.id == id))
            && self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
    }

    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = normalize_query(&self.search_query);
        products
            .iter()
            .filter(|product| self.matches_normalized(product, &needle))
            .cloned()
            .collect()
    }
}

/// Value of the admin category select that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Admin product list filter: name search plus a category select.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminProductFilter {
    pub query: String,
    pub category_id: Option<u64>,
}

impl AdminProductFilter {
    /// Read the category select value. `"all"` and unparseable values clear the filter.
    pub fn set_category(&mut self, select_value: &str) {
        self.category_id = if select_value == ALL_CATEGORIES {
            None
        } else {
            select_value.parse().ok()
        };
    }

    #[must_use]
    pub fn category_select_value(&self) -> String {
        self.category_id
            .map_or_else(|| ALL_CATEGORIES.to_string(), |id| id.to_string())
    }

    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        ProductFilters::default()
            .with_query(self.query.clone())
            .with_category(self.category_id)
            .apply(products)
    }
}

/// Admin blog list filter: title search plus a status select.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlogFilter {
    pub query: String,
    pub status: Option<BlogStatus>,
}

impl BlogFilter {
    pub fn set_status(&mut self, select_value: &str) {
        self.status = BlogStatus::from_key(select_value);
    }

    #[must_use]
    pub fn apply(&self, blogs: &[Blog]) -> Vec<Blog> {
        let needle = normalize_query(&self.query);
        blogs
            .iter()
            .filter(|blog| contains_query(&blog.title, &needle))
            .filter(|blog| self.status.is_none_or(|status| blog.status == status))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountFilter {
    pub query: String,
}

impl AccountFilter {
    #[must_use]
    pub fn apply(&self, accounts: &[Account]) -> Vec<Account> {
        let needle = normalize_query(&self.query);
        accounts
            .iter()
            .filter(|account| contains_query(&account.username, &needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn presets_set_inclusive_bounds() {
        let filters = ProductFilters::default().with_price_range(PriceRange::From300kTo500k);
        assert_eq!(filters.min_price, Some(300_000));
        assert_eq!(filters.max_price, Some(500_000));
        assert_eq!(filters.price_range(), Some(PriceRange::From300kTo500k));

        let hits = filters.apply(&Catalog::bundled().products);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| (300_000..=500_000).contains(&p.price)));
    }

    #[test]
    fn criteria_combine_with_and() {
        let filters = ProductFilters::default()
            .with_query("hoa")
            .with_category(Some(1))
            .with_price_range(PriceRange::Over1m);
        let hits = filters.apply(&Catalog::bundled().products);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn collection_filter_requires_membership() {
        let hits = ProductFilters::default()
            .with_collection(Some(4))
            .apply(&Catalog::bundled().products);
        assert_eq!(
            hits.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![4, 13, 24]
        );
    }

    #[test]
    fn active_count_ignores_search() {
        let filters = ProductFilters::default().with_query("hồng");
        assert_eq!(filters.active_filter_count(), 0);
        let mut filters = filters
            .with_category(Some(2))
            .with_price_range(PriceRange::Under300k);
        assert_eq!(filters.active_filter_count(), 2);
        filters.clear();
        assert_eq!(filters.active_filter_count(), 0);
    }

    #[test]
    fn price_labels() {
        let mut filters = ProductFilters::default();
        assert!(filters.price_label().is_none());
        filters.min_price = Some(1_000_000);
        assert_eq!(filters.price_label().as_deref(), Some("Từ 1.000.000 ₫"));
        filters.min_price = None;
        filters.max_price = Some(300_000);
        assert_eq!(filters.price_label().as_deref(), Some("Đến 300.000 ₫"));
    }

    #[test]
    fn buckets_are_disjoint() {
        assert_eq!(PriceRange::bucket_of(299_999), PriceRange::Under300k);
        assert_eq!(PriceRange::bucket_of(300_000), PriceRange::From300kTo500k);
        assert_eq!(PriceRange::bucket_of(1_000_000), PriceRange::Over1m);
        assert_eq!(PriceRange::from_key("over_1m"), Some(PriceRange::Over1m));
    }

    #[test]
    fn admin_category_select() {
        let mut filter = AdminProductFilter::default();
        filter.set_category("2");
        assert_eq!(filter.category_id, Some(2));
        assert_eq!(filter.apply(&Catalog::bundled().products).len(), 3);
        filter.set_category(ALL_CATEGORIES);
        assert_eq!(filter.category_select_value(), "all");
        assert_eq!(filter.apply(&Catalog::bundled().products).len(), 24);
    }

    #[test]
    fn blog_and_account_filters() {
        let catalog = Catalog::bundled();
        let mut blogs = BlogFilter {
            query: "HOA".into(),
            status: None,
        };
        assert_eq!(blogs.apply(&catalog.blogs).len(), 6);
        blogs.set_status("DRAFT");
        assert!(blogs.apply(&catalog.blogs).is_empty());

        let accounts = AccountFilter {
            query: "man".into(),
        };
        let hits = accounts.apply(&catalog.accounts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].username, "manager");
    }
}
