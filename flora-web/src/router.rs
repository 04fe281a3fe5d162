use flora_core::{Catalog, ProductFilters};
use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/shop")]
    Shop,
    #[at("/shop/:id")]
    ProductDetail { id: u64 },
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogDetail { id: u64 },
    #[at("/login")]
    Login,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/admin/products")]
    AdminProducts,
    #[at("/admin/blogs")]
    AdminBlogs,
    #[at("/admin/accounts")]
    AdminAccounts,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Routes that need a logged-in admin.
    #[must_use]
    pub const fn requires_session(&self) -> bool {
        matches!(
            self,
            Self::AdminRoot
                | Self::AdminDashboard
                | Self::AdminProducts
                | Self::AdminBlogs
                | Self::AdminAccounts
        )
    }

    /// Storefront routes show the shop header and footer.
    #[must_use]
    pub const fn is_storefront(&self) -> bool {
        !self.requires_session() && !matches!(self, Self::Login)
    }

    /// Which top-level nav entry to highlight.
    #[must_use]
    pub fn section(&self) -> Self {
        match self {
            Self::ProductDetail { .. } => Self::Shop,
            Self::BlogDetail { .. } => Self::Blog,
            Self::AdminRoot => Self::AdminDashboard,
            other => other.clone(),
        }
    }
}

/// Query string understood by [`Route::Shop`], e.g. `/shop?category=3&q=hồng`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<u64>,
}

impl ShopQuery {
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            q: Some(query.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category(id: u64) -> Self {
        Self {
            category: Some(id),
            ..Self::default()
        }
    }

    /// Starting shop filters. Ids the catalog does not know are dropped.
    #[must_use]
    pub fn filters(&self, catalog: &Catalog) -> ProductFilters {
        let category = self.category.filter(|id| {
            let known = catalog.category_by_id(*id).is_some();
            if !known {
                log::warn!("ignoring unknown category {id} in shop link");
            }
            known
        });
        let collection = self.collection.filter(|id| {
            let known = catalog.collection_by_id(*id).is_some();
            if !known {
                log::warn!("ignoring unknown collection {id} in shop link");
            }
            known
        });
        ProductFilters::default()
            .with_query(self.q.as_deref().map(str::trim).unwrap_or_default())
            .with_category(category)
            .with_collection(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::{Route, ShopQuery};
    use flora_core::Catalog;
    use yew_router::Routable;

    #[test]
    fn paths_match_the_storefront_layout() {
        assert_eq!(Route::Shop.to_path(), "/shop");
        assert_eq!(Route::ProductDetail { id: 7 }.to_path(), "/shop/7");
        assert_eq!(Route::BlogDetail { id: 2 }.to_path(), "/blog/2");
        assert_eq!(Route::AdminAccounts.to_path(), "/admin/accounts");
        assert_eq!(Route::recognize("/shop/12"), Some(Route::ProductDetail { id: 12 }));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }

    #[test]
    fn only_admin_routes_need_a_session() {
        assert!(Route::AdminProducts.requires_session());
        assert!(Route::AdminRoot.requires_session());
        assert!(!Route::Login.requires_session());
        assert!(!Route::Login.is_storefront());
        assert!(Route::BlogDetail { id: 1 }.is_storefront());
    }

    #[test]
    fn detail_routes_highlight_their_listing() {
        assert_eq!(Route::ProductDetail { id: 3 }.section(), Route::Shop);
        assert_eq!(Route::BlogDetail { id: 3 }.section(), Route::Blog);
        assert_eq!(Route::AdminRoot.section(), Route::AdminDashboard);
        assert_eq!(Route::Home.section(), Route::Home);
    }

    #[test]
    fn shop_query_seeds_the_filters() {
        let catalog = Catalog::bundled();
        let filters = ShopQuery::search("  hồng ").filters(catalog);
        assert_eq!(filters.search_query, "hồng");
        assert_eq!(filters.category_id, None);

        let filters = ShopQuery::category(3).filters(catalog);
        assert_eq!(filters.category_id, Some(3));
        assert!(filters.search_query.is_empty());

        let unknown = ShopQuery {
            category: Some(404),
            collection: Some(2),
            ..ShopQuery::default()
        };
        let filters = unknown.filters(catalog);
        assert_eq!(filters.category_id, None);
        assert_eq!(filters.collection_id, Some(2));
        assert_eq!(ShopQuery::default().filters(catalog), flora_core::ProductFilters::default());
    }
}
