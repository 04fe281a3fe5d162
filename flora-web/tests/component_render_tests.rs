mod support;

use flora_core::{Catalog, ProductFilters};
use flora_web::components::daisy_ui::alert::{Alert, AlertProps};
use flora_web::components::daisy_ui::badge::{Badge, BadgeProps};
use flora_web::components::daisy_ui::DaisyColor;
use flora_web::components::filter_bar::{FilterBar, FilterBarProps};
use flora_web::components::pagination::{ListingKind, Pagination, PaginationProps};
use flora_web::api::ApiError;
use flora_web::components::{
    AdminSidebar, CategoryDropdown, Footer, Header, ProductCard, ProductCardProps, SearchBar,
    SearchResults,
};
use flora_web::hooks::Fetch;
use flora_web::router::Route;
use futures::executor::block_on;
use support::{count, render_routed};
use yew::{AttrValue, Callback, Classes, LocalServerRenderer, html};

fn pager(current_page: usize, total_pages: usize, total_items: usize, kind: ListingKind) -> String {
    let props = PaginationProps {
        current_page,
        total_pages,
        total_items,
        page_size: 20,
        kind,
        class: Classes::new(),
        on_change: Callback::noop(),
    };
    block_on(LocalServerRenderer::<Pagination>::with_props(props).render())
}

#[test]
fn pager_shows_the_window_and_summary() {
    let html = pager(5, 10, 200, ListingKind::Product);
    for page in [1, 4, 5, 6, 10] {
        assert!(html.contains(&format!("aria-label=\"Trang {page}\"")), "page {page}");
    }
    assert!(!html.contains("aria-label=\"Trang 3\""));
    assert!(!html.contains("aria-label=\"Trang 7\""));
    assert_eq!(count(&html, "•••"), 2);
    assert_eq!(count(&html, "aria-current=\"page\""), 1);
    assert!(html.contains("Hiển thị 81 - 100 trong tổng số 200 sản phẩm"));
    assert!(html.contains("Trang đầu (Hạt mầm)"));
    assert!(html.contains("Trang cuối (Hoa nở)"));
}

#[test]
fn pager_marks_the_current_page() {
    let html = pager(2, 3, 45, ListingKind::Post);
    let current = html
        .split("<button")
        .find(|button| button.contains("aria-current=\"page\""))
        .unwrap_or_default();
    assert!(current.contains("aria-label=\"Trang 2\""));
    assert!(html.contains("trong tổng số 45 bài viết"));
    assert!(html.contains("Trang đầu (Bài viết trống)"));
}

#[test]
fn pager_disables_edges_at_the_bounds() {
    let html = pager(1, 4, 80, ListingKind::Product);
    let first = html
        .split("<button")
        .find(|button| button.contains("aria-label=\"Trang đầu\""))
        .unwrap_or_default();
    assert!(first.contains("disabled"));
    let last = html
        .split("<button")
        .find(|button| button.contains("aria-label=\"Trang cuối\""))
        .unwrap_or_default();
    assert!(!last.contains("disabled"));
}

#[test]
fn pager_is_empty_without_pages() {
    let html = pager(1, 0, 0, ListingKind::Product);
    assert!(!html.contains("<nav"));
}

#[test]
fn single_page_has_no_edge_buttons() {
    let html = pager(1, 1, 7, ListingKind::Product);
    assert!(html.contains("aria-label=\"Trang 1\""));
    assert!(!html.contains("Trang đầu"));
    assert!(!html.contains("Trang cuối"));
    assert!(html.contains("Hiển thị 1 - 7 trong tổng số 7 sản phẩm"));
}

#[test]
fn badge_and_alert_use_daisy_classes() {
    let badge = block_on(
        LocalServerRenderer::<Badge>::with_props(BadgeProps {
            label: AttrValue::from("Mới"),
            variant: Some(DaisyColor::Success),
            outline: true,
            class: Classes::new(),
        })
        .render(),
    );
    assert!(badge.contains("badge-success"));
    assert!(badge.contains("badge-outline"));

    let alert = block_on(
        LocalServerRenderer::<Alert>::with_props(AlertProps {
            message: AttrValue::from("Đã lưu"),
            variant: Some(DaisyColor::Error),
            class: Classes::new(),
            on_dismiss: None,
        })
        .render(),
    );
    assert!(alert.contains("alert-error"));
    assert!(alert.contains("Đã lưu"));
}

#[test]
fn header_shows_login_or_admin_name() {
    let guest = render_routed(html! { <Header active={Route::Shop} /> });
    assert!(guest.contains("Đăng nhập"));
    assert!(guest.contains("Cửa hàng"));

    let admin = render_routed(html! { <Header active={Route::Home} admin={Some(AttrValue::from("admin"))} /> });
    assert!(admin.contains("Quản trị (admin)"));
}

#[test]
fn header_carries_search_and_categories() {
    let categories = Catalog::bundled().categories.clone();
    let html = render_routed(html! { <Header active={Route::Home} categories={categories.clone()} /> });
    assert!(html.contains("placeholder=\"Tìm kiếm hoa...\""));
    assert!(html.contains("Danh mục"));
    assert_eq!(count(&html, "category="), categories.len());

    let bare = render_routed(html! { <Header active={Route::Home} /> });
    assert!(bare.contains("Tìm kiếm hoa..."));
    assert!(!bare.contains("Danh mục"));
}

#[test]
fn search_bar_starts_closed() {
    let html = render_routed(html! { <SearchBar /> });
    assert!(html.contains("role=\"search\""));
    assert!(!html.contains("role=\"listbox\""));
    assert!(!html.contains("Xóa tìm kiếm"));
}

#[test]
fn search_results_cover_every_state() {
    let hits: Vec<_> = Catalog::bundled().products.iter().take(3).cloned().collect();
    let found = render_routed(html! {
        <SearchResults results={Fetch::Ready(hits.clone())} query="hoa" />
    });
    assert_eq!(count(&found, "search-hit"), 3);
    for product in &hits {
        assert!(found.contains(&format!("href=\"/shop/{}\"", product.id)));
        assert!(found.contains(&flora_core::format_price(product.price)));
    }
    assert!(found.contains("Xem tất cả kết quả"));
    assert!(found.contains("q=hoa"));

    let loading = render_routed(html! { <SearchResults results={Fetch::Loading} query="hoa" /> });
    assert!(loading.contains("Đang tìm kiếm..."));

    let empty = render_routed(html! { <SearchResults results={Fetch::Ready(Vec::new())} query="zzz" /> });
    assert!(empty.contains("Không tìm thấy kết quả."));
    assert!(!empty.contains("Xem tất cả kết quả"));

    let failed = render_routed(html! {
        <SearchResults results={Fetch::Failed(ApiError::Transport("offline".into()))} query="hoa" />
    });
    assert!(failed.contains("Không thể tìm kiếm lúc này."));
}

#[test]
fn category_dropdown_links_into_the_shop() {
    let categories = Catalog::bundled().categories.clone();
    let html = render_routed(html! { <CategoryDropdown categories={categories.clone()} /> });
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("category=3"));
    for category in &categories {
        assert!(html.contains(&category.name));
    }
}

#[test]
fn footer_lists_services() {
    let html = render_routed(html! { <Footer /> });
    assert!(html.contains("Hoa Cưới"));
    assert!(html.contains("Florist"));
}

#[test]
fn product_card_links_to_detail() {
    let product = &Catalog::bundled().products[0];
    let card = ProductCardProps::from(product);
    let html = render_routed(html! { <ProductCard ..card /> });
    assert!(html.contains(&format!("href=\"/shop/{}\"", product.id)));
    assert!(html.contains(&product.name));
    assert!(html.contains(&flora_core::format_price(product.price)));
}

#[test]
fn filter_bar_counts_active_filters() {
    let catalog = Catalog::bundled();
    let filters = ProductFilters::default()
        .with_category(Some(catalog.categories[0].id))
        .with_query("hồng");
    let props = FilterBarProps {
        filters,
        categories: catalog.categories.clone(),
        collections: catalog.collections.clone(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FilterBar>::with_props(props).render());
    assert!(html.contains("Đang lọc:"));
    assert!(html.contains(&catalog.categories[0].name));
    assert!(html.contains("Xóa bộ lọc"));
}

#[test]
fn sidebar_greets_the_admin() {
    let html = render_routed(html! {
        <AdminSidebar active={Route::AdminBlogs} username="admin" on_logout={Callback::noop()} />
    });
    assert!(html.contains("Xin chào, admin"));
    assert!(html.contains("Đăng xuất"));
    assert!(html.contains("href=\"/admin/accounts\""));
}
