mod support;

use flora_core::{AdminStore, Catalog, PageSize};
use flora_web::api::ApiError;
use flora_web::app::AppShell;
use flora_web::hooks::Fetch;
use flora_web::pages::admin::{AdminAccountsPage, AdminDashboardPage, AdminProductsPage};
use flora_web::pages::blog::BlogPage;
use flora_web::pages::blog_detail::BlogDetailPage;
use flora_web::pages::home::HomePage;
use flora_web::pages::login::LoginPage;
use flora_web::pages::not_found::NotFound;
use flora_web::pages::product_detail::ProductDetailPage;
use flora_web::pages::shop::ShopPage;
use flora_web::state::AdminData;
use support::{count, render_routed};
use yew::{AttrValue, Callback, html};

const PRODUCT_TITLE: &str = "class=\"card-title text-lg line-clamp-1\"";

#[test]
fn shop_pages_the_bundled_catalog() {
    let catalog = Catalog::bundled();
    let html = render_routed(html! {
        <ShopPage
            products={Fetch::Ready(catalog.products.clone())}
            categories={catalog.categories.clone()}
            collections={catalog.collections.clone()}
        />
    });
    assert_eq!(count(&html, PRODUCT_TITLE), 20);
    assert!(html.contains("aria-label=\"Trang 2\""));
    assert!(html.contains("Hiển thị 1 - 20 trong tổng số 24 sản phẩm"));
}

#[test]
fn shop_respects_a_smaller_page_size() {
    let catalog = Catalog::bundled();
    let page_size = PageSize::new(3).unwrap();
    let html = render_routed(html! {
        <ShopPage products={Fetch::Ready(catalog.products.clone())} page_size={page_size} />
    });
    assert_eq!(count(&html, PRODUCT_TITLE), 3);
    assert!(html.contains("aria-label=\"Trang 8\""));
    assert!(!html.contains("aria-label=\"Trang 4\""));
    assert_eq!(count(&html, "•••"), 1);
}

#[test]
fn shop_states_cover_empty_loading_and_failure() {
    let empty = render_routed(html! { <ShopPage products={Fetch::Ready(Vec::new())} /> });
    assert!(empty.contains("Không có sản phẩm nào."));
    assert!(!empty.contains("Hiển thị"));

    let loading = render_routed(html! { <ShopPage products={Fetch::Loading} /> });
    assert_eq!(count(&loading, "skeleton aspect-square"), 8);

    let failed = render_routed(html! {
        <ShopPage products={Fetch::Failed(ApiError::Transport("offline".into()))} />
    });
    assert!(failed.contains("Thử lại"));
}

#[test]
fn home_lists_top_products() {
    let top = Catalog::bundled().top_products(10);
    let html = render_routed(html! { <HomePage top_products={Fetch::Ready(top.clone())} /> });
    assert_eq!(count(&html, PRODUCT_TITLE), top.len());
    assert!(html.contains("Sản phẩm bán chạy"));
}

#[test]
fn home_frames_products_with_hero_and_journey() {
    let html = render_routed(html! { <HomePage top_products={Fetch::Loading} /> });
    assert!(html.contains("FLORIST"));
    assert!(html.contains("Hoa đẹp nhất khi nằm trên tay em"));
    assert!(html.contains("href=\"/shop\""));
    assert_eq!(count(&html, "journey-step"), 4);
    for step in ["Bước 01", "Bước 04", "Gieo Hạt Mầm", "Giao Trao Yêu Thương"] {
        assert!(html.contains(step), "{step}");
    }
}

#[test]
fn blog_lists_published_posts() {
    let blogs = Catalog::bundled().blogs.clone();
    let html = render_routed(html! { <BlogPage blogs={Fetch::Ready(blogs.clone())} /> });
    assert_eq!(count(&html, "Đọc tiếp →"), blogs.len());
    assert!(html.contains(&format!("trong tổng số {} bài viết", blogs.len())));
    assert!(html.contains("Chia sẻ kiến thức và câu chuyện về hoa"));

    let none = render_routed(html! { <BlogPage blogs={Fetch::Ready(Vec::new())} /> });
    assert!(none.contains("Chưa có bài viết nào"));
}

#[test]
fn product_detail_shows_features_and_related() {
    let catalog = Catalog::bundled();
    let detail = catalog.product_detail(3).unwrap();
    let related = catalog.related_products(3, 5);
    let html = render_routed(html! {
        <ProductDetailPage detail={Fetch::Ready(detail.clone())} related={related.clone()} />
    });
    assert!(html.contains(&detail.product.name));
    assert!(html.contains("Thêm vào giỏ"));
    assert!(html.contains("Sản phẩm liên quan"));
    assert_eq!(count(&html, PRODUCT_TITLE), related.len());

    let missing = render_routed(html! {
        <ProductDetailPage detail={Fetch::Failed(ApiError::ProductNotFound(404))} />
    });
    assert!(missing.contains("Không tìm thấy sản phẩm #404"));
    assert!(missing.contains("Quay lại cửa hàng"));
}

#[test]
fn blog_detail_shows_tags_and_related() {
    let catalog = Catalog::bundled();
    let detail = catalog.blog_detail(1).unwrap();
    let related = catalog.related_blogs(1, 3);
    let html = render_routed(html! {
        <BlogDetailPage detail={Fetch::Ready(detail.clone())} related={related} />
    });
    assert!(html.contains(&detail.blog.title));
    assert!(html.contains("#florist"));
    assert!(html.contains("Bài viết liên quan"));
    assert_eq!(count(&html, "Đọc tiếp →"), 3);
}

#[test]
fn login_form_reports_errors() {
    let html = render_routed(html! {
        <LoginPage on_submit={Callback::noop()} error={Some(AttrValue::from("Tên đăng nhập hoặc mật khẩu không chính xác"))} />
    });
    assert!(html.contains("Quản trị viên Florist"));
    assert!(html.contains("Tên đăng nhập hoặc mật khẩu không chính xác"));
    assert!(html.contains("type=\"password\""));

    let busy = render_routed(html! { <LoginPage on_submit={Callback::noop()} submitting={true} /> });
    assert!(busy.contains("Đang kiểm tra..."));
}

#[test]
fn not_found_links_home() {
    let html = render_routed(html! { <NotFound /> });
    assert!(html.contains("404"));
    assert!(html.contains("href=\"/\""));
}

#[test]
fn admin_products_table_pages_rows() {
    let data = AdminData::default();
    let html = render_routed(html! {
        <AdminProductsPage store={data.products.clone()} categories={data.categories.clone()} />
    });
    assert_eq!(count(&html, "<tr"), 21);
    assert!(html.contains("Hiển thị 1 - 20 trong tổng số 24 sản phẩm"));
    assert!(html.contains("Thêm sản phẩm"));
}

#[test]
fn admin_accounts_flag_the_current_user() {
    let data = AdminData::default();
    let html = render_routed(html! {
        <AdminAccountsPage store={data.accounts.clone()} current_username="admin" />
    });
    assert_eq!(count(&html, "Đang đăng nhập"), 1);
    assert!(html.contains("manager"));
    assert!(html.contains("trong tổng số 2 tài khoản"));

    let empty = render_routed(html! {
        <AdminAccountsPage store={AdminStore::default()} current_username="admin" />
    });
    assert!(empty.contains("Không tìm thấy tài khoản nào"));
}

#[test]
fn dashboard_shows_counts_and_shortcuts() {
    let stats = AdminData::default().stats();
    let html = render_routed(html! { <AdminDashboardPage stats={stats} /> });
    assert!(html.contains("Tổng sản phẩm"));
    assert!(html.contains("Thao tác nhanh"));
    assert!(html.contains("Chào mừng đến với Florist Admin!"));
    assert!(html.contains("href=\"/admin/products\""));
}

#[test]
fn app_shell_starts_on_the_home_page() {
    let html = render_routed(html! { <AppShell /> });
    assert!(html.contains("🌸 Florist"));
    assert!(html.contains("Đăng nhập"));
    assert!(html.contains("Sản phẩm bán chạy"));
}
