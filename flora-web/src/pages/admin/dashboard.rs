use crate::components::daisy_ui::{DaisyColor, Stat, StatItem};
use crate::router::Route;
use flora_core::{DashboardStats, format_price};
use yew::prelude::*;
use yew_router::prelude::*;

const QUICK_ACTIONS: [(Route, &str, &str, &str); 4] = [
    (Route::AdminProducts, "🛍️", "Thêm sản phẩm", "Tạo sản phẩm mới"),
    (Route::AdminBlogs, "📝", "Viết blog", "Tạo bài viết mới"),
    (Route::AdminAccounts, "👥", "Quản lý admin", "Thêm tài khoản"),
    (Route::Shop, "🏪", "Xem cửa hàng", "Mở trang shop"),
];

#[derive(Properties, PartialEq)]
pub struct AdminDashboardPageProps {
    pub stats: DashboardStats,
}

/// Stat cards for the headline counts.
#[must_use]
pub fn stat_items(stats: &DashboardStats) -> Vec<StatItem> {
    let average = stats
        .average_price
        .map_or_else(|| "Chưa có sản phẩm".to_string(), |price| format!("Giá trung bình {}", format_price(price)));
    vec![
        StatItem::new("Tổng sản phẩm", stats.products.to_string())
            .description(average)
            .variant(DaisyColor::Primary),
        StatItem::new("Bài viết blog", stats.blogs.to_string()).variant(DaisyColor::Secondary),
        StatItem::new("Danh mục", stats.categories.to_string()).description("không đổi"),
        StatItem::new("Tài khoản admin", stats.accounts.to_string()).variant(DaisyColor::Accent),
    ]
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page(props: &AdminDashboardPageProps) -> Html {
    let stats = &props.stats;
    let widest = stats.price_buckets.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

    html! {
        <>
            <Stat items={stat_items(stats)} class={classes!("shadow-sm", "w-full", "stats-vertical", "lg:stats-horizontal")} />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <section class="card bg-base-100 shadow-sm" aria-labelledby="price-buckets">
                    <div class="card-body">
                        <h2 id="price-buckets" class="card-title">{ "Phân bố giá sản phẩm" }</h2>
                        <ul class="flex flex-col gap-3">
                            { for stats.price_buckets.iter().map(|(range, count)| html! {
                                <li>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span>{ range.label() }</span>
                                        <span class="font-semibold">{ *count }</span>
                                    </div>
                                    <progress class="progress progress-primary w-full" value={count.to_string()} max={widest.to_string()} />
                                </li>
                            }) }
                        </ul>
                    </div>
                </section>
                <section class="card bg-base-100 shadow-sm" aria-labelledby="quick-actions">
                    <div class="card-body">
                        <h2 id="quick-actions" class="card-title">{ "Thao tác nhanh" }</h2>
                        <div class="grid grid-cols-2 gap-4">
                            { for QUICK_ACTIONS.iter().map(|(route, icon, title, hint)| html! {
                                <Link<Route> to={route.clone()} classes={classes!("p-4", "rounded-xl", "border", "hover:border-primary", "hover:bg-base-200", "transition")}>
                                    <span class="text-2xl block mb-2" aria-hidden="true">{ *icon }</span>
                                    <span class="font-semibold block">{ *title }</span>
                                    <span class="text-sm text-base-content/60">{ *hint }</span>
                                </Link<Route>>
                            }) }
                        </div>
                    </div>
                </section>
            </div>
            <section class="rounded-2xl bg-gradient-to-r from-primary to-secondary text-primary-content p-8 flex flex-wrap justify-between items-center gap-4">
                <div>
                    <h2 class="text-2xl font-bold mb-2">{ "Chào mừng đến với Florist Admin!" }</h2>
                    <p class="opacity-90">{ "Quản lý cửa hàng hoa của bạn một cách dễ dàng và hiệu quả." }</p>
                </div>
                <Link<Route> to={Route::AdminProducts} classes={classes!("btn", "bg-base-100", "text-primary", "border-none")}>{ "Xem sản phẩm" }</Link<Route>>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flora_core::{AdminStore, Catalog};

    #[test]
    fn stat_cards_follow_the_catalog() {
        let catalog = Catalog::bundled();
        let stats = DashboardStats::from_catalog(catalog, &AdminStore::new(catalog.accounts.clone()));
        let items = stat_items(&stats);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].value.as_str(), "24");
        assert_eq!(items[3].value.as_str(), "2");
        assert!(items[0].description.as_ref().is_some_and(|d| d.starts_with("Giá trung bình")));
    }

    #[test]
    fn empty_stores_have_no_average() {
        let stats = DashboardStats::from_parts(&[], 0, 0, 1);
        assert_eq!(
            stat_items(&stats)[0].description.as_ref().map(AttrValue::as_str),
            Some("Chưa có sản phẩm")
        );
    }
}
