use super::{CategoryDropdown, SearchBar};
use crate::router::Route;
use flora_core::Category;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_LINKS: [(Route, &str); 3] = [
    (Route::Home, "Trang chủ"),
    (Route::Shop, "Cửa hàng"),
    (Route::Blog, "Blog"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Section to highlight, see [`Route::section`].
    pub active: Route,
    /// Logged-in admin, if any.
    #[prop_or_default]
    pub admin: Option<AttrValue>,
    /// Entries of the category dropdown; hidden when empty.
    #[prop_or_default]
    pub categories: Vec<Category>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header class="navbar sticky top-0 z-40 bg-base-100/90 backdrop-blur shadow-sm px-4 md:px-12" role="banner">
            <div class="navbar-start">
                <Link<Route> to={Route::Home} classes={classes!("btn btn-ghost text-xl font-bold")}>
                    { "🌸 Florist" }
                </Link<Route>>
                if !p.categories.is_empty() {
                    <div class="hidden lg:block">
                        <CategoryDropdown categories={p.categories.clone()} />
                    </div>
                }
            </div>
            <nav class="navbar-center hidden md:flex gap-2" aria-label="Điều hướng chính">
                { for NAV_LINKS.iter().map(|(route, label)| {
                    let active = *route == p.active;
                    let mut classes = classes!("btn", "btn-ghost", "btn-sm");
                    if active {
                        classes.push("text-primary");
                    }
                    html! {
                        <Link<Route> to={route.clone()} classes={classes}>
                            <span aria-current={active.then_some("page")}>{ *label }</span>
                        </Link<Route>>
                    }
                }) }
            </nav>
            <div class="navbar-end gap-2">
                <div class="hidden md:block w-64 lg:w-80">
                    <SearchBar />
                </div>
                { match &p.admin {
                    Some(name) => html! {
                        <Link<Route> to={Route::AdminDashboard} classes={classes!("btn btn-outline btn-sm")}>
                            { format!("Quản trị ({name})") }
                        </Link<Route>>
                    },
                    None => html! {
                        <Link<Route> to={Route::Login} classes={classes!("btn btn-outline btn-sm")}>{ "Đăng nhập" }</Link<Route>>
                    },
                } }
            </div>
        </header>
    }
}
