use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const MENU: [(Route, &str, &str); 4] = [
    (Route::AdminDashboard, "📊", "Dashboard"),
    (Route::AdminProducts, "🛍️", "Sản phẩm"),
    (Route::AdminBlogs, "📝", "Blog"),
    (Route::AdminAccounts, "👥", "Tài khoản"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Route,
    pub username: AttrValue,
    pub on_logout: Callback<()>,
}

#[function_component(AdminSidebar)]
pub fn admin_sidebar(p: &Props) -> Html {
    let collapsed = use_state(|| false);
    let toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| collapsed.set(!*collapsed))
    };
    let logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let width = if *collapsed { "w-20" } else { "w-64" };

    html! {
        <aside class={classes!("bg-base-100", "border-r", "flex", "flex-col", width)}>
            <button type="button" class="p-4 border-b flex items-center gap-3 text-left" onclick={toggle} aria-expanded={(!*collapsed).to_string()}>
                <span class="text-3xl">{ "🌸" }</span>
                if !*collapsed {
                    <span>
                        <span class="block font-bold text-primary text-lg">{ "Florist" }</span>
                        <span class="block text-xs text-base-content/60">{ "Quản lý cửa hàng" }</span>
                    </span>
                }
            </button>
            <nav class="flex-1 p-4" aria-label="Quản trị">
                <ul class="menu gap-1 p-0">
                    { for MENU.iter().map(|(route, icon, label)| {
                        let active = *route == p.active;
                        html! {
                            <li>
                                <Link<Route> to={route.clone()} classes={classes!(active.then_some("menu-active"))}>
                                    <span aria-hidden="true">{ *icon }</span>
                                    if !*collapsed {
                                        <span aria-current={active.then_some("page")}>{ *label }</span>
                                    }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
            <div class="p-4 border-t flex flex-col gap-2">
                if !*collapsed {
                    <p class="text-sm text-base-content/60 px-2">{ format!("Xin chào, {}", p.username) }</p>
                }
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-ghost", "justify-start")}>
                    { "🏠" }
                    if !*collapsed {
                        <span>{ "Về trang chủ" }</span>
                    }
                </Link<Route>>
                <button type="button" class="btn btn-ghost justify-start text-error" onclick={logout}>
                    { "🚪" }
                    if !*collapsed {
                        <span>{ "Đăng xuất" }</span>
                    }
                </button>
            </div>
        </aside>
    }
}
