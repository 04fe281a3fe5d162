use crate::components::{Footer, Header};
use crate::pages::not_found::NotFound;
use crate::router::Route;
use crate::state::{AdminData, SessionContext, use_admin_data, use_session_provider};
use flora_core::Catalog;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod routes;

use routes::{
    AdminRoute, BlogDetailRoute, BlogRoute, HomeRoute, LoginRoute, ProductDetailRoute, ShopRoute,
};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

/// Everything below the router: session context, admin data and the route switch.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let session = use_session_provider();
    let admin_data = use_admin_data();

    let render = {
        let session = session.clone();
        Callback::from(move |route: Route| switch(&route, &session, &admin_data))
    };

    html! {
        <ContextProvider<SessionContext> context={session}>
            <Switch<Route> render={render} />
        </ContextProvider<SessionContext>>
    }
}

fn storefront(route: &Route, session: &SessionContext, page: Html) -> Html {
    html! {
        <div class="min-h-screen flex flex-col">
            <Header
                active={route.section()}
                admin={session.username().map(|name| AttrValue::from(name.to_string()))}
                categories={Catalog::bundled().categories.clone()}
            />
            <main class="flex-1">{ page }</main>
            <Footer />
        </div>
    }
}

fn switch(route: &Route, session: &SessionContext, admin_data: &UseStateHandle<AdminData>) -> Html {
    log::debug!("route: {route:?}");
    if route.requires_session() {
        return html! { <AdminRoute route={route.section()} data={admin_data.clone()} /> };
    }
    let page = match route {
        Route::Home => html! { <HomeRoute /> },
        Route::Shop => html! { <ShopRoute /> },
        Route::ProductDetail { id } => html! { <ProductDetailRoute key={*id} id={*id} /> },
        Route::Blog => html! { <BlogRoute /> },
        Route::BlogDetail { id } => html! { <BlogDetailRoute key={*id} id={*id} /> },
        Route::Login => return html! { <LoginRoute /> },
        _ => html! { <NotFound /> },
    };
    storefront(route, session, page)
}
