//! Route containers: fetch through the mock API, then hand plain data to
//! the presentational pages.
use crate::api::{ApiError, MockApi};
use crate::hooks::use_api;
use crate::pages::admin::{
    AdminAccountsPage, AdminBlogsPage, AdminDashboardPage, AdminLayout, AdminProductsPage,
};
use crate::pages::blog::BlogPage;
use crate::pages::blog_detail::BlogDetailPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::product_detail::ProductDetailPage;
use crate::pages::shop::ShopPage;
use crate::router::{Route, ShopQuery};
use crate::state::{AdminData, use_session};
use flora_core::{Account, AdminStore, Blog, Category, Collection, Credentials, Product};
use yew::prelude::*;
use yew_router::prelude::*;

/// Pair each category with its first product.
#[must_use]
pub fn featured_by_category(products: &[Product], categories: &[Category]) -> Vec<(Category, Product)> {
    categories
        .iter()
        .filter_map(|category| {
            products
                .iter()
                .find(|product| product.category.as_ref().is_some_and(|c| c.id == category.id))
                .map(|product| (category.clone(), product.clone()))
        })
        .collect()
}

#[function_component(HomeRoute)]
pub fn home_route() -> Html {
    let api = MockApi::default();
    let (top_products, retry) = use_api((), move |()| async move { api.top_products().await });
    html! { <HomePage top_products={top_products} on_retry={retry} /> }
}

type ShopData = (Vec<Product>, Vec<Category>, Vec<Collection>);

async fn load_shop(api: MockApi) -> Result<ShopData, ApiError> {
    let products = api.all_products().await?;
    let categories = api.categories().await?;
    let collections = api.collections().await?;
    Ok((products, categories, collections))
}

#[function_component(ShopRoute)]
pub fn shop_route() -> Html {
    let api = MockApi::default();
    let query = use_location()
        .and_then(|location| location.query::<ShopQuery>().ok())
        .unwrap_or_default();
    let (data, retry) = use_api((), move |()| load_shop(api));
    let (categories, collections, featured) = data
        .ready()
        .map(|(products, categories, collections)| {
            (
                categories.clone(),
                collections.clone(),
                featured_by_category(products, categories),
            )
        })
        .unwrap_or_default();
    html! {
        <ShopPage
            key={format!("{query:?}")}
            initial_filters={query.filters(api.catalog())}
            products={data.map(|(products, _, _)| products)}
            categories={categories}
            collections={collections}
            featured={featured}
            page_size={api.config().page_size}
            on_retry={retry}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailRouteProps {
    pub id: u64,
}

#[function_component(ProductDetailRoute)]
pub fn product_detail_route(props: &DetailRouteProps) -> Html {
    let api = MockApi::default();
    let (data, _) = use_api(props.id, move |id| async move {
        let detail = api.product(id).await?;
        let related = api.related_products(id).await?;
        Ok((detail, related))
    });
    let related = data.ready().map(|(_, related)| related.clone()).unwrap_or_default();
    html! { <ProductDetailPage detail={data.map(|(detail, _)| detail)} related={related} /> }
}

#[function_component(BlogRoute)]
pub fn blog_route() -> Html {
    let api = MockApi::default();
    let (blogs, retry) = use_api((), move |()| async move { api.all_blogs().await });
    html! { <BlogPage blogs={blogs} page_size={api.config().page_size} on_retry={retry} /> }
}

#[function_component(BlogDetailRoute)]
pub fn blog_detail_route(props: &DetailRouteProps) -> Html {
    let api = MockApi::default();
    let (data, _) = use_api(props.id, move |id| async move {
        let detail = api.blog(id).await?;
        let related = api.related_blogs(id).await?;
        Ok((detail, related))
    });
    let related = data.ready().map(|(_, related)| related.clone()).unwrap_or_default();
    html! { <BlogDetailPage detail={data.map(|(detail, _)| detail)} related={related} /> }
}

#[function_component(LoginRoute)]
pub fn login_route() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let error = use_state(|| None::<AttrValue>);
    let submitting = use_state(|| false);

    let on_submit = {
        let (error, submitting) = (error.clone(), submitting.clone());
        let login = session.login.clone();
        Callback::from(move |credentials: Credentials| {
            let (error, submitting, login) = (error.clone(), submitting.clone(), login.clone());
            let navigator = navigator.clone();
            submitting.set(true);
            error.set(None);
            yew::platform::spawn_local(async move {
                match MockApi::default().login(&credentials).await {
                    Ok(admin) => {
                        login.emit(admin);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::AdminDashboard);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string().into())),
                }
                submitting.set(false);
            });
        })
    };

    if session.session.is_some() {
        return html! { <Redirect<Route> to={Route::AdminDashboard} /> };
    }
    html! { <LoginPage on_submit={on_submit} error={(*error).clone()} submitting={*submitting} /> }
}

#[derive(Properties, PartialEq)]
pub struct AdminRouteProps {
    pub route: Route,
    pub data: UseStateHandle<AdminData>,
}

const fn admin_title(route: &Route) -> &'static str {
    match route {
        Route::AdminProducts => "Quản lý sản phẩm",
        Route::AdminBlogs => "Quản lý Blog",
        Route::AdminAccounts => "Quản lý tài khoản",
        _ => "Dashboard",
    }
}

/// Admin screens behind the session check. Edits go straight into `data`.
#[function_component(AdminRoute)]
pub fn admin_route(props: &AdminRouteProps) -> Html {
    let session = use_session();
    let Some(username) = session.username().map(str::to_string) else {
        log::debug!("no admin session, redirecting to login");
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let page_size = MockApi::default().config().page_size;
    let data = &props.data;
    let content = match props.route {
        Route::AdminProducts => {
            let handle = data.clone();
            let on_change = Callback::from(move |store: AdminStore<Product>| {
                let mut next = (*handle).clone();
                next.products = store;
                handle.set(next);
            });
            html! {
                <AdminProductsPage
                    store={data.products.clone()}
                    categories={data.categories.clone()}
                    page_size={page_size}
                    on_change={on_change}
                />
            }
        }
        Route::AdminBlogs => {
            let handle = data.clone();
            let on_change = Callback::from(move |store: AdminStore<Blog>| {
                let mut next = (*handle).clone();
                next.blogs = store;
                handle.set(next);
            });
            html! {
                <AdminBlogsPage
                    store={data.blogs.clone()}
                    author={username.clone()}
                    page_size={page_size}
                    on_change={on_change}
                />
            }
        }
        Route::AdminAccounts => {
            let handle = data.clone();
            let on_change = Callback::from(move |store: AdminStore<Account>| {
                let mut next = (*handle).clone();
                next.accounts = store;
                handle.set(next);
            });
            html! {
                <AdminAccountsPage
                    store={data.accounts.clone()}
                    current_username={username.clone()}
                    page_size={page_size}
                    on_change={on_change}
                />
            }
        }
        Route::AdminDashboard => html! { <AdminDashboardPage stats={data.stats()} /> },
        _ => return html! { <Redirect<Route> to={Route::AdminDashboard} /> },
    };

    html! {
        <AdminLayout
            active={props.route.clone()}
            username={username}
            title={admin_title(&props.route)}
            on_logout={session.logout.clone()}
        >
            { content }
        </AdminLayout>
    }
}
