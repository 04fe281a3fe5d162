use crate::components::{
    FilterBar, ListingKind, Pagination, ProductCard, ProductCardProps, ProductSkeletonCard,
};
use crate::hooks::{Fetch, use_pagination};
use flora_core::{Category, Collection, PageSize, Product, ProductFilters};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShopPageProps {
    pub products: Fetch<Vec<Product>>,
    #[prop_or_default]
    pub categories: Vec<Category>,
    #[prop_or_default]
    pub collections: Vec<Collection>,
    /// One highlighted product per category, shown above the filters.
    #[prop_or_default]
    pub featured: Vec<(Category, Product)>,
    #[prop_or_default]
    pub page_size: PageSize,
    #[prop_or_default]
    pub initial_filters: ProductFilters,
    #[prop_or_default]
    pub on_retry: Callback<()>,
}

#[function_component(ShopPage)]
pub fn shop_page(props: &ShopPageProps) -> Html {
    let filters = {
        let initial = props.initial_filters.clone();
        use_state(move || initial)
    };
    let all: &[Product] = props.products.ready().map(Vec::as_slice).unwrap_or_default();
    let filtered = filters.apply(all);
    let page = use_pagination(&filtered, props.page_size);

    let on_filters = {
        let filters = filters.clone();
        Callback::from(move |next: ProductFilters| filters.set(next))
    };

    let body = match &props.products {
        Fetch::Loading => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for (0..8).map(|_| html! { <ProductSkeletonCard /> }) }
            </div>
        },
        Fetch::Failed(_) => super::failed_view(
            "Không thể tải sản phẩm. Vui lòng thử lại sau.",
            &props.on_retry,
        ),
        Fetch::Ready(_) if page.total_items == 0 => super::empty_view("Không có sản phẩm nào."),
        Fetch::Ready(_) => html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for page.items.iter().map(|product| {
                        let card = ProductCardProps::from(product);
                        html! { <ProductCard ..card /> }
                    }) }
                </div>
                <Pagination
                    class={classes!("mt-8")}
                    current_page={page.current_page}
                    total_pages={page.total_pages}
                    total_items={page.total_items}
                    page_size={page.page_size.get()}
                    kind={ListingKind::Product}
                    on_change={page.set_page.clone()}
                />
            </>
        },
    };

    html! {
        <div class="py-12 md:px-24 px-6 flex flex-col gap-6">
            if !props.featured.is_empty() {
                <section aria-labelledby="top-by-category">
                    <h2 id="top-by-category" class="text-2xl font-bold mb-4">{ "Nổi bật theo danh mục" }</h2>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        { for props.featured.iter().take(4).map(|(category, product)| {
                            let mut card = ProductCardProps::from(product);
                            card.collection = Some(category.name.clone().into());
                            html! { <ProductCard ..card /> }
                        }) }
                    </div>
                </section>
            }
            <FilterBar
                filters={(*filters).clone()}
                categories={props.categories.clone()}
                collections={props.collections.clone()}
                on_change={on_filters}
            />
            <h2 class="text-2xl font-bold">{ "Sản phẩm" }</h2>
            { body }
        </div>
    }
}
