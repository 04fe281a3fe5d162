use crate::paths::image_src;
use crate::router::Route;
use flora_core::{Product, RelatedProduct, format_price};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub id: u64,
    pub name: AttrValue,
    pub price: i64,
    pub image_url: AttrValue,
    /// Collection badge over the image.
    #[prop_or_default]
    pub collection: Option<AttrValue>,
}

impl From<&Product> for ProductCardProps {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone().into(),
            price: product.price,
            image_url: product.image_url.clone().into(),
            collection: product.collection.as_ref().map(|c| c.name.clone().into()),
        }
    }
}

impl From<&RelatedProduct> for ProductCardProps {
    fn from(product: &RelatedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name.clone().into(),
            price: product.price,
            image_url: product.image_url.clone().into(),
            collection: None,
        }
    }
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    html! {
        <article class="card bg-base-100 shadow-sm hover:shadow-xl transition-shadow">
            <Link<Route> to={Route::ProductDetail { id: props.id }} classes={classes!("contents")}>
                <figure class="relative aspect-square overflow-hidden">
                    <img src={image_src(&props.image_url)} alt={props.name.clone()} class="w-full h-full object-cover" loading="lazy" />
                    { props.collection.as_ref().map(|name| html! {
                        <span class="badge badge-ghost absolute top-3 right-3">{ name.clone() }</span>
                    }).unwrap_or_default() }
                </figure>
                <div class="card-body p-4">
                    <h3 class="card-title text-lg line-clamp-1">{ props.name.clone() }</h3>
                    <p class="text-lg font-bold text-primary">{ format_price(props.price) }</p>
                </div>
            </Link<Route>>
        </article>
    }
}

/// Grid placeholder shown while products load.
#[function_component(ProductSkeletonCard)]
pub fn product_skeleton_card() -> Html {
    html! {
        <div class="card bg-base-100 shadow-sm" aria-hidden="true">
            <div class="skeleton aspect-square w-full"></div>
            <div class="card-body p-4 gap-3">
                <div class="skeleton h-5 w-3/4"></div>
                <div class="skeleton h-5 w-1/3"></div>
            </div>
        </div>
    }
}
