use crate::components::daisy_ui::{Alert, Badge, DaisyColor, Loading};
use crate::components::{ProductCard, ProductCardProps};
use crate::hooks::Fetch;
use crate::paths::image_src;
use crate::router::Route;
use flora_core::{ProductDetail, RelatedProduct, all_product_images, format_price};
use yew::prelude::*;
use yew_router::prelude::*;

const TRUST_BADGES: [(&str, &str); 3] = [
    ("🚚", "Giao hàng nhanh"),
    ("🔄", "Đổi trả 24h"),
    ("🌿", "Hoa tươi 100%"),
];

#[derive(Properties, PartialEq)]
pub struct ProductDetailPageProps {
    pub detail: Fetch<ProductDetail>,
    #[prop_or_default]
    pub related: Vec<RelatedProduct>,
}

#[function_component(ProductDetailPage)]
pub fn product_detail_page(props: &ProductDetailPageProps) -> Html {
    let selected_image = use_state(|| 0_usize);
    let quantity = use_state(|| 1_u32);
    let notice = use_state(|| None::<AttrValue>);

    let title = props
        .detail
        .ready()
        .map_or_else(|| "Chi tiết sản phẩm".to_string(), |d| d.product.name.clone());
    let breadcrumb = html! {
        <nav class="breadcrumbs text-sm mb-6" aria-label="Breadcrumb">
            <ul>
                <li><Link<Route> to={Route::Home}>{ "Trang chủ" }</Link<Route>></li>
                <li><Link<Route> to={Route::Shop}>{ "Cửa hàng" }</Link<Route>></li>
                <li aria-current="page">{ title }</li>
            </ul>
        </nav>
    };

    let content = match &props.detail {
        Fetch::Loading => html! { <Loading /> },
        Fetch::Failed(err) => html! {
            <div class="text-center py-16">
                <div class="text-6xl mb-4">{ "🌸" }</div>
                <p class="text-lg mb-6">{ err.to_string() }</p>
                <Link<Route> to={Route::Shop} classes={classes!("btn", "btn-primary")}>{ "Quay lại cửa hàng" }</Link<Route>>
            </div>
        },
        Fetch::Ready(detail) => {
            let product = &detail.product;
            let images = all_product_images(detail);
            let current = (*selected_image).min(images.len().saturating_sub(1));
            let main_image = images.get(current).cloned().unwrap_or_default();

            let change_quantity = |delta: i32| {
                let quantity = quantity.clone();
                Callback::from(move |_: MouseEvent| {
                    let next = i64::from(*quantity) + i64::from(delta);
                    quantity.set(u32::try_from(next.max(1)).unwrap_or(1));
                })
            };
            let add_to_cart = {
                let notice = notice.clone();
                let quantity = *quantity;
                let name = product.name.clone();
                Callback::from(move |_: MouseEvent| {
                    log::info!("add to cart: {name} x{quantity}");
                    notice.set(Some(format!("Đã thêm {quantity} {name} vào giỏ hàng!").into()));
                })
            };
            let dismiss = {
                let notice = notice.clone();
                Callback::from(move |()| notice.set(None))
            };

            html! {
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
                    <section aria-label="Hình ảnh sản phẩm">
                        <figure class="relative aspect-square rounded-2xl overflow-hidden bg-base-200">
                            <img src={image_src(&main_image)} alt={product.name.clone()} class="w-full h-full object-cover" />
                            { product.collection.as_ref().map(|c| html! {
                                <span class="badge badge-secondary absolute top-4 left-4">{ c.name.clone() }</span>
                            }).unwrap_or_default() }
                        </figure>
                        if images.len() > 1 {
                            <div class="flex gap-2 mt-4 overflow-x-auto">
                                { for images.iter().enumerate().map(|(index, url)| {
                                    let selected_image = selected_image.clone();
                                    let mut class = classes!("w-20", "h-20", "rounded-lg", "overflow-hidden", "border-2");
                                    class.push(if index == current { "border-primary" } else { "border-transparent" });
                                    html! {
                                        <button type="button" class={class} onclick={move |_| selected_image.set(index)}
                                            aria-label={format!("Ảnh {}", index + 1)} aria-pressed={(index == current).to_string()}>
                                            <img src={image_src(url)} alt={format!("{} - {}", product.name, index + 1)} class="w-full h-full object-cover" />
                                        </button>
                                    }
                                }) }
                            </div>
                        }
                    </section>
                    <section class="flex flex-col gap-5">
                        <div class="flex flex-wrap gap-2">
                            { product.category.as_ref().map(|c| html! { <Badge label={c.name.clone()} variant={DaisyColor::Primary} /> }).unwrap_or_default() }
                            { product.product_code.as_ref().map(|code| html! { <Badge label={format!("Mã: {code}")} outline={true} /> }).unwrap_or_default() }
                        </div>
                        <h1 class="text-3xl md:text-4xl font-bold">{ product.name.clone() }</h1>
                        <p class="text-3xl font-bold text-primary">{ format_price(product.price) }</p>
                        { product.description.as_ref().map(|text| html! { <p class="text-lg leading-relaxed">{ text.clone() }</p> }).unwrap_or_default() }
                        if !detail.features.is_empty() {
                            <div>
                                <h3 class="font-semibold mb-3">{ "Đặc điểm nổi bật" }</h3>
                                <ul class="list-disc list-inside space-y-1">
                                    { for detail.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
                                </ul>
                            </div>
                        }
                        <div class="flex items-center gap-4">
                            <span class="font-medium">{ "Số lượng:" }</span>
                            <div class="join">
                                <button type="button" class="btn join-item" disabled={*quantity <= 1} onclick={change_quantity(-1)} aria-label="Giảm">{ "−" }</button>
                                <span class="btn join-item no-animation" aria-live="polite">{ *quantity }</span>
                                <button type="button" class="btn join-item" onclick={change_quantity(1)} aria-label="Tăng">{ "+" }</button>
                            </div>
                        </div>
                        <div class="flex gap-3">
                            <button type="button" class="btn btn-primary flex-1" onclick={add_to_cart}>{ "🛒 Thêm vào giỏ" }</button>
                            <button type="button" class="btn btn-outline btn-primary flex-1">{ "Mua ngay" }</button>
                        </div>
                        { (*notice).clone().map(|message| html! {
                            <Alert message={message} variant={DaisyColor::Success} on_dismiss={dismiss.clone()} />
                        }).unwrap_or_default() }
                        <ul class="grid grid-cols-3 gap-3 border-t pt-5">
                            { for TRUST_BADGES.iter().map(|(icon, label)| html! {
                                <li class="flex items-center gap-2 text-sm"><span aria-hidden="true">{ *icon }</span>{ *label }</li>
                            }) }
                        </ul>
                    </section>
                </div>
            }
        }
    };

    html! {
        <div class="py-10 md:px-24 px-6">
            { breadcrumb }
            { content }
            if props.detail.ready().is_some() && !props.related.is_empty() {
                <section class="mt-16" aria-labelledby="related-products">
                    <div class="flex justify-between items-end mb-6">
                        <h2 id="related-products" class="text-2xl md:text-3xl font-bold">{ "Sản phẩm liên quan" }</h2>
                        <Link<Route> to={Route::Shop} classes={classes!("link", "link-primary")}>{ "Xem tất cả →" }</Link<Route>>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4">
                        { for props.related.iter().map(|item| {
                            let card = ProductCardProps::from(item);
                            html! { <ProductCard ..card /> }
                        }) }
                    </div>
                </section>
            }
        </div>
    }
}
