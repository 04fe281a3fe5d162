use crate::components::{ProductCard, ProductCardProps, ProductSkeletonCard};
use crate::hooks::Fetch;
use crate::paths::image_src;
use crate::router::Route;
use flora_core::Product;
use yew::prelude::*;
use yew_router::prelude::*;

const HERO_IMAGE: &str = "https://hoaviet247.com/wp-content/uploads/2025/05/mau-trang-hoa-cam-tu-cau.webp";

/// Trust figures under the hero call to action.
const HERO_STATS: [(&str, &str); 2] = [("1.2k+", "Khách hàng hài lòng"), ("100%", "Hoa tươi")];

struct JourneyStep {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const JOURNEY: [JourneyStep; 4] = [
    JourneyStep {
        title: "Gieo Hạt Mầm",
        description: "Mọi hành trình vĩ đại đều bắt đầu từ những điều nhỏ bé. Tại Florist, chúng tôi tuyển chọn kỹ lưỡng từng hạt giống, gieo trồng trên những mảnh đất màu mỡ nhất.",
        image: "https://i.pinimg.com/736x/ed/1e/24/ed1e2446507d63e6b90643cacc107982.jpg",
    },
    JourneyStep {
        title: "Chăm Sóc & Nuôi Dưỡng",
        description: "Bằng sự kiên nhẫn và tình yêu, các nghệ nhân làm vườn của chúng tôi chăm chút từng nhành lá, từng nụ hoa với quy trình chăm sóc hữu cơ.",
        image: "https://i.pinimg.com/736x/ef/91/3b/ef913b57a9b520c881938f2253fd5073.jpg",
    },
    JourneyStep {
        title: "Nghệ Thuật Bó Hoa",
        description: "Khi những bông hoa đạt độ nở đẹp nhất, chúng được trao vào tay những nghệ nhân cắm hoa. Mỗi bó hoa là một tác phẩm nghệ thuật.",
        image: "https://i.pinimg.com/1200x/ec/88/4c/ec884cc8edf585132656c6c6793c6301.jpg",
    },
    JourneyStep {
        title: "Giao Trao Yêu Thương",
        description: "Hành trình kết thúc bằng nụ cười của người nhận. Đội ngũ giao hàng chuyên nghiệp nâng niu từng cánh hoa, đảm bảo món quà đến tay người thương vẹn nguyên cảm xúc.",
        image: "https://i.pinimg.com/1200x/e7/e5/0b/e7e50bce11e78781ec07d7dcb0126898.jpg",
    },
];

#[function_component(HeroBanner)]
fn hero_banner() -> Html {
    html! {
        <section class="hero min-h-[60vh] bg-primary/20">
            <div class="hero-content flex-col-reverse md:flex-row gap-12">
                <div class="flex-1 space-y-6 text-center md:text-left">
                    <p class="text-primary font-bold tracking-wider uppercase text-sm">{ "Chào mừng đến khu vườn của chúng tôi" }</p>
                    <h1 class="text-5xl md:text-7xl font-black tracking-tight">{ "FLORIST" }</h1>
                    <p class="text-xl md:text-3xl font-serif italic">{ "Hoa đẹp nhất khi nằm trên tay em" }</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start">
                        <Link<Route> to={Route::Shop} classes={classes!("btn", "btn-primary", "rounded-full", "px-8")}>{ "Mua ngay →" }</Link<Route>>
                        <a href="#footer" class="btn btn-outline rounded-full px-8">{ "Liên hệ" }</a>
                    </div>
                    <div class="stats bg-transparent">
                        { for HERO_STATS.iter().map(|(value, label)| html! {
                            <div class="stat px-0 pr-8">
                                <div class="stat-value text-2xl">{ *value }</div>
                                <div class="stat-desc">{ *label }</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="flex-1 max-w-lg">
                    <figure class="rounded-3xl overflow-hidden shadow-2xl rotate-3 border-8 border-base-100">
                        <img src={image_src(HERO_IMAGE)} alt="Cô gái vui vẻ trồng hoa" class="w-full object-cover" />
                    </figure>
                </div>
            </div>
        </section>
    }
}

#[function_component(OurJourney)]
fn our_journey() -> Html {
    html! {
        <section class="md:p-8 p-4" aria-labelledby="our-journey">
            <div class="text-center mb-12">
                <span class="badge badge-primary badge-outline mb-4">{ "HÀNH TRÌNH CỦA CHÚNG TÔI" }</span>
                <h2 id="our-journey" class="text-4xl font-bold">
                    { "Từ Vườn Ươm Đến " }<span class="text-pink-500">{ "Trái Tim" }</span>
                </h2>
                <p class="mt-4 opacity-70 max-w-2xl mx-auto text-lg">
                    { "Mỗi bó hoa đều trải qua một hành trình đặc biệt trước khi đến tay bạn" }
                </p>
            </div>
            <ol class="flex flex-col gap-24">
                { for JOURNEY.iter().enumerate().map(|(index, step)| {
                    let image = html! {
                        <figure class="rounded-3xl overflow-hidden shadow-2xl aspect-[4/3]">
                            <img src={step.image} alt={step.title} class="w-full h-full object-cover" />
                        </figure>
                    };
                    let text = html! {
                        <div class="flex flex-col space-y-4">
                            <span class="text-sm font-bold opacity-50 tracking-widest uppercase">{ format!("Bước {:02}", index + 1) }</span>
                            <h3 class="text-3xl font-bold">{ step.title }</h3>
                            <p class="text-lg opacity-70 max-w-md">{ step.description }</p>
                        </div>
                    };
                    // Image and text swap sides on every other step.
                    let (first, second) = if index % 2 == 1 { (text, image) } else { (image, text) };
                    html! {
                        <li class="journey-step grid grid-cols-1 lg:grid-cols-2 gap-10 items-center">
                            { first }
                            { second }
                        </li>
                    }
                }) }
            </ol>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub top_products: Fetch<Vec<Product>>,
    #[prop_or_default]
    pub on_retry: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let top = match &props.top_products {
        Fetch::Loading => html! {
            { for (0..5).map(|_| html! { <ProductSkeletonCard /> }) }
        },
        Fetch::Failed(_) => super::failed_view("Không thể tải sản phẩm nổi bật", &props.on_retry),
        Fetch::Ready(products) => html! {
            { for products.iter().map(|product| {
                let card = ProductCardProps::from(product);
                html! { <ProductCard ..card /> }
            }) }
        },
    };

    html! {
        <>
            <HeroBanner />
            <section class="md:p-8 p-4" aria-labelledby="top-products">
                <h2 id="top-products" class="text-3xl font-bold mb-6">{ "Sản phẩm bán chạy" }</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4">{ top }</div>
            </section>
            <OurJourney />
        </>
    }
}
