use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const SERVICES: [&str; 5] = [
    "Hoa Cưới",
    "Hoa Sinh Nhật",
    "Hoa Khai Trương",
    "Hoa Chia Buồn",
    "Trang Trí Sự Kiện",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="footer" class="footer bg-neutral text-neutral-content p-10 grid-cols-1 md:grid-cols-4" role="contentinfo">
            <aside>
                <h2 class="text-2xl font-bold">{ "🌸 Florist" }</h2>
                <p class="max-w-xs opacity-70">
                    { "Mang vẻ đẹp thiên nhiên đến từng ngôi nhà. Chúng tôi cam kết cung cấp những bó hoa tươi đẹp nhất với dịch vụ tận tâm." }
                </p>
            </aside>
            <nav>
                <h6 class="footer-title">{ "Điều Hướng" }</h6>
                <Link<Route> to={Route::Home} classes={classes!("link link-hover")}>{ "Trang Chủ" }</Link<Route>>
                <Link<Route> to={Route::Shop} classes={classes!("link link-hover")}>{ "Sản Phẩm" }</Link<Route>>
                <Link<Route> to={Route::Blog} classes={classes!("link link-hover")}>{ "Blog" }</Link<Route>>
            </nav>
            <nav>
                <h6 class="footer-title">{ "Dịch Vụ" }</h6>
                { for SERVICES.iter().map(|service| html! { <span>{ *service }</span> }) }
            </nav>
            <nav>
                <h6 class="footer-title">{ "Liên Hệ" }</h6>
                <span>{ "123 Nguyễn Văn Linh, Quận 7, TP.HCM" }</span>
                <a class="link link-hover" href="tel:0123456789">{ "0123 456 789" }</a>
                <span>{ "8:00 - 21:00 hằng ngày" }</span>
            </nav>
        </footer>
    }
}
