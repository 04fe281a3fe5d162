use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shown for any path the router does not know.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="min-h-[60vh] flex flex-col items-center justify-center text-center px-6 gap-4" aria-live="assertive">
            <div class="text-7xl" aria-hidden="true">{ "🥀" }</div>
            <h1 class="text-4xl font-bold">{ "404" }</h1>
            <p class="text-lg text-base-content/70">{ "Không tìm thấy trang bạn yêu cầu." }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>{ "Quay lại trang chủ" }</Link<Route>>
        </section>
    }
}
