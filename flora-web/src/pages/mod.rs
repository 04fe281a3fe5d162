pub mod admin;
pub mod blog;
pub mod blog_detail;
pub mod home;
pub mod login;
pub mod not_found;
pub mod product_detail;
pub mod shop;

use yew::prelude::*;

/// Error panel with a retry button, shared by every page that loads data.
pub(crate) fn failed_view(message: &str, on_retry: &Callback<()>) -> Html {
    let retry = {
        let cb = on_retry.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="text-center py-16" role="alert">
            <p class="text-lg text-error mb-4">{ message.to_string() }</p>
            <button type="button" class="btn btn-primary" onclick={retry}>{ "Thử lại" }</button>
        </div>
    }
}

pub(crate) fn empty_view(message: &str) -> Html {
    html! {
        <div class="text-center py-12">
            <p class="text-base-content/60 text-lg">{ message.to_string() }</p>
        </div>
    }
}
