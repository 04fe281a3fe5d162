use crate::router::{Route, ShopQuery};
use flora_core::Category;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryDropdownProps {
    pub categories: Vec<Category>,
}

/// "Danh mục" button opening a list of shop links, one per category.
#[function_component(CategoryDropdown)]
pub fn category_dropdown(props: &CategoryDropdownProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let mut button = classes!("btn", "btn-sm", "gap-2");
    button.push(if *open { "btn-primary" } else { "btn-ghost" });
    let mut menu = classes!(
        "menu",
        "absolute",
        "top-full",
        "left-0",
        "mt-2",
        "w-56",
        "bg-base-100",
        "rounded-box",
        "shadow-xl",
        "z-50"
    );
    if !*open {
        menu.push("hidden");
    }

    html! {
        <div class="relative">
            <button type="button" class={button} aria-expanded={open.to_string()} aria-haspopup="true" onclick={toggle}>
                <span aria-hidden="true">{ "☰" }</span>
                { "Danh mục" }
            </button>
            <ul class={menu}>
                { for props.categories.iter().map(|category| html! {
                    <li key={category.id} onclick={close.clone()}>
                        <Link<Route, ShopQuery> to={Route::Shop} query={Some(ShopQuery::category(category.id))}>
                            { &category.name }
                        </Link<Route, ShopQuery>>
                    </li>
                }) }
            </ul>
        </div>
    }
}
