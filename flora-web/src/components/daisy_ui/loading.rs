use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct LoadingProps {
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub size: Option<f::DaisySize>,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Centered spinner for sections waiting on the API.
#[f::function_component(Loading)]
pub fn loading(props: &LoadingProps) -> f::Html {
    let mut class = f::class_list(&["loading", "loading-spinner", "text-primary"], &props.class);
    class.push(props.size.unwrap_or(f::DaisySize::Lg).class("loading"));
    let label = props.label.clone().unwrap_or_else(|| "Đang tải...".into());
    f::html! {
        <div class="flex justify-center items-center gap-2 py-12" role="status" aria-live="polite">
            <span class={class}></span>
            <span class="sr-only">{ label }</span>
        </div>
    }
}
