use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct AlertProps {
    pub message: f::AttrValue,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub class: f::Classes,
    /// Shows a close button when set.
    #[prop_or_default]
    pub on_dismiss: Option<f::Callback<()>>,
}

#[f::function_component(Alert)]
pub fn alert(props: &AlertProps) -> f::Html {
    let mut classes = f::class_list(&["alert"], &props.class);
    let variant = props.variant.unwrap_or(f::DaisyColor::Info);
    classes.push(variant.class("alert"));
    let role = if variant == f::DaisyColor::Error { "alert" } else { "status" };
    f::html! {
        <div class={classes} role={role}>
            <span>{ props.message.clone() }</span>
            { props.on_dismiss.as_ref().map(|cb| {
                let cb = cb.clone();
                f::html! {
                    <button class="btn btn-ghost btn-xs" aria-label="Đóng" onclick={move |_| cb.emit(())}>{ "✕" }</button>
                }
            }).unwrap_or_default() }
        </div>
    }
}
