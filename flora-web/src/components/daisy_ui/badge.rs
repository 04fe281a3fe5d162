use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct BadgeProps {
    pub label: f::AttrValue,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub outline: bool,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Badge)]
pub fn badge(props: &BadgeProps) -> f::Html {
    let mut classes = f::class_list(&["badge"], &props.class);
    if let Some(variant) = props.variant {
        classes.push(variant.class("badge"));
    }
    if props.outline {
        classes.push("badge-outline");
    }
    f::html! { <span class={classes}>{ props.label.clone() }</span> }
}
