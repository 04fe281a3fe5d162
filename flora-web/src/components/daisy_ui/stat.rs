use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq, Debug)]
pub struct StatItem {
    pub title: f::AttrValue,
    pub value: f::AttrValue,
    pub description: Option<f::AttrValue>,
    pub variant: Option<f::DaisyColor>,
}

impl StatItem {
    #[must_use]
    pub fn new(title: impl Into<f::AttrValue>, value: impl Into<f::AttrValue>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: None,
            variant: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<f::AttrValue>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn variant(mut self, variant: f::DaisyColor) -> Self {
        self.variant = Some(variant);
        self
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatProps {
    pub items: Vec<StatItem>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Stat)]
pub fn stat(props: &StatProps) -> f::Html {
    let class = f::class_list(&["stats", "stats-vertical", "lg:stats-horizontal", "shadow"], &props.class);
    f::html! {
        <div class={class}>
            { for props.items.iter().map(|item| {
                let mut value_class = f::classes!("stat-value");
                if let Some(variant) = item.variant {
                    value_class.push(variant.class("text"));
                }
                f::html! {
                    <div class="stat">
                        <div class="stat-title">{ item.title.clone() }</div>
                        <div class={value_class}>{ item.value.clone() }</div>
                        { item.description.as_ref().map(|d| f::html!{ <div class="stat-desc">{ d.clone() }</div> }).unwrap_or_default() }
                    </div>
                }
            }) }
        </div>
    }
}
