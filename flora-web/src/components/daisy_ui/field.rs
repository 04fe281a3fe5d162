//! Labelled form controls used by the login, filter and admin forms.
use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SelectOption {
    pub value: f::AttrValue,
    pub label: f::AttrValue,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<f::AttrValue>, label: impl Into<f::AttrValue>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn field_label(id: &f::AttrValue, label: Option<&f::AttrValue>, required: bool) -> f::Html {
    label
        .map(|text| {
            f::html! {
                <label class="label" for={id.clone()}>
                    <span class="label-text">{ text.clone() }</span>
                    if required {
                        <span class="text-error" aria-hidden="true">{ " *" }</span>
                    }
                </label>
            }
        })
        .unwrap_or_default()
}

fn field_error(error: Option<&f::AttrValue>) -> f::Html {
    error
        .map(|message| f::html! { <p class="text-error text-sm mt-1">{ message.clone() }</p> })
        .unwrap_or_default()
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct TextFieldProps {
    pub id: f::AttrValue,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub input_type: Option<f::AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> f::Html {
    let mut class = f::class_list(&["input", "input-bordered", "w-full"], &props.class);
    if props.error.is_some() {
        class.push("input-error");
    }
    let input_type = props.input_type.clone().unwrap_or_else(|| "text".into());
    f::html! {
        <div class="form-control w-full">
            { field_label(&props.id, props.label.as_ref(), props.required) }
            <input
                id={props.id.clone()}
                class={class}
                type={input_type}
                value={props.value.clone()}
                placeholder={f::attr_value(&props.placeholder)}
                required={props.required}
                disabled={props.disabled}
                aria-invalid={props.error.is_some().then_some("true")}
                oninput={f::on_input_value(&props.oninput)}
            />
            { field_error(props.error.as_ref()) }
        </div>
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectFieldProps {
    pub id: f::AttrValue,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<String>,
}

#[f::function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> f::Html {
    let class = f::class_list(&["select", "select-bordered", "w-full"], &props.class);
    f::html! {
        <div class="form-control w-full">
            { field_label(&props.id, props.label.as_ref(), false) }
            <select
                id={props.id.clone()}
                class={class}
                value={props.value.clone()}
                disabled={props.disabled}
                onchange={f::on_select_value(&props.on_change)}
            >
                { for props.options.iter().map(|opt| f::html! {
                    <option value={opt.value.clone()} selected={opt.value == props.value}>
                        { opt.label.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}

const fn default_rows() -> u32 {
    4
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct TextAreaFieldProps {
    pub id: f::AttrValue,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or(default_rows())]
    pub rows: u32,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> f::Html {
    let class = f::class_list(&["textarea", "textarea-bordered", "w-full"], &props.class);
    f::html! {
        <div class="form-control w-full">
            { field_label(&props.id, props.label.as_ref(), props.required) }
            <textarea
                id={props.id.clone()}
                class={class}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                placeholder={f::attr_value(&props.placeholder)}
                required={props.required}
                oninput={f::on_textarea_value(&props.oninput)}
            />
        </div>
    }
}
