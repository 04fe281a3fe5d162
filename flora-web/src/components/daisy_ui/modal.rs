use crate::components::daisy_ui::foundation as f;
use web_sys::KeyboardEvent;
use yew::prelude::{use_effect_with, use_node_ref};

#[derive(f::Properties, PartialEq, Clone)]
pub struct ModalProps {
    pub open: bool,
    pub title: f::AttrValue,
    #[prop_or_default]
    pub actions: Option<f::Html>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_close: f::Callback<()>,
    #[prop_or_default]
    pub children: f::Children,
}

/// Dialog for the admin create/edit forms. Escape and the backdrop close it.
#[f::function_component(Modal)]
pub fn modal(props: &ModalProps) -> f::Html {
    let box_ref = use_node_ref();
    {
        let box_ref = box_ref.clone();
        use_effect_with(props.open, move |open| {
            if *open && let Some(el) = box_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }
    if !props.open {
        return f::Html::default();
    }

    let class = f::class_list(&["modal", "modal-open"], &props.class);
    let close = {
        let cb = props.on_close.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        f::Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    f::html! {
        <div class={class} role="dialog" aria-modal="true" aria-label={props.title.clone()} onkeydown={on_keydown}>
            <div class="modal-box max-w-2xl" ref={box_ref} tabindex="-1">
                <div class="flex justify-between items-start mb-4">
                    <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                    <button class="btn btn-ghost btn-sm btn-circle" aria-label="Đóng" onclick={close.clone()}>{ "✕" }</button>
                </div>
                { for props.children.iter() }
                { props.actions.clone().map(|actions| f::html!{
                    <div class="modal-action">{ actions }</div>
                }).unwrap_or_default() }
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
