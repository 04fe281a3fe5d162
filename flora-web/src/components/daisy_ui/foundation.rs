pub use web_sys::{
    Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent,
};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DaisyColor {
    Neutral,
    #[default]
    Primary,
    Secondary,
    Accent,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DaisySize {
    Xs,
    Sm,
    Md,
    Lg,
}

impl DaisySize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

/// Forward the text of an `<input>` to `cb` on every keystroke.
#[must_use]
pub fn on_input_value(cb: &Callback<String>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            cb.emit(input.value());
        }
    })
}

#[must_use]
pub fn on_textarea_value(cb: &Callback<String>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
            cb.emit(area.value());
        }
    })
}

#[must_use]
pub fn on_select_value(cb: &Callback<String>) -> Callback<Event> {
    let cb = cb.clone();
    Callback::from(move |e: Event| {
        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
            cb.emit(select.value());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_and_size_classes_take_the_prefix() {
        assert_eq!(DaisyColor::Error.class("alert"), "alert-error");
        assert_eq!(DaisyColor::default().class("btn"), "btn-primary");
        assert_eq!(DaisySize::Sm.class("loading"), "loading-sm");
    }

    #[test]
    fn class_list_appends_extras() {
        let classes = class_list(&["btn", "join-item"], &classes!("btn-active"));
        assert_eq!(classes.len(), 3);
        assert!(classes.contains("join-item"));
        assert!(classes.contains("btn-active"));
    }
}
