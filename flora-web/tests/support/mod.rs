use futures::executor::block_on;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

#[derive(Properties, PartialEq)]
pub struct RoutedProps {
    pub children: Html,
}

/// Gives links inside `children` a router to resolve against.
#[function_component(Routed)]
pub fn routed(props: &RoutedProps) -> Html {
    html! {
        <Router history={AnyHistory::from(MemoryHistory::new())}>
            { props.children.clone() }
        </Router>
    }
}

/// Server-render `children` inside a memory router.
pub fn render_routed(children: Html) -> String {
    block_on(LocalServerRenderer::<Routed>::with_props(RoutedProps { children }).render())
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
