//! Header search: debounced product lookup with a results dropdown.
use crate::api::MockApi;
use crate::hooks::Fetch;
use crate::router::{Route, ShopQuery};
use flora_core::{PageSize, Product, format_price, normalize_query};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Numbers each keystroke; only the newest number may publish results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryTickets {
    latest: u64,
}

impl QueryTickets {
    /// Start a new query, making every earlier ticket stale.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub const fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(target_arch = "wasm32")]
async fn wait_for_quiet(delay_ms: u32) -> bool {
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    match crate::dom::sleep_ms(delay).await {
        Ok(()) => true,
        Err(err) => {
            log::error!("search debounce failed: {}", crate::dom::js_error_message(&err));
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unused_async)]
async fn wait_for_quiet(_delay_ms: u32) -> bool {
    true
}

#[derive(Properties, PartialEq, Clone)]
pub struct SearchResultsProps {
    pub results: Fetch<Vec<Product>>,
    /// Raw text in the search box, carried over to the shop link.
    pub query: AttrValue,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(SearchResults)]
pub fn search_results(props: &SearchResultsProps) -> Html {
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let body = match &props.results {
        Fetch::Loading => html! {
            <div class="p-4 flex items-center justify-center gap-2 text-sm opacity-70">
                <span class="loading loading-spinner loading-xs"></span>
                { "Đang tìm kiếm..." }
            </div>
        },
        Fetch::Failed(_) => html! {
            <div class="p-6 text-center text-sm text-error">{ "Không thể tìm kiếm lúc này." }</div>
        },
        Fetch::Ready(products) if products.is_empty() => html! {
            <div class="p-6 text-center text-sm opacity-70">{ "Không tìm thấy kết quả." }</div>
        },
        Fetch::Ready(products) => html! {
            <>
                <p class="px-4 pt-3 pb-1 text-xs font-semibold uppercase tracking-wider opacity-60">{ "Sản phẩm" }</p>
                <ul class="menu w-full">
                    { for products.iter().map(|product| html! {
                        <li key={product.id} onclick={close.clone()}>
                            <Link<Route> to={Route::ProductDetail { id: product.id }} classes={classes!("search-hit", "flex", "justify-between")}>
                                <span class="line-clamp-1">{ &product.name }</span>
                                <span class="text-xs text-primary font-medium">{ format_price(product.price) }</span>
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
                <div class="border-t border-base-200" onclick={close}>
                    <Link<Route, ShopQuery>
                        to={Route::Shop}
                        query={Some(ShopQuery::search(props.query.to_string()))}
                        classes={classes!("block", "px-4", "py-3", "text-center", "text-xs", "text-primary", "font-medium")}
                    >
                        { "Xem tất cả kết quả" }
                    </Link<Route, ShopQuery>>
                </div>
            </>
        },
    };
    html! {
        <div class="absolute top-full left-0 right-0 mt-2 bg-base-100 rounded-box shadow-xl z-50 overflow-hidden" role="listbox">
            { body }
        </div>
    }
}

#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let api = MockApi::default();
    let query = use_state(String::new);
    let results = use_state(|| None::<Fetch<Vec<Product>>>);
    let open = use_state(|| false);
    let tickets = use_mut_ref(QueryTickets::default);

    let on_input = {
        let (query, results, open, tickets) =
            (query.clone(), results.clone(), open.clone(), tickets.clone());
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let ticket = tickets.borrow_mut().issue();
            query.set(value.clone());
            if normalize_query(&value).is_empty() {
                results.set(None);
                open.set(false);
                return;
            }
            let (results, open, tickets) = (results.clone(), open.clone(), tickets.clone());
            spawn_local(async move {
                let config = *api.config();
                if !wait_for_quiet(config.search_debounce_ms).await || !tickets.borrow().is_current(ticket) {
                    return;
                }
                results.set(Some(Fetch::Loading));
                open.set(true);
                let limit = PageSize::new(config.search_results).unwrap_or_default();
                let outcome = api.search_products(&value, 1, limit).await;
                if !tickets.borrow().is_current(ticket) {
                    log::debug!("dropping stale search results for {value:?}");
                    return;
                }
                results.set(Some(match outcome {
                    Ok(page) => Fetch::Ready(page.items),
                    Err(err) => {
                        log::error!("search failed: {err}");
                        Fetch::Failed(err)
                    }
                }));
            });
        })
    };

    let on_clear = {
        let (query, results, open, tickets) =
            (query.clone(), results.clone(), open.clone(), tickets.clone());
        Callback::from(move |_: MouseEvent| {
            tickets.borrow_mut().issue();
            query.set(String::new());
            results.set(None);
            open.set(false);
        })
    };

    let on_focus = {
        let (results, open) = (results.clone(), open.clone());
        Callback::from(move |_: FocusEvent| {
            if results.is_some() {
                open.set(true);
            }
        })
    };

    let on_keydown = {
        let open = open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                open.set(false);
            }
        })
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };

    let dropdown = match (&*results, *open && !query.is_empty()) {
        (Some(found), true) => html! {
            <SearchResults results={found.clone()} query={AttrValue::from((*query).clone())} on_close={on_close} />
        },
        _ => Html::default(),
    };

    html! {
        <div class="relative w-full max-w-md" role="search">
            <label class="input input-bordered input-sm rounded-full flex items-center gap-2 w-full">
                <span aria-hidden="true">{ "🔍" }</span>
                <input
                    type="text"
                    class="grow"
                    placeholder="Tìm kiếm hoa..."
                    aria-label="Tìm kiếm sản phẩm"
                    value={(*query).clone()}
                    oninput={on_input}
                    onfocus={on_focus}
                    onkeydown={on_keydown}
                />
                if !query.is_empty() {
                    <button type="button" class="btn btn-ghost btn-xs btn-circle" aria-label="Xóa tìm kiếm" onclick={on_clear}>{ "✕" }</button>
                }
            </label>
            { dropdown }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_ticket_is_current() {
        let mut tickets = QueryTickets::default();
        let first = tickets.issue();
        assert!(tickets.is_current(first));
        let second = tickets.issue();
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
        assert_ne!(first, second);
    }

    #[test]
    fn clearing_invalidates_a_pending_search() {
        let mut tickets = QueryTickets::default();
        let pending = tickets.issue();
        tickets.issue();
        assert!(!tickets.is_current(pending));
    }

    #[test]
    fn native_debounce_resolves_immediately() {
        assert!(futures::executor::block_on(wait_for_quiet(500)));
    }
}
