use crate::api::ApiError;
use flora_core::{PageSize, PagingSession};
use std::future::Future;
use yew::prelude::*;

/// Progress of one API request as seen by a page.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> Fetch<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetch<U> {
        match self {
            Self::Loading => Fetch::Loading,
            Self::Ready(value) => Fetch::Ready(f(value)),
            Self::Failed(err) => Fetch::Failed(err),
        }
    }
}

/// Run `request` whenever `deps` change and track its outcome.
///
/// The returned callback repeats the request, for "try again" buttons.
#[hook]
pub fn use_api<T, D, F, Fut>(deps: D, request: F) -> (Fetch<T>, Callback<()>)
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| Fetch::Loading);
    let attempt = use_state(|| 0_u32);
    {
        let state = state.clone();
        use_effect_with((deps, *attempt), move |(deps, _)| {
            state.set(Fetch::Loading);
            let pending = request(deps.clone());
            yew::platform::spawn_local(async move {
                match pending.await {
                    Ok(value) => state.set(Fetch::Ready(value)),
                    Err(err) => {
                        log::error!("api request failed: {err}");
                        #[cfg(target_arch = "wasm32")]
                        crate::dom::console_error(&format!("api request failed: {err}"));
                        state.set(Fetch::Failed(err));
                    }
                }
            });
            || ()
        });
    }
    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |()| attempt.set(*attempt + 1))
    };
    ((*state).clone(), retry)
}

/// Visible page of a listing plus what the pager needs to render.
#[derive(Clone, PartialEq)]
pub struct PaginationHandle<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: PageSize,
    pub set_page: Callback<usize>,
}

/// Page through `items` on the client.
///
/// The current page survives re-renders. When the collection shrinks below
/// it, the page resets to 1 in the same render so a stale page is never shown.
#[hook]
pub fn use_pagination<T>(items: &[T], page_size: PageSize) -> PaginationHandle<T>
where
    T: Clone + 'static,
{
    let session = use_state_eq(|| PagingSession::new(page_size));

    let mut next = *session;
    next.set_page_size(page_size);
    let view = next.view(items);
    if next != *session {
        session.set(next);
    }

    let set_page = {
        let session = session.clone();
        Callback::from(move |page: usize| {
            let mut moved = *session;
            moved.set_page(page);
            session.set(moved);
        })
    };

    PaginationHandle {
        items: view.items.to_vec(),
        current_page: view.current_page,
        total_pages: view.total_pages,
        total_items: view.total_items,
        page_size: view.page_size,
        set_page,
    }
}
