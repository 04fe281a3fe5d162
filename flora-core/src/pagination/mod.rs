//! Paging engine and page-window renderer used by every listing view.

mod engine;
mod window;

pub use engine::{
    DEFAULT_PAGE_SIZE, PageSize, PagingConfig, PagingError, PagingResult, PagingSession, derive,
    reconcile_page, total_pages,
};
pub use window::{
    MAX_TOKENS, PageToken, PageTokens, PageWindow, SHOW_PAGES, WindowShape, compute_window,
};
