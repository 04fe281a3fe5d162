//! Slice-based paging over caller-owned collections.
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Items per page when a view does not ask for anything else.
pub const DEFAULT_PAGE_SIZE: usize = 20;

const DEFAULT_SIZE: NonZeroUsize = match NonZeroUsize::new(DEFAULT_PAGE_SIZE) {
    Some(size) => size,
    None => panic!("default page size must be positive"),
};

/// Errors raised when paging inputs violate their contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PagingError {
    #[error("page size must be positive (got 0)")]
    ZeroPageSize,
}

/// Number of items shown on one page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Build a page size from a raw count.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroPageSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, PagingError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PagingError::ZeroPageSize)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PagingError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Paging settings for a listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PagingConfig {
    #[serde(default)]
    pub page_size: PageSize,
}

/// Derived, read-only view of one page of a collection.
#[derive(Debug, PartialEq, Eq)]
pub struct PagingResult<'a, T> {
    /// Items visible on the requested page. Empty when the page is out of range.
    pub items: &'a [T],
    /// The 1-based page this result was derived from.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: PageSize,
}

impl<T> Clone for PagingResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PagingResult<'_, T> {}

impl<T> PagingResult<'_, T> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether no page follows this one. An empty collection has no pages
    /// at all, so its only (empty) page is also the last.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.total_pages == 0 || self.current_page >= self.total_pages
    }
}

/// Number of pages needed to show `item_count` items. Zero for an empty collection.
#[must_use]
pub const fn total_pages(item_count: usize, page_size: PageSize) -> usize {
    item_count.div_ceil(page_size.get())
}

/// Derive the visible slice and totals for `current_page`.
///
/// Pages outside `1..=total_pages` yield an empty slice rather than an error.
#[must_use]
pub fn derive<T>(collection: &[T], page_size: PageSize, current_page: usize) -> PagingResult<'_, T> {
    let total_items = collection.len();
    let size = page_size.get();
    let start = current_page
        .checked_sub(1)
        .map_or(total_items, |offset| offset.saturating_mul(size))
        .min(total_items);
    let end = start.saturating_add(size).min(total_items);

    PagingResult {
        items: &collection[start..end],
        current_page,
        total_pages: total_pages(total_items, page_size),
        total_items,
        page_size,
    }
}

/// Page to use once a collection has `total_pages` pages.
///
/// A page past the end snaps back to 1. An empty collection keeps the page as is.
#[must_use]
pub const fn reconcile_page(current_page: usize, total_pages: usize) -> usize {
    if current_page > total_pages && total_pages > 0 {
        1
    } else {
        current_page
    }
}

/// Current-page state for one listing view.
///
/// Each view owns its own session; sessions are never shared between listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingSession {
    page_size: PageSize,
    current_page: usize,
    item_count: usize,
}

impl Default for PagingSession {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PagingSession {
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current_page: 1,
            item_count: 0,
        }
    }

    #[must_use]
    pub const fn from_config(config: PagingConfig) -> Self {
        Self::new(config.page_size)
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        total_pages(self.item_count, self.page_size)
    }

    /// Move to `page` verbatim. Out-of-range pages are handled by reconciliation.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Record a new collection length and reconcile the current page.
    ///
    /// Returns `true` when the current page was reset.
    pub fn sync_len(&mut self, item_count: usize) -> bool {
        self.item_count = item_count;
        self.reconcile()
    }

    /// Change the page size and reconcile the current page.
    ///
    /// Returns `true` when the current page was reset.
    pub fn set_page_size(&mut self, page_size: PageSize) -> bool {
        self.page_size = page_size;
        self.reconcile()
    }

    /// Reconcile against `collection`, then derive its visible page.
    pub fn view<'a, T>(&mut self, collection: &'a [T]) -> PagingResult<'a, T> {
        self.sync_len(collection.len());
        derive(collection, self.page_size, self.current_page)
    }

    fn reconcile(&mut self) -> bool {
        let total = self.total_pages();
        let next = reconcile_page(self.current_page, total);
        if next == self.current_page {
            return false;
        }
        log::debug!(
            "paging reset: page {} out of range for {} pages ({} items)",
            self.current_page,
            total,
            self.item_count
        );
        self.current_page = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageSize::new(0), Err(PagingError::ZeroPageSize));
        assert!(serde_json::from_str::<PageSize>("0").is_err());
        assert_eq!(serde_json::from_str::<PageSize>("12").unwrap().get(), 12);
    }

    #[test]
    fn default_page_size_is_twenty() {
        assert_eq!(PageSize::default().get(), DEFAULT_PAGE_SIZE);
        let config: PagingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page_size.get(), 20);
    }

    #[test]
    fn first_page_of_forty_five() {
        let items: Vec<u32> = (0..45).collect();
        let page = derive(&items, size(20), 1);
        assert_eq!(page.items, &items[0..20]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 45);
    }

    #[test]
    fn last_page_is_short() {
        let items: Vec<u32> = (0..45).collect();
        let page = derive(&items, size(20), 3);
        assert_eq!(page.items, &items[40..45]);
        assert_eq!(page.items.len(), 5);
        assert!(page.is_last_page());
        assert!(!derive(&items, size(20), 2).is_last_page());
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        let page = derive(&items, size(20), 1);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.is_last_page());
    }

    #[test]
    fn out_of_range_pages_yield_empty_slices() {
        let items: Vec<u32> = (0..5).collect();
        assert!(derive(&items, size(2), 4).is_empty());
        assert!(derive(&items, size(2), 0).is_empty());
        assert!(derive(&items, size(2), usize::MAX).is_empty());
    }

    #[test]
    fn reconcile_only_resets_past_the_end() {
        assert_eq!(reconcile_page(3, 1), 1);
        assert_eq!(reconcile_page(3, 3), 3);
        assert_eq!(reconcile_page(4, 0), 4);
    }

    #[test]
    fn session_resets_after_shrink() {
        let full: Vec<u32> = (0..45).collect();
        let mut session = PagingSession::new(size(20));
        session.view(&full);
        session.set_page(3);
        assert_eq!(session.view(&full).items.len(), 5);

        let shrunk = &full[..10];
        let page = session.view(shrunk);
        assert_eq!(session.current_page(), 1);
        assert_eq!(page.items, &full[0..10]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn session_keeps_page_when_still_in_range() {
        let mut session = PagingSession::new(size(10));
        session.set_page(4);
        assert!(!session.sync_len(60));
        assert_eq!(session.current_page(), 4);
    }

    #[test]
    fn set_page_does_not_clamp() {
        let mut session = PagingSession::default();
        session.sync_len(5);
        session.set_page(9);
        assert_eq!(session.current_page(), 9);
        assert!(session.sync_len(5));
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn page_size_change_reconciles() {
        let mut session = PagingSession::new(size(5));
        session.sync_len(30);
        session.set_page(6);
        assert!(session.set_page_size(size(10)));
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.total_pages(), 3);
    }
}
