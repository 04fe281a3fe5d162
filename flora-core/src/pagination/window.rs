//! Page-window shaping: which page buttons a pager shows.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Numeric slots available between the pinned first and last pages.
pub const SHOW_PAGES: usize = 5;

/// Upper bound on tokens in any window.
pub const MAX_TOKENS: usize = SHOW_PAGES + 4;

/// A single pager slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl PageToken {
    #[must_use]
    pub const fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => write!(f, "..."),
        }
    }
}

pub type PageTokens = SmallVec<[PageToken; MAX_TOKENS]>;

/// Layout a pager takes for a given page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowShape {
    /// No pages, so no controls.
    Hidden,
    /// Every page fits without compression.
    Flat,
    /// First and last pinned, neighbours of the current page, ellipses between.
    Windowed,
}

impl WindowShape {
    #[must_use]
    pub const fn for_total(total_pages: usize) -> Self {
        if total_pages < 1 {
            Self::Hidden
        } else if total_pages <= SHOW_PAGES + 2 {
            Self::Flat
        } else {
            Self::Windowed
        }
    }
}

/// Compute the page tokens to render for `current_page` of `total_pages`.
#[must_use]
pub fn compute_window(current_page: usize, total_pages: usize) -> PageTokens {
    let mut tokens = PageTokens::new();
    match WindowShape::for_total(total_pages) {
        WindowShape::Hidden => {}
        WindowShape::Flat => tokens.extend((1..=total_pages).map(PageToken::Page)),
        WindowShape::Windowed => {
            tokens.push(PageToken::Page(1));
            if current_page > 3 {
                tokens.push(PageToken::Ellipsis);
            }
            let start = current_page.saturating_sub(1).max(2);
            let end = current_page.saturating_add(1).min(total_pages - 1);
            tokens.extend((start..=end).map(PageToken::Page));
            if current_page < total_pages - 2 {
                tokens.push(PageToken::Ellipsis);
            }
            tokens.push(PageToken::Page(total_pages));
        }
    }
    tokens
}

/// Everything a pager needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub tokens: PageTokens,
    pub current_page: usize,
    pub total_pages: usize,
    pub shape: WindowShape,
}

impl PageWindow {
    #[must_use]
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            tokens: compute_window(current_page, total_pages),
            current_page,
            total_pages,
            shape: WindowShape::for_total(total_pages),
        }
    }

    /// First/last buttons are pointless when first and last coincide.
    #[must_use]
    pub const fn shows_edge_buttons(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub const fn can_go_first(&self) -> bool {
        self.current_page != 1
    }

    #[must_use]
    pub const fn can_go_last(&self) -> bool {
        self.current_page != self.total_pages
    }

    #[must_use]
    pub const fn is_current(&self, page: usize) -> bool {
        self.current_page == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn no_pages_means_no_tokens() {
        assert!(compute_window(1, 0).is_empty());
        assert_eq!(WindowShape::for_total(0), WindowShape::Hidden);
    }

    #[test]
    fn single_page_hides_edge_buttons() {
        let window = PageWindow::new(1, 1);
        assert_eq!(window.tokens.as_slice(), &[Page(1)]);
        assert!(!window.shows_edge_buttons());
    }

    #[test]
    fn seven_pages_stay_flat() {
        let tokens = compute_window(4, 7);
        let expected: Vec<PageToken> = (1..=7).map(Page).collect();
        assert_eq!(tokens.as_slice(), expected.as_slice());
        assert_eq!(WindowShape::for_total(7), WindowShape::Flat);
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            compute_window(1, 10).as_slice(),
            &[Page(1), Page(2), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            compute_window(6, 10).as_slice(),
            &[Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn near_the_end_drops_trailing_ellipsis() {
        assert_eq!(
            compute_window(9, 10).as_slice(),
            &[Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            compute_window(3, 10).as_slice(),
            &[Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn windows_are_bounded_for_large_totals() {
        for current in [1, 2, 3, 4, 500, 998, 999, 1000] {
            let tokens = compute_window(current, 1000);
            assert!(tokens.len() <= MAX_TOKENS);
            assert_eq!(tokens.first(), Some(&Page(1)));
            assert_eq!(tokens.last(), Some(&Page(1000)));
            assert!(tokens.iter().filter(|t| t.is_ellipsis()).count() <= 2);
            assert!(!tokens.spilled());
        }
    }

    #[test]
    fn edge_buttons_track_bounds() {
        let window = PageWindow::new(1, 4);
        assert!(!window.can_go_first());
        assert!(window.can_go_last());
        let window = PageWindow::new(4, 4);
        assert!(window.can_go_first());
        assert!(!window.can_go_last());
    }

    #[test]
    fn tokens_render_as_labels() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "...");
    }
}
