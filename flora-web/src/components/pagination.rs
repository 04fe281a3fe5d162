use crate::components::daisy_ui::foundation as f;
use flora_core::{PageToken, PageWindow, display_range};

/// What a listing holds. Picks the pager's icons and wording.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ListingKind {
    #[default]
    Product,
    Post,
    Account,
}

impl ListingKind {
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Product => "sản phẩm",
            Self::Post => "bài viết",
            Self::Account => "tài khoản",
        }
    }

    const fn first_icon(self) -> &'static str {
        match self {
            Self::Product | Self::Account => "🌱",
            Self::Post => "📄",
        }
    }

    const fn last_icon(self) -> &'static str {
        match self {
            Self::Product | Self::Account => "🌸",
            Self::Post => "📝",
        }
    }

    const fn first_title(self) -> &'static str {
        match self {
            Self::Product | Self::Account => "Trang đầu (Hạt mầm)",
            Self::Post => "Trang đầu (Bài viết trống)",
        }
    }

    const fn last_title(self) -> &'static str {
        match self {
            Self::Product | Self::Account => "Trang cuối (Hoa nở)",
            Self::Post => "Trang cuối (Bài viết đầy đủ)",
        }
    }
}

/// "Hiển thị 21 - 40 trong tổng số 45 sản phẩm", or `None` for an empty page.
#[must_use]
pub fn summary_line(
    kind: ListingKind,
    current_page: usize,
    page_size: usize,
    total_items: usize,
) -> Option<String> {
    display_range(current_page, page_size, total_items).map(|(start, end)| {
        format!(
            "Hiển thị {start} - {end} trong tổng số {total_items} {}",
            kind.noun()
        )
    })
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    #[prop_or_default]
    pub total_items: usize,
    #[prop_or(flora_core::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    #[prop_or_default]
    pub kind: ListingKind,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<usize>,
}

#[f::function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> f::Html {
    let window = PageWindow::new(props.current_page, props.total_pages);
    if window.tokens.is_empty() {
        return f::Html::default();
    }

    let go_to = |page: usize| {
        let cb = props.on_change.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(page))
    };
    let kind = props.kind;
    let class = f::class_list(&["flex", "flex-col", "items-center", "gap-4"], &props.class);
    let summary = summary_line(kind, props.current_page, props.page_size, props.total_items);

    f::html! {
        <nav class={class} aria-label="Phân trang">
            <div class="join">
                if window.shows_edge_buttons() {
                    <button
                        class="join-item btn btn-circle"
                        disabled={!window.can_go_first()}
                        title={kind.first_title()}
                        aria-label="Trang đầu"
                        onclick={go_to(1)}
                    >
                        { kind.first_icon() }
                    </button>
                }
                { for window.tokens.iter().map(|token| match *token {
                    PageToken::Ellipsis => f::html! {
                        <span class="join-item btn btn-disabled" aria-hidden="true">{ "•••" }</span>
                    },
                    PageToken::Page(page) => {
                        let current = window.is_current(page);
                        let mut btn_class = f::classes!("join-item", "btn");
                        if current {
                            btn_class.push("btn-active");
                            btn_class.push("btn-primary");
                        }
                        f::html! {
                            <button
                                class={btn_class}
                                aria-label={format!("Trang {page}")}
                                aria-current={current.then_some("page")}
                                onclick={go_to(page)}
                            >
                                { page }
                            </button>
                        }
                    }
                }) }
                if window.shows_edge_buttons() {
                    <button
                        class="join-item btn btn-circle"
                        disabled={!window.can_go_last()}
                        title={kind.last_title()}
                        aria-label="Trang cuối"
                        onclick={go_to(window.total_pages)}
                    >
                        { kind.last_icon() }
                    </button>
                }
            </div>
            { summary.map(|line| f::html! { <p class="text-sm text-base-content/60">{ line }</p> }).unwrap_or_default() }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_the_listing_noun() {
        assert_eq!(
            summary_line(ListingKind::Product, 3, 20, 45).as_deref(),
            Some("Hiển thị 41 - 45 trong tổng số 45 sản phẩm")
        );
        assert_eq!(
            summary_line(ListingKind::Post, 1, 6, 6).as_deref(),
            Some("Hiển thị 1 - 6 trong tổng số 6 bài viết")
        );
        assert_eq!(summary_line(ListingKind::Post, 1, 6, 0), None);
    }
}
