use crate::components::daisy_ui::TextField;
use crate::components::{BlogCard, BlogCardProps, ListingKind, Pagination};
use crate::hooks::{Fetch, use_pagination};
use flora_core::filter::contains_query;
use flora_core::{Blog, BlogStatus, PageSize, normalize_query};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BlogPageProps {
    pub blogs: Fetch<Vec<Blog>>,
    #[prop_or_default]
    pub page_size: PageSize,
    #[prop_or_default]
    pub on_retry: Callback<()>,
}

/// Published posts whose title or body contains `query`.
#[must_use]
pub fn visible_posts(blogs: &[Blog], query: &str) -> Vec<Blog> {
    let needle = normalize_query(query);
    blogs
        .iter()
        .filter(|blog| blog.status == BlogStatus::Published)
        .filter(|blog| contains_query(&blog.title, &needle) || contains_query(&blog.content, &needle))
        .cloned()
        .collect()
}

fn skeleton_card() -> Html {
    html! {
        <div class="card bg-base-100 shadow-sm animate-pulse" aria-hidden="true">
            <div class="h-56 bg-base-300" />
            <div class="card-body gap-3">
                <div class="h-4 w-1/3 bg-base-300 rounded" />
                <div class="h-6 bg-base-300 rounded" />
                <div class="h-4 w-3/4 bg-base-300 rounded" />
            </div>
        </div>
    }
}

#[function_component(BlogPage)]
pub fn blog_page(props: &BlogPageProps) -> Html {
    let query = use_state(String::new);
    let all: &[Blog] = props.blogs.ready().map(Vec::as_slice).unwrap_or_default();
    let posts = visible_posts(all, &query);
    let page = use_pagination(&posts, props.page_size);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_clear = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(String::new()))
    };
    let searching = !query.trim().is_empty();

    let body = match &props.blogs {
        Fetch::Loading => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for (0..6).map(|_| skeleton_card()) }
            </div>
        },
        Fetch::Failed(_) => super::failed_view("Không thể tải danh sách bài viết", &props.on_retry),
        Fetch::Ready(_) if page.total_items == 0 => html! {
            <div class="text-center py-16">
                <div class="text-6xl mb-4" aria-hidden="true">{ "📝" }</div>
                <p class="text-lg text-base-content/60 mb-4">
                    { if searching { "Không tìm thấy bài viết phù hợp" } else { "Chưa có bài viết nào" } }
                </p>
                if searching {
                    <button type="button" class="btn btn-primary" onclick={on_clear.clone()}>{ "Xem tất cả bài viết" }</button>
                }
            </div>
        },
        Fetch::Ready(_) => html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for page.items.iter().map(|blog| {
                        let card = BlogCardProps::from(blog);
                        html! { <BlogCard ..card /> }
                    }) }
                </div>
                <Pagination
                    class={classes!("mt-12")}
                    current_page={page.current_page}
                    total_pages={page.total_pages}
                    total_items={page.total_items}
                    page_size={page.page_size.get()}
                    kind={ListingKind::Post}
                    on_change={page.set_page.clone()}
                />
            </>
        },
    };

    html! {
        <div class="md:py-16 py-8 md:px-12 px-6">
            <div class="max-w-7xl mx-auto">
                <header class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{ "Blog" }</h1>
                    <p class="text-lg text-base-content/70">{ "Chia sẻ kiến thức và câu chuyện về hoa" }</p>
                </header>
                <div class="max-w-2xl mx-auto mb-12 flex gap-2 items-end">
                    <TextField
                        id="blog-search"
                        class={classes!("flex-1")}
                        input_type="search"
                        placeholder="Tìm kiếm bài viết..."
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                    if searching {
                        <button type="button" class="btn btn-ghost" onclick={on_clear}>{ "Xóa" }</button>
                    }
                </div>
                { body }
            </div>
        </div>
    }
}
