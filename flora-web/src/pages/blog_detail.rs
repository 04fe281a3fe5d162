use crate::components::daisy_ui::{Badge, Loading};
use crate::components::{BlogCard, BlogCardProps};
use crate::hooks::Fetch;
use crate::paths::image_src;
use crate::router::Route;
use flora_core::{BlogDetail, RelatedBlog, format_blog_datetime};
use yew::prelude::*;
use yew_router::prelude::*;

const SHARE_TARGETS: [&str; 3] = ["Facebook", "Twitter", "Sao chép liên kết"];

#[derive(Properties, PartialEq)]
pub struct BlogDetailPageProps {
    pub detail: Fetch<BlogDetail>,
    #[prop_or_default]
    pub related: Vec<RelatedBlog>,
}

/// Split a post body into paragraphs on blank lines.
fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}

#[function_component(BlogDetailPage)]
pub fn blog_detail_page(props: &BlogDetailPageProps) -> Html {
    let back = html! {
        <Link<Route> to={Route::Blog} classes={classes!("btn", "btn-ghost", "mb-6")}>{ "← Quay lại" }</Link<Route>>
    };

    let detail = match &props.detail {
        Fetch::Loading => return html! { <div class="py-16"><Loading /></div> },
        Fetch::Failed(err) => {
            return html! {
                <div class="text-center py-16 px-6">
                    <div class="text-6xl mb-4" aria-hidden="true">{ "📝" }</div>
                    <h1 class="text-2xl font-bold mb-2">{ "Không tìm thấy bài viết" }</h1>
                    <p class="text-base-content/60 mb-6">{ err.to_string() }</p>
                    <Link<Route> to={Route::Blog} classes={classes!("btn", "btn-primary")}>{ "Quay lại" }</Link<Route>>
                </div>
            };
        }
        Fetch::Ready(detail) => detail,
    };

    let blog = &detail.blog;
    let published = format_blog_datetime(&blog.created_at).unwrap_or_else(|| blog.created_at.clone());
    let author = blog.author_username.clone().unwrap_or_else(|| "Admin".to_string());

    html! {
        <article class="md:py-16 py-8 md:px-12 px-6">
            <div class="max-w-4xl mx-auto">
                { back }
                <header class="mb-8">
                    <h1 class="text-3xl md:text-5xl font-bold mb-4">{ blog.title.clone() }</h1>
                    <p class="text-base-content/60">
                        { author }{ " • " }<time datetime={blog.created_at.clone()}>{ published }</time>
                    </p>
                </header>
                <figure class="rounded-2xl overflow-hidden mb-8 aspect-video bg-base-200">
                    <img src={image_src(&blog.image_url)} alt={blog.title.clone()} class="w-full h-full object-cover" />
                </figure>
                { blog.summary.as_ref().map(|summary| html! {
                    <p class="text-xl italic text-base-content/80 mb-6">{ summary.clone() }</p>
                }).unwrap_or_default() }
                <div class="prose max-w-none">
                    { for paragraphs(&blog.content).map(|text| html! { <p>{ text.to_string() }</p> }) }
                </div>
                if !detail.tags.is_empty() {
                    <div class="flex flex-wrap gap-2 mt-8">
                        { for detail.tags.iter().map(|tag| html! { <Badge label={format!("#{tag}")} outline={true} /> }) }
                    </div>
                }
                <section class="border-t mt-10 pt-6" aria-labelledby="share-post">
                    <h2 id="share-post" class="font-semibold mb-3">{ "Chia sẻ bài viết" }</h2>
                    <div class="flex gap-2">
                        { for SHARE_TARGETS.iter().map(|target| html! {
                            <button type="button" class="btn btn-sm btn-outline">{ *target }</button>
                        }) }
                    </div>
                </section>
            </div>
            if !props.related.is_empty() {
                <section class="max-w-7xl mx-auto mt-16" aria-labelledby="related-posts">
                    <h2 id="related-posts" class="text-2xl md:text-3xl font-bold mb-6">{ "Bài viết liên quan" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        { for props.related.iter().map(|related| {
                            let card = BlogCardProps::from(related);
                            html! { <BlogCard ..card /> }
                        }) }
                    </div>
                </section>
            }
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_separate_paragraphs() {
        let body = "Đoạn một.\n\n  Đoạn hai.  \n\n\n\nĐoạn ba.";
        assert_eq!(paragraphs(body).collect::<Vec<_>>(), ["Đoạn một.", "Đoạn hai.", "Đoạn ba."]);
    }
}
