use crate::paths::image_src;
use crate::router::Route;
use flora_core::{Blog, RelatedBlog, format_blog_date, truncate_content};
use yew::prelude::*;
use yew_router::prelude::*;

const EXCERPT_LEN: usize = 120;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogCardProps {
    pub id: u64,
    pub title: AttrValue,
    pub image_url: AttrValue,
    pub created_at: AttrValue,
    #[prop_or_default]
    pub excerpt: Option<AttrValue>,
    #[prop_or_default]
    pub author: Option<AttrValue>,
}

impl From<&Blog> for BlogCardProps {
    fn from(blog: &Blog) -> Self {
        let excerpt = blog
            .summary
            .clone()
            .unwrap_or_else(|| truncate_content(&blog.content, EXCERPT_LEN));
        Self {
            id: blog.id,
            title: blog.title.clone().into(),
            image_url: blog.image_url.clone().into(),
            created_at: blog.created_at.clone().into(),
            excerpt: Some(excerpt.into()),
            author: blog.author_username.clone().map(AttrValue::from),
        }
    }
}

impl From<&RelatedBlog> for BlogCardProps {
    fn from(blog: &RelatedBlog) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone().into(),
            image_url: blog.image_url.clone().into(),
            created_at: blog.created_at.clone().into(),
            excerpt: None,
            author: None,
        }
    }
}

#[function_component(BlogCard)]
pub fn blog_card(props: &BlogCardProps) -> Html {
    let date = format_blog_date(&props.created_at).unwrap_or_else(|| props.created_at.to_string());
    html! {
        <article class="card bg-base-100 shadow-sm hover:shadow-xl transition-shadow">
            <Link<Route> to={Route::BlogDetail { id: props.id }} classes={classes!("contents")}>
                <figure class="aspect-video overflow-hidden">
                    <img src={image_src(&props.image_url)} alt={props.title.clone()} class="w-full h-full object-cover" loading="lazy" />
                </figure>
                <div class="card-body p-5">
                    <p class="text-sm text-base-content/60">
                        { props.author.as_ref().map(|author| html! { <>{ author.clone() }{ " • " }</> }).unwrap_or_default() }
                        <time datetime={props.created_at.clone()}>{ date }</time>
                    </p>
                    <h2 class="card-title line-clamp-2">{ props.title.clone() }</h2>
                    { props.excerpt.as_ref().map(|text| html! { <p class="line-clamp-3 text-base-content/70">{ text.clone() }</p> }).unwrap_or_default() }
                    <span class="link link-primary text-sm">{ "Đọc tiếp →" }</span>
                </div>
            </Link<Route>>
        </article>
    }
}
