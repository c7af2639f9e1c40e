//! Blog Card Component

use leptos::prelude::*;
use rajhub_content::format::{format_date, format_read_time};
use rajhub_content::ContentItem;

use crate::router::Link;

/// Summary card linking to the full post.
///
/// `featured` cards use the wide layout and show the excerpt in full.
#[component]
pub fn BlogCard(post: ContentItem, #[prop(optional)] featured: bool) -> impl IntoView {
    let theme = post.category.theme_key();
    let href = format!("/blogs/{}", post.id);
    let class = if featured { "blog-card-link featured" } else { "blog-card-link" };

    view! {
        <Link href=href class=class>
            <article class=format!("blog-card border-{theme}")>
                <img class="blog-card-image" src=post.image alt=post.title.clone() loading="lazy" />
                <div class="blog-card-body">
                    <span class=format!("category-badge badge-{theme}")>{post.category.label()}</span>
                    <h3 class="blog-card-title">{post.title}</h3>
                    <p class=if featured { "blog-card-excerpt" } else { "blog-card-excerpt clamp" }>
                        {post.excerpt}
                    </p>
                    <div class="blog-card-meta">
                        <span>{format_date(post.published)}</span>
                        <span>{format_read_time(post.read_time_minutes)}</span>
                    </div>
                    <ul class="tag-list">
                        {post.tags.into_iter().map(|tag| view! { <li class="tag">"#" {tag}</li> }).collect_view()}
                    </ul>
                </div>
            </article>
        </Link>
    }
}
