//! Blog Post Page
//!
//! Full article with a reading-progress bar, share links and related posts.
//! Posts without a written body fall back to their excerpt.

use leptos::prelude::*;
use leptos_viewport::{document_extent, use_window_scroll};
use rajhub_content::data::{article, blog_post, related_posts};
use rajhub_content::format::{format_date, format_read_time};
use rajhub_content::scroll::reading_progress;

use super::NotFoundPage;
use crate::components::BlogCard;
use crate::markdown::render_article;
use crate::router::Link;
use crate::share::{current_url, ShareTarget};

const RELATED_POSTS: usize = 3;

#[component]
pub fn BlogDetailsPage(slug: String) -> impl IntoView {
    let Some(post) = blog_post(&slug) else {
        log::warn!("unknown blog post: {}", slug);
        return view! { <NotFoundPage path=format!("/blogs/{slug}") /> }.into_any();
    };

    let full = article(&slug);
    let body_html = full.map(|a| render_article(&a.body));
    let tags = full.map(|a| a.tags.clone()).unwrap_or_else(|| post.tags.clone());
    let related = related_posts(&slug, RELATED_POSTS);

    let scroll_y = use_window_scroll();
    let progress = Memo::new(move |_| {
        let (document_height, viewport_height) = document_extent();
        reading_progress(scroll_y.get(), document_height, viewport_height)
    });

    let page_url = current_url();
    let theme = post.category.theme_key();

    let body = match body_html {
        Some(html) => view! { <div class="article-body" inner_html=html></div> }.into_any(),
        None => view! {
            <div class="article-body">
                <p>{post.excerpt.clone()}</p>
                <p class="article-pending">"The full article is on its way. Check back soon."</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div
            class="reading-progress"
            role="progressbar"
            style=move || format!("width: {:.1}%", progress.get() * 100.0)
        ></div>

        <article class="blog-details">
            <Link href="/blogs" class="back-link">"← Back to all articles"</Link>

            <header class="article-header">
                <span class=format!("category-badge badge-{theme}")>{post.category.label()}</span>
                <h1>{post.title.clone()}</h1>
                <div class="article-meta">
                    <span>"By Raj"</span>
                    <span>{format_date(post.published)}</span>
                    <span>{format_read_time(post.read_time_minutes)}</span>
                </div>
            </header>

            <img class="article-image" src=post.image.clone() alt=post.title.clone() />

            {body}

            <ul class="tag-list">
                {tags.into_iter().map(|tag| view! { <li class="tag">"#" {tag}</li> }).collect_view()}
            </ul>

            <div class="share-links">
                <span>"Share:"</span>
                {ShareTarget::ALL
                    .into_iter()
                    .map(|target| {
                        view! {
                            <a
                                class="share-link"
                                href=target.url(&page_url, &post.title)
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {target.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </article>

        {(!related.is_empty()).then(|| {
            view! {
                <section class="related-posts">
                    <h2 class="section-title">"Keep reading"</h2>
                    <div class="blog-grid">
                        {related.iter().map(|p| view! { <BlogCard post=(*p).clone() /> }).collect_view()}
                    </div>
                </section>
            }
        })}
    }
    .into_any()
}
