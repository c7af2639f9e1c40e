//! Blog Listing Page
//!
//! Search box and category buttons over the post catalogue. Featured
//! matches get the wide cards at the top, the rest go in the grid.

use leptos::prelude::*;
use rajhub_content::data::blog_posts;
use rajhub_content::{filter, partition, CategoryFilter, Partitioned};
use wasm_bindgen::JsCast;

use crate::components::BlogCard;

#[component]
pub fn BlogsPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(CategoryFilter::All);

    let results: Memo<Partitioned<'static>> =
        Memo::new(move |_| partition(query.with(|q| filter(blog_posts(), category.get(), q))));

    let clear = move |_: web_sys::MouseEvent| {
        set_query.set(String::new());
        set_category.set(CategoryFilter::All);
    };

    view! {
        <div class="blogs-page">
            <header class="page-header">
                <h1>"Blog & Articles"</h1>
                <p>"Tutorials, gear talk and the stories behind the stories."</p>
            </header>

            <div class="blog-filters">
                <input
                    type="search"
                    class="blog-search"
                    placeholder="Search articles..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                            set_query.set(input.value());
                        }
                    }
                />
                <div class="filter-buttons">
                    {CategoryFilter::OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == option { "filter-button active" } else { "filter-button" }
                                    }
                                    on:click=move |_| set_category.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="result-count">
                    {move || match results.with(Partitioned::len) {
                        1 => "1 article".to_string(),
                        n => format!("{n} articles"),
                    }}
                </p>
            </div>

            <Show
                when=move || !results.with(Partitioned::is_empty)
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p>"No articles match your search."</p>
                            <button class="filter-button" on:click=clear>"Clear filters"</button>
                        </div>
                    }
                }
            >
                <Show when=move || results.with(|p| !p.featured.is_empty())>
                    <section class="featured-posts">
                        <h2 class="section-title">"Featured"</h2>
                        <div class="featured-grid">
                            {move || {
                                results
                                    .get()
                                    .featured
                                    .into_iter()
                                    .map(|post| view! { <BlogCard post=post.clone() featured=true /> })
                                    .collect_view()
                            }}
                        </div>
                    </section>
                </Show>
                <section class="all-posts">
                    <div class="blog-grid">
                        {move || {
                            results
                                .get()
                                .regular
                                .into_iter()
                                .map(|post| view! { <BlogCard post=post.clone() /> })
                                .collect_view()
                        }}
                    </div>
                </section>
            </Show>
        </div>
    }
}
