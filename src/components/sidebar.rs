//! Sidebar Component
//!
//! Desktop navigation: logo, page links and channel shortcuts. Hovering a
//! channel tints the page with its theme.

use leptos::prelude::*;
use rajhub_content::routes::NAV_ITEMS;
use rajhub_content::Category;

use crate::router::Link;
use crate::store::{set_active_channel, toggle_sidebar, use_layout_store, LayoutStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_layout_store();
    let open = move || store.sidebar_open().get();

    view! {
        <aside class=move || if open() { "sidebar" } else { "sidebar collapsed" }>
            <div class="sidebar-header">
                <Link href="/" class="sidebar-logo">
                    <span class="logo-mark">"R"</span>
                    <span class="logo-text">"RajHub"</span>
                </Link>
                <button
                    class="sidebar-toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| toggle_sidebar(&store)
                >
                    {move || if open() { "«" } else { "»" }}
                </button>
            </div>

            <nav class="sidebar-nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(label, path)| {
                        view! {
                            <Link href=*path class="sidebar-link" nav=true>
                                <span class="sidebar-label">{*label}</span>
                            </Link>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-channels">
                <p class="sidebar-section-title">"Channels"</p>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div
                                class="sidebar-channel"
                                on:mouseenter=move |_| set_active_channel(&store, Some(category))
                                on:mouseleave=move |_| set_active_channel(&store, None)
                            >
                                <Link href="/channels" class="sidebar-link">
                                    <span class=format!("channel-dot dot-{}", category.theme_key())></span>
                                    <span class="sidebar-label">{category.label()}</span>
                                </Link>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}
