//! Mobile Header & Navigation
//!
//! Sticky top bar for small screens. It switches to a compact, opaque
//! style once the page has scrolled and opens a full-screen menu drawer.

use leptos::prelude::*;
use leptos_viewport::use_window_scroll;
use rajhub_content::routes::NAV_ITEMS;
use rajhub_content::scroll::is_scrolled;

use crate::router::Link;
use crate::store::{close_mobile_menu, toggle_mobile_menu, use_layout_store, LayoutStateStoreFields};

#[component]
pub fn MobileHeader() -> impl IntoView {
    let store = use_layout_store();
    let scroll_y = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    view! {
        <header class=move || if scrolled.get() { "mobile-header scrolled" } else { "mobile-header" }>
            <Link href="/" class="mobile-logo">"RajHub"</Link>
            <button
                class="mobile-menu-button"
                aria-label="Toggle menu"
                aria-expanded=move || store.mobile_menu_open().get().to_string()
                on:click=move |_| toggle_mobile_menu(&store)
            >
                {move || if store.mobile_menu_open().get() { "✕" } else { "☰" }}
            </button>
        </header>
    }
}

#[component]
pub fn MobileNav() -> impl IntoView {
    let store = use_layout_store();

    view! {
        <Show when=move || store.mobile_menu_open().get()>
            <div class="mobile-nav-backdrop" on:click=move |_| close_mobile_menu(&store)></div>
            <nav class="mobile-nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(label, path)| {
                        view! {
                            <Link href=*path class="mobile-nav-link" nav=true>
                                {*label}
                            </Link>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
