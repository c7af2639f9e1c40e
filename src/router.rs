//! Client-side Router
//!
//! Keeps the `Route` signal in step with the browser History API and
//! provides the `Link` component used for in-app navigation.

use leptos::prelude::*;
use rajhub_content::Route;
use wasm_bindgen::JsValue;

use crate::context::use_app_context;

/// Path of the current location, `/` if unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn push_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|win| win.history().ok()) else {
        log::warn!("history unavailable, cannot push {}", path);
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::error!("pushState({}) failed: {:?}", path, err);
    }
}

/// Follow back/forward navigation for the lifetime of the current owner
pub fn listen_popstate() {
    let ctx = use_app_context();
    let listener = window_event_listener(leptos::ev::popstate, move |_| {
        let route = Route::parse(&current_path());
        log::debug!("popstate -> {:?}", route);
        ctx.sync_route(route);
    });
    on_cleanup(move || listener.remove());
}

/// In-app anchor: plain clicks navigate without a reload, modified clicks
/// fall through to the browser.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional)] class: &'static str,
    /// Add `active` while the current route lives under `href`
    #[prop(optional)]
    nav: bool,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let target = href.clone();

    let class_name = {
        let href = href.clone();
        move || {
            if nav && ctx.route.get().is_under(&href) {
                format!("{class} active")
            } else {
                class.to_string()
            }
        }
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(Route::parse(&target));
    };

    view! {
        <a href=href class=class_name on:click=on_click>
            {children()}
        </a>
    }
}
