//! 404 Page

use leptos::prelude::*;

use crate::router::Link;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    log::error!("404: no route for {}", path);

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <p class="not-found-path">{path}</p>
            <Link href="/" class="cta-button">"Return to Home"</Link>
        </div>
    }
}
