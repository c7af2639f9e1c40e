//! Site Footer

use leptos::prelude::*;
use rajhub_content::data::SOCIAL_LINKS;
use rajhub_content::Category;

use crate::router::Link;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <p class="footer-logo">"RajHub"</p>
                <p class="footer-tagline">"Three channels, one creator."</p>
            </div>

            <div class="footer-channels">
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <span class=format!("footer-channel text-{}", category.theme_key())>
                                {category.icon()} " " {category.label()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="footer-links">
                <Link href="/blogs" class="footer-link">"Blog"</Link>
                <Link href="/contact" class="footer-link">"Contact"</Link>
                {SOCIAL_LINKS
                    .iter()
                    .map(|(name, url)| {
                        view! {
                            <a href=*url class="footer-link" target="_blank" rel="noopener noreferrer">
                                {*name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="footer-copy">{format!("© {year} RajHub. All rights reserved.")}</p>
        </footer>
    }
}
