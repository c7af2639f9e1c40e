//! Home Page

use leptos::prelude::*;
use rajhub_content::data::{blog_posts, channel_profiles};

use crate::components::{BlogCard, CinematicHero, FeaturedCarousel, StatsCounter};
use crate::router::Link;
use crate::store::{set_active_channel, use_layout_store};

const LATEST_POSTS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_layout_store();

    view! {
        <div class="home-page">
            <CinematicHero />
            <StatsCounter />

            <section class="channel-teasers">
                <h2 class="section-title">"Three Worlds, One Creator"</h2>
                <div class="teaser-grid">
                    {channel_profiles()
                        .iter()
                        .map(|profile| {
                            let category = profile.category;
                            view! {
                                <div
                                    class=format!("teaser-card bg-gradient-{}", category.theme_key())
                                    on:mouseenter=move |_| set_active_channel(&store, Some(category))
                                    on:mouseleave=move |_| set_active_channel(&store, None)
                                >
                                    <span class="teaser-icon">{category.icon()}</span>
                                    <h3>{profile.name.clone()}</h3>
                                    <p>{profile.tagline.clone()}</p>
                                    <p class="teaser-stat">{profile.stats.subscribers.clone()} " subscribers"</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <Link href="/channels" class="section-link">"Explore all channels →"</Link>
            </section>

            <FeaturedCarousel />

            <section class="latest-posts">
                <h2 class="section-title">"Latest from the Blog"</h2>
                <div class="blog-grid">
                    {blog_posts()
                        .iter()
                        .take(LATEST_POSTS)
                        .cloned()
                        .map(|post| view! { <BlogCard post /> })
                        .collect_view()}
                </div>
                <Link href="/blogs" class="section-link">"Read all articles →"</Link>
            </section>

            <section class="home-cta">
                <h2>"Want to work together?"</h2>
                <p>"Sponsorships, collaborations or just a hello. The inbox is open."</p>
                <Link href="/contact" class="cta-button">"Get in touch"</Link>
            </section>
        </div>
    }
}
