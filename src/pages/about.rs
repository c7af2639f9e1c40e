//! About Page
//!
//! Creator bio, milestone timeline and social links. Timeline entries fade
//! in as they scroll into view.

use leptos::prelude::*;
use leptos_viewport::{use_in_view, InViewOptions};
use rajhub_content::data::{milestones, SOCIAL_LINKS};
use rajhub_content::models::Milestone;
use rajhub_content::Category;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-intro">
                <h1>"Hi, I'm Raj"</h1>
                <p>
                    "Developer by day, gamer by night, and storyteller when the lights go out. "
                    "RajHub is home to three channels that grew out of three obsessions."
                </p>
                <ul class="about-channels">
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <li class=format!("about-channel text-{}", category.theme_key())>
                                    {category.icon()} " " {category.label()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="timeline">
                <h2 class="section-title">"The Journey"</h2>
                {milestones()
                    .into_iter()
                    .enumerate()
                    .map(|(index, milestone)| view! { <TimelineEntry milestone index /> })
                    .collect_view()}
            </section>

            <section class="about-social">
                <h2 class="section-title">"Find me online"</h2>
                <div class="social-links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(name, url)| {
                            view! {
                                <a href=*url class="social-link" target="_blank" rel="noopener noreferrer">{*name}</a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn TimelineEntry(milestone: Milestone, index: usize) -> impl IntoView {
    let entry_ref = NodeRef::<leptos::html::Div>::new();
    let visible = use_in_view(move || entry_ref.get(), InViewOptions::with_margin("-50px"));
    let side = if index % 2 == 0 { "left" } else { "right" };

    view! {
        <div
            node_ref=entry_ref
            class=move || {
                format!("timeline-entry {side}{}", if visible.get() { " visible" } else { "" })
            }
        >
            <span class="timeline-year">{milestone.year}</span>
            <h3>{milestone.title}</h3>
            <p>{milestone.description}</p>
        </div>
    }
}
