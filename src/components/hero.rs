//! Cinematic Hero
//!
//! Full-width home banner rotating through the three channels. Picking a
//! channel with the dots pins it and stops the rotation.

use leptos::prelude::*;
use rajhub_content::data::hero_channels;
use rajhub_content::models::HeroChannel;

use crate::animation::use_hero_rotation;
use crate::context::use_app_context;
use crate::router::Link;
use crate::store::{set_active_channel, use_layout_store};

#[component]
pub fn CinematicHero() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_layout_store();
    let channels = StoredValue::new(hero_channels());

    let Some(hero) = use_hero_rotation(channels.with_value(Vec::len), ctx.config().hero) else {
        return ().into_any();
    };

    // Page background follows the slide on screen
    Effect::new(move |_| {
        let index = hero.active.get();
        let category = channels.with_value(|list| list.get(index).map(|c| c.category));
        set_active_channel(&store, category);
    });
    on_cleanup(move || set_active_channel(&store, None));

    let slide = move || {
        channels.with_value(|list| list.get(hero.active.get()).cloned()).map(|channel| view! { <HeroSlide channel /> })
    };

    view! {
        <section class="cinematic-hero">
            {slide}
            <div class="hero-dots" role="tablist">
                {move || {
                    channels.with_value(|list| {
                        list.iter()
                            .enumerate()
                            .map(|(index, channel)| {
                                let label = format!("Show {}", channel.name);
                                let class = move || {
                                    if hero.active.get() == index { "hero-dot active" } else { "hero-dot" }
                                };
                                view! {
                                    <button class=class aria-label=label on:click=move |_| hero.select(index)></button>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
            <Show when=move || hero.autoplay.get()>
                <div class="hero-progress"></div>
            </Show>
        </section>
    }
    .into_any()
}

#[component]
fn HeroSlide(channel: HeroChannel) -> impl IntoView {
    let theme = channel.category.theme_key();

    view! {
        <div class=format!("hero-slide bg-gradient-{theme}")>
            <span class="hero-icon">{channel.category.icon()}</span>
            <h1 class="hero-title">{channel.name}</h1>
            <p class="hero-tagline">{channel.tagline}</p>
            <p class="hero-subtitle">{channel.subtitle}</p>
            <dl class="hero-stats">
                <div><dt>"Subscribers"</dt><dd>{channel.subscribers}</dd></div>
                <div><dt>"Views"</dt><dd>{channel.views}</dd></div>
                <div><dt>"Videos"</dt><dd>{channel.videos}</dd></div>
            </dl>
            <Link href="/channels" class="hero-cta">{channel.cta}</Link>
        </div>
    }
}
