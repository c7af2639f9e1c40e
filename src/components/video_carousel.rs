//! Featured Video Carousel
//!
//! Horizontally scrolling row of video cards with arrow buttons. The arrows
//! disable themselves at either end of the track.

use leptos::prelude::*;
use leptos_viewport::{horizontal_extent, scroll_by_x};
use rajhub_content::data::featured_videos;
use rajhub_content::scroll::{ScrollDirection, ScrollMetrics};

use crate::context::use_app_context;

#[component]
pub fn FeaturedCarousel() -> impl IntoView {
    let carousel = use_app_context().config().carousel;
    let track_ref = NodeRef::<leptos::html::Div>::new();
    let (can_left, set_can_left) = signal(false);
    let (can_right, set_can_right) = signal(true);

    let refresh = move || {
        let Some(track) = track_ref.get_untracked() else { return };
        let (scroll_left, scroll_width, client_width) = horizontal_extent(&track);
        let metrics = ScrollMetrics { scroll_left, scroll_width, client_width };
        set_can_left.set(metrics.can_scroll_left());
        set_can_right.set(metrics.can_scroll_right_with(carousel.edge_tolerance_px));
    };

    // Initial edge state once the track is mounted
    Effect::new(move |_| {
        if track_ref.get().is_some() {
            refresh();
        }
    });
    let resize = window_event_listener(leptos::ev::resize, move |_| refresh());
    on_cleanup(move || resize.remove());

    let scroll = move |direction: ScrollDirection| {
        if let Some(track) = track_ref.get_untracked() {
            scroll_by_x(&track, direction.offset(carousel.step_px));
        }
    };

    view! {
        <section class="video-carousel">
            <div class="carousel-header">
                <h2>"Featured Videos"</h2>
                <div class="carousel-arrows">
                    <button
                        class="carousel-arrow"
                        aria-label="Scroll left"
                        disabled=move || !can_left.get()
                        on:click=move |_| scroll(ScrollDirection::Left)
                    >
                        "‹"
                    </button>
                    <button
                        class="carousel-arrow"
                        aria-label="Scroll right"
                        disabled=move || !can_right.get()
                        on:click=move |_| scroll(ScrollDirection::Right)
                    >
                        "›"
                    </button>
                </div>
            </div>
            <div class="carousel-track" node_ref=track_ref on:scroll=move |_| refresh()>
                {featured_videos()
                    .into_iter()
                    .map(|video| {
                        let theme = video.category.theme_key();
                        view! {
                            <article class=format!("video-card border-{theme}")>
                                <div class="video-thumb">
                                    <img src=video.thumbnail alt=video.title.clone() loading="lazy" />
                                    <span class="video-duration">{video.duration}</span>
                                </div>
                                <span class=format!("video-channel text-{theme}")>{video.category.label()}</span>
                                <h3 class="video-title">{video.title}</h3>
                                <p class="video-views">{video.views} " views"</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
