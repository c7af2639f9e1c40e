//! Stats Counter Section
//!
//! Home-page totals that count up the first time the section scrolls into
//! view.

use leptos::prelude::*;
use leptos_viewport::{use_in_view, InViewOptions};
use rajhub_content::data::home_stats;
use rajhub_content::format::format_compact;
use rajhub_content::models::StatHighlight;

use crate::animation::use_animated_counter;
use crate::context::use_app_context;

#[component]
pub fn StatsCounter() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let in_view = use_in_view(move || section_ref.get(), InViewOptions::with_margin("-100px"));

    view! {
        <section class="stats-counter" node_ref=section_ref>
            {home_stats()
                .into_iter()
                .map(|stat| view! { <AnimatedStat stat trigger=in_view /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn AnimatedStat(stat: StatHighlight, #[prop(into)] trigger: Signal<bool>) -> impl IntoView {
    let config = use_app_context().config().counter;
    let value = use_animated_counter(stat.value, trigger, config);
    let suffix = stat.suffix;

    view! {
        <div class="stat">
            <p class="stat-value">{move || format!("{}{}", format_compact(value.get()), suffix)}</p>
            <p class="stat-label">{stat.label}</p>
        </div>
    }
}
