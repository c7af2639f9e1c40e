//! Channels Page
//!
//! Filter pills narrow the channel cards; each card has its own
//! Latest / Playlists / About tabs.

use leptos::prelude::*;
use rajhub_content::data::channel_profiles;
use rajhub_content::models::{ChannelProfile, ChannelTab};
use rajhub_content::{filter_channels, CategoryFilter};

use crate::router::Link;
use crate::store::{set_active_channel, use_layout_store};

fn pill_label(option: CategoryFilter) -> &'static str {
    match option {
        CategoryFilter::All => "All Channels",
        CategoryFilter::Only(category) => category.label(),
    }
}

#[component]
pub fn ChannelsPage() -> impl IntoView {
    let store = use_layout_store();
    let (active_filter, set_active_filter) = signal(CategoryFilter::All);
    on_cleanup(move || set_active_channel(&store, None));

    let visible = move || {
        filter_channels(channel_profiles(), active_filter.get())
            .into_iter()
            .cloned()
            .map(|profile| view! { <ChannelCard profile /> })
            .collect_view()
    };

    view! {
        <div class="channels-page">
            <header class="page-header">
                <h1>"The Channels"</h1>
                <p>"Code, games and ghost stories. Pick your poison."</p>
                <Link href="/channels/stats" class="section-link">"See the numbers →"</Link>
            </header>

            <div class="filter-buttons">
                {CategoryFilter::OPTIONS
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class=move || {
                                    if active_filter.get() == option { "filter-button active" } else { "filter-button" }
                                }
                                on:click=move |_| set_active_filter.set(option)
                            >
                                {pill_label(option)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {visible}
        </div>
    }
}

#[component]
fn ChannelCard(profile: ChannelProfile) -> impl IntoView {
    let store = use_layout_store();
    let (active_tab, set_active_tab) = signal(ChannelTab::default());
    let category = profile.category;
    let theme = category.theme_key();
    let stats = profile.stats;

    let latest = profile
        .latest_videos
        .into_iter()
        .map(|video| {
            view! {
                <li class="channel-video">
                    <span class="channel-video-title">{video.title}</span>
                    <span class="channel-video-meta">{video.views} " views · " {video.duration}</span>
                </li>
            }
        })
        .collect_view();
    let playlists = profile.playlists.into_iter().map(|p| view! { <li class="tag">{p}</li> }).collect_view();

    view! {
        <section
            class=format!("channel-card border-{theme}")
            on:mouseenter=move |_| set_active_channel(&store, Some(category))
            on:mouseleave=move |_| set_active_channel(&store, None)
        >
            <div class=format!("channel-banner bg-gradient-{theme}")>
                <span class="channel-icon">{category.icon()}</span>
                <div>
                    <h2>{profile.name}</h2>
                    <p class="channel-tagline">{profile.tagline}</p>
                </div>
            </div>

            <dl class="channel-stats">
                <div><dt>"Subscribers"</dt><dd>{stats.subscribers}</dd></div>
                <div><dt>"Videos"</dt><dd>{stats.videos}</dd></div>
                <div><dt>"Total views"</dt><dd>{stats.views}</dd></div>
                <div><dt>"Avg. views"</dt><dd>{stats.avg_views}</dd></div>
            </dl>

            <div class="channel-tabs" role="tablist">
                {ChannelTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                role="tab"
                                class=move || if active_tab.get() == tab { "channel-tab active" } else { "channel-tab" }
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ul class="channel-videos" hidden=move || active_tab.get() != ChannelTab::Latest>
                {latest}
            </ul>
            <ul class="tag-list channel-playlists" hidden=move || active_tab.get() != ChannelTab::Playlists>
                {playlists}
            </ul>
            <p class="channel-description" hidden=move || active_tab.get() != ChannelTab::About>
                {profile.description}
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rajhub_content::Category;

    #[test]
    fn test_pill_labels() {
        let labels: Vec<&str> = CategoryFilter::OPTIONS.into_iter().map(pill_label).collect();
        assert_eq!(labels, ["All Channels", "CodeDecode", "GameChanger", "Horror Night"]);
        assert_eq!(pill_label(CategoryFilter::Only(Category::HorrorNight)), "Horror Night");
    }
}
