//! Channel Statistics Page
//!
//! Per-channel metric cards plus growth, views and engagement charts. The
//! category buttons focus the growth chart on one channel.

use leptos::prelude::*;
use rajhub_content::data::channel_metrics;
use rajhub_content::models::{ChannelMetrics, MetricValue};
use rajhub_content::CategoryFilter;

use crate::components::{EngagementChart, SubscriberChart, ViewsChart};

#[component]
pub fn ChannelStatsPage() -> impl IntoView {
    let (selected, set_selected) = signal(CategoryFilter::All);

    view! {
        <div class="stats-page">
            <header class="page-header">
                <h1>"Channel Statistics"</h1>
                <p>"How the three channels are growing, month by month."</p>
            </header>

            <section class="metric-grid">
                {channel_metrics().into_iter().map(|metrics| view! { <MetricCard metrics /> }).collect_view()}
            </section>

            <section class="chart-panel">
                <div class="chart-header">
                    <h2>"Subscriber Growth"</h2>
                    <div class="filter-buttons">
                        {CategoryFilter::OPTIONS
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        class=move || {
                                            if selected.get() == option { "filter-button active" } else { "filter-button" }
                                        }
                                        on:click=move |_| set_selected.set(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <SubscriberChart selected=selected />
            </section>

            <section class="chart-panel">
                <h2>"Monthly Views"</h2>
                <ViewsChart />
            </section>

            <section class="chart-panel">
                <h2>"Engagement"</h2>
                <EngagementChart />
            </section>
        </div>
    }
}

#[component]
fn MetricCard(metrics: ChannelMetrics) -> impl IntoView {
    view! {
        <article class=format!("metric-card border-{}", metrics.category.theme_key())>
            <h3 style=format!("color: {}", metrics.color)>{metrics.name}</h3>
            <MetricRow label="Subscribers" metric=metrics.subscribers />
            <MetricRow label="Views" metric=metrics.views />
            <MetricRow label="Watch time" metric=metrics.watch_time />
            <MetricRow label="Avg. views" metric=metrics.avg_views />
        </article>
    }
}

#[component]
fn MetricRow(label: &'static str, metric: MetricValue) -> impl IntoView {
    let (arrow, trend_class) = if metric.trending_up { ("▲", "trend up") } else { ("▼", "trend down") };

    view! {
        <div class="metric-row">
            <span class="metric-label">{label}</span>
            <span class="metric-value">{metric.value}</span>
            <span class=trend_class>{arrow} " " {metric.change}</span>
        </div>
    }
}
