//! Stats Charts
//!
//! Inline SVG charts for the channel statistics page. Geometry comes from
//! `rajhub_content::chart`; these components only draw it.

use leptos::prelude::*;
use rajhub_content::chart::{bar_heights, line_points, polyline, series_max};
use rajhub_content::data::{subscriber_series, ENGAGEMENT, MONTHLY_VIEWS, SUBSCRIBER_GROWTH};
use rajhub_content::format::format_compact;
use rajhub_content::{Category, CategoryFilter};

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;

/// Subscriber growth, one line per channel. `selected` hides the others.
#[component]
pub fn SubscriberChart(#[prop(into)] selected: Signal<CategoryFilter>) -> impl IntoView {
    let all_series: Vec<(Category, Vec<u64>)> =
        Category::ALL.into_iter().map(|c| (c, subscriber_series(c))).collect();
    let max = series_max(all_series.iter().map(|(_, s)| s.as_slice()));

    let lines = all_series
        .into_iter()
        .map(|(category, series)| {
            let points = polyline(&line_points(&series, max, CHART_WIDTH, CHART_HEIGHT));
            let visible = move || selected.get().accepts(category);
            view! {
                <polyline
                    class=format!("chart-line stroke-{}", category.theme_key())
                    points=points
                    fill="none"
                    stroke-width="3"
                    opacity=move || if visible() { "1" } else { "0.1" }
                />
            }
        })
        .collect_view();

    view! {
        <figure class="chart">
            <svg viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}") class="chart-svg" preserveAspectRatio="none">
                {lines}
            </svg>
            <figcaption class="chart-axis">
                {SUBSCRIBER_GROWTH.iter().map(|p| view! { <span>{p.month}</span> }).collect_view()}
            </figcaption>
            <p class="chart-note">{format!("Peak: {}", format_compact(max))}</p>
        </figure>
    }
}

/// Combined monthly views as vertical bars
#[component]
pub fn ViewsChart() -> impl IntoView {
    let values: Vec<u64> = MONTHLY_VIEWS.iter().map(|p| p.views).collect();
    let heights = bar_heights(&values, CHART_HEIGHT);
    let slot = CHART_WIDTH / values.len().max(1) as f64;

    view! {
        <figure class="chart">
            <svg viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}") class="chart-svg">
                {heights
                    .iter()
                    .enumerate()
                    .map(|(i, &h)| {
                        view! {
                            <rect
                                class="chart-bar"
                                x=format!("{:.1}", slot * i as f64 + slot * 0.15)
                                y=format!("{:.1}", CHART_HEIGHT - h)
                                width=format!("{:.1}", slot * 0.7)
                                height=format!("{:.1}", h)
                                rx="4"
                            />
                        }
                    })
                    .collect_view()}
            </svg>
            <figcaption class="chart-axis">
                {MONTHLY_VIEWS
                    .iter()
                    .map(|p| view! { <span title=format_compact(p.views)>{p.month}</span> })
                    .collect_view()}
            </figcaption>
        </figure>
    }
}

/// Likes / comments / shares per channel, as horizontal bar groups
#[component]
pub fn EngagementChart() -> impl IntoView {
    view! {
        <div class="engagement-chart">
            {ENGAGEMENT
                .iter()
                .map(|point| {
                    let values: Vec<u64> = Category::ALL.into_iter().map(|c| point.for_category(c)).collect();
                    let widths = bar_heights(&values, 100.0);
                    view! {
                        <div class="engagement-group">
                            <p class="engagement-metric">{point.metric}</p>
                            {Category::ALL
                                .into_iter()
                                .zip(values.into_iter().zip(widths))
                                .map(|(category, (value, width))| {
                                    view! {
                                        <div class="engagement-row">
                                            <span class="engagement-label">{category.label()}</span>
                                            <div class="engagement-track">
                                                <div
                                                    class=format!("engagement-bar bg-{}", category.theme_key())
                                                    style=format!("width: {width:.1}%")
                                                ></div>
                                            </div>
                                            <span class="engagement-value">{format_compact(value)}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
