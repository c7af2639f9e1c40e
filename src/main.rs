//! RajHub Frontend Entry Point

mod animation;
mod app;
mod components;
mod context;
mod logging;
mod markdown;
mod pages;
mod router;
mod share;
mod store;

use app::App;
use leptos::prelude::*;
use rajhub_content::SiteConfig;

/// Timing and tuning knobs, compiled in
const SITE_CONFIG: &str = include_str!("../site.json");

fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(config.level_filter());
    if let Some(err) = rejected {
        log::warn!("site.json rejected, using defaults: {}", err);
    }
    log::info!("RajHub starting (log level {})", config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
