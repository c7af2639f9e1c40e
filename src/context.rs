//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use rajhub_content::{Route, SiteConfig};

use crate::router;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Site configuration loaded at startup
    config: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), config: SiteConfig) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            config: StoredValue::new(config),
        }
    }

    /// Push a history entry and switch page
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        router::push_path(&route.path());
        self.set_route.set(route);
    }

    /// Switch page without touching history (back/forward)
    pub fn sync_route(&self, route: Route) {
        self.set_route.set(route);
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
