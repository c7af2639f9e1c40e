//! RajHub Frontend App
//!
//! Top-level shell: sidebar, mobile header, routed page, footer, toasts.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_viewport::scroll_to_top;
use rajhub_content::data::blog_post;
use rajhub_content::{Route, SiteConfig};
use reactive_stores::Store;

use crate::components::{Footer, MobileHeader, MobileNav, Sidebar, ToastHost, Toaster};
use crate::context::AppContext;
use crate::pages::{
    AboutPage, BlogDetailsPage, BlogsPage, ChannelStatsPage, ChannelsPage, ContactPage, HomePage, NotFoundPage,
};
use crate::router;
use crate::store::{close_mobile_menu, theme_class, LayoutState, LayoutStateStoreFields};

const DESCRIPTION: &str =
    "RajHub: CodeDecode programming tutorials, GameChanger gaming and Horror Night storytelling from one creator.";

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    // State
    let (route, set_route) = signal(Route::parse(&router::current_path()));
    let layout = Store::new(LayoutState::default());

    // Provide context to all children
    provide_context(AppContext::new((route, set_route), config));
    provide_context(layout);
    provide_context(Toaster::new());
    router::listen_popstate();

    // Page change: top of page, drawer closed
    Effect::new(move |_| {
        let current = route.get();
        log::info!("route -> {}", current.path());
        scroll_to_top();
        close_mobile_menu(&layout);
    });

    let shell_class = move || {
        let collapsed = if layout.sidebar_open().get() { "" } else { " sidebar-collapsed" };
        format!("app-layout {}{}", theme_class(layout.active_channel().get()), collapsed)
    };

    let page = move || match route.get() {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Channels => view! { <ChannelsPage /> }.into_any(),
        Route::ChannelStats => view! { <ChannelStatsPage /> }.into_any(),
        Route::Blogs => view! { <BlogsPage /> }.into_any(),
        Route::BlogPost(slug) => view! { <BlogDetailsPage slug /> }.into_any(),
        Route::Contact => view! { <ContactPage /> }.into_any(),
        Route::NotFound(path) => view! { <NotFoundPage path /> }.into_any(),
    };

    view! {
        <Title text=move || document_title(&route.get()) />
        <Meta name="description" content=DESCRIPTION />

        <div class=shell_class>
            <Sidebar />
            <div class="app-main">
                <MobileHeader />
                <MobileNav />
                <main class="page">{page}</main>
                <Footer />
            </div>
            <ToastHost />
        </div>
    }
}

/// Browser tab title; blog posts use their own headline
fn document_title(route: &Route) -> String {
    match route {
        Route::BlogPost(slug) => blog_post(slug)
            .map(|post| format!("{} | RajHub", post.title))
            .unwrap_or_else(|| route.title()),
        other => other.title(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(&Route::Contact), "Contact | RajHub");
        assert_eq!(document_title(&Route::BlogPost("missing".into())), "Article | RajHub");

        let post = &rajhub_content::data::blog_posts()[0];
        assert_eq!(
            document_title(&Route::BlogPost(post.id.clone())),
            format!("{} | RajHub", post.title)
        );
    }
}
