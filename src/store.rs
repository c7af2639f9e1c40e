//! Layout State Store
//!
//! Page-wide look-and-feel state, shared via reactive_stores for
//! field-level reactivity.

use leptos::prelude::*;
use rajhub_content::Category;
use reactive_stores::Store;

#[derive(Clone, Debug, Store)]
pub struct LayoutState {
    /// Desktop sidebar expanded
    pub sidebar_open: bool,
    /// Channel whose theme tints the page background
    pub active_channel: Option<Category>,
    /// Mobile navigation drawer shown
    pub mobile_menu_open: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            active_channel: None,
            mobile_menu_open: false,
        }
    }
}

/// Background theme class for the active channel
pub fn theme_class(channel: Option<Category>) -> String {
    match channel {
        Some(category) => format!("theme-{}", category.theme_key()),
        None => "theme-default".to_string(),
    }
}

/// Type alias for the store
pub type LayoutStore = Store<LayoutState>;

/// Get the layout store from context
pub fn use_layout_store() -> LayoutStore {
    expect_context::<LayoutStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn toggle_sidebar(store: &LayoutStore) {
    store.sidebar_open().update(|open| *open = !*open);
}

pub fn toggle_mobile_menu(store: &LayoutStore) {
    store.mobile_menu_open().update(|open| *open = !*open);
}

pub fn close_mobile_menu(store: &LayoutStore) {
    if store.mobile_menu_open().get_untracked() {
        store.mobile_menu_open().set(false);
    }
}

pub fn set_active_channel(store: &LayoutStore, channel: Option<Category>) {
    if store.active_channel().get_untracked() != channel {
        log::debug!("active channel -> {:?}", channel);
        store.active_channel().set(channel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_class() {
        assert_eq!(theme_class(None), "theme-default");
        assert_eq!(theme_class(Some(Category::HorrorNight)), "theme-horror");
        assert_eq!(theme_class(Some(Category::CodeDecode)), "theme-codedecode");
    }

    #[test]
    fn test_default_layout() {
        let state = LayoutState::default();
        assert!(state.sidebar_open);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_active_channel_enter_then_leave() {
        leptos::reactive::owner::Owner::new().with(|| {
            let store = Store::new(LayoutState::default());
            set_active_channel(&store, Some(Category::HorrorNight));
            assert_eq!(store.active_channel().get_untracked(), Some(Category::HorrorNight));
            set_active_channel(&store, None);
            assert_eq!(store.active_channel().get_untracked(), None);
            assert_eq!(theme_class(store.active_channel().get_untracked()), "theme-default");
        });
    }
}
