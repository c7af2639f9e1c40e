//! Toast Notifications
//!
//! Short-lived messages in the corner of the screen. Each toast removes
//! itself after `TOAST_LIFETIME_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Toast queue provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        let toast = Toast {
            id,
            title: title.into(),
            description: description.into(),
        };
        log::debug!("toast #{}: {}", id, toast.title);
        self.toasts.update(|list| list.push(toast));

        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toaster.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-region" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" role="status">
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button class="toast-close" aria-label="Dismiss" on:click=move |_| toaster.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_default_toaster_is_empty() {
        Owner::new().with(|| {
            let toaster = Toaster::default();
            assert!(toaster.toasts.get_untracked().is_empty());
            assert_eq!(toaster.next_id.get_value(), 0);
        });
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        Owner::new().with(|| {
            let toaster = Toaster::default();
            toaster.toasts.update(|list| {
                list.push(Toast { id: 1, title: "Sent".into(), description: String::new() });
                list.push(Toast { id: 2, title: "Saved".into(), description: String::new() });
            });
            toaster.dismiss(1);
            toaster.dismiss(9);
            let left: Vec<u32> = toaster.toasts.get_untracked().iter().map(|t| t.id).collect();
            assert_eq!(left, vec![2]);
        });
    }
}
