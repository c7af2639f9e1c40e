//! Leptos Viewport Utilities
//!
//! Small browser hooks for Leptos:
//! - `use_in_view`: flips to true when an element enters the viewport
//! - `use_interval`: a cancellable repeating timer, at most one per call site
//! - `use_window_scroll`: reactive `window.scrollY`
//! - horizontal scroll helpers for carousels

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Options for [`use_in_view`]
#[derive(Clone, Debug)]
pub struct InViewOptions {
    /// Stay true after the first intersection and stop observing
    pub once: bool,
    /// CSS margin around the viewport, e.g. `"-100px"`
    pub root_margin: String,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            once: true,
            root_margin: "0px".to_string(),
        }
    }
}

impl InViewOptions {
    pub fn with_margin(margin: &str) -> Self {
        Self {
            root_margin: margin.to_string(),
            ..Self::default()
        }
    }
}

/// Observe an element and report whether it is in the viewport.
///
/// `target` is re-read reactively, so passing `move || node_ref.get()` works
/// even though the node mounts after the hook runs. The observer is
/// disconnected when the owner is cleaned up.
pub fn use_in_view<F, El>(target: F, options: InViewOptions) -> ReadSignal<bool>
where
    F: Fn() -> Option<El> + 'static,
    El: AsRef<web_sys::Element>,
{
    let (in_view, set_in_view) = signal(false);
    let observer_slot = StoredValue::new_local(None::<web_sys::IntersectionObserver>);

    Effect::new(move |_| {
        let Some(el) = target() else { return };
        if observer_slot.with_value(Option::is_some) {
            return;
        }

        let once = options.once;
        let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let visible = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
                if visible {
                    set_in_view.set(true);
                    if once {
                        observer.disconnect();
                    }
                } else if !once {
                    set_in_view.set(false);
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);

        match web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(el.as_ref());
                observer_slot.set_value(Some(observer));
            }
            Err(err) => {
                // No observer support: show the content rather than hide it forever
                log::warn!("IntersectionObserver unavailable: {:?}", err);
                set_in_view.set(true);
            }
        }
        on_intersect.forget();
    });

    on_cleanup(move || {
        if let Some(observer) = observer_slot.try_update_value(Option::take).flatten() {
            observer.disconnect();
        }
    });

    in_view
}

/// Holder for at most one running timer handle.
#[derive(Debug)]
struct IntervalSlot<H> {
    handle: Option<H>,
}

impl<H> IntervalSlot<H> {
    fn new() -> Self {
        Self { handle: None }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Bring the slot in line with `active`. `start` is only called when no
    /// handle is held; the returned handle, if any, must be cleared by the
    /// caller.
    fn sync(&mut self, active: bool, start: impl FnOnce() -> Option<H>) -> Option<H> {
        match (active, self.handle.is_some()) {
            (true, false) => {
                self.handle = start();
                None
            }
            (false, true) => self.handle.take(),
            _ => None,
        }
    }

    fn release(&mut self) -> Option<H> {
        self.handle.take()
    }
}

/// Run `on_tick` every `period` while `active` is true.
///
/// Holds at most one interval: turning `active` on while already ticking is
/// a no-op, turning it off clears the interval, and so does disposing the
/// owner.
pub fn use_interval<F>(active: Signal<bool>, period: Duration, on_tick: F)
where
    F: Fn() + 'static,
{
    let on_tick: Rc<dyn Fn()> = Rc::new(on_tick);
    let slot = StoredValue::new(IntervalSlot::<IntervalHandle>::new());

    Effect::new(move |_| {
        let active = active.get();
        let start = || {
            let tick = Rc::clone(&on_tick);
            set_interval_with_handle(move || tick(), period)
                .map_err(|err| log::error!("set_interval failed: {:?}", err))
                .ok()
        };
        if let Some(stale) = slot.try_update_value(|s| s.sync(active, start)).flatten() {
            stale.clear();
        }
        log::trace!("interval active={} running={}", active, slot.with_value(IntervalSlot::is_running));
    });

    on_cleanup(move || {
        if let Some(h) = slot.try_update_value(IntervalSlot::release).flatten() {
            h.clear();
        }
    });
}

/// Reactive vertical scroll offset of the window
pub fn use_window_scroll() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(window_scroll_y());
    let listener = window_event_listener(leptos::ev::scroll, move |_| {
        set_scroll_y.set(window_scroll_y());
    });
    on_cleanup(move || listener.remove());
    scroll_y
}

pub fn window_scroll_y() -> f64 {
    web_sys::window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

/// `(document height, viewport height)` for progress calculations
pub fn document_extent() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document = win
        .document()
        .and_then(|doc| doc.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    (document, viewport)
}

/// `(scroll_left, scroll_width, client_width)` of a horizontally scrolling element
pub fn horizontal_extent(el: &web_sys::Element) -> (f64, f64, f64) {
    (
        f64::from(el.scroll_left()),
        f64::from(el.scroll_width()),
        f64::from(el.client_width()),
    )
}

/// Smooth horizontal scroll by `dx` pixels
pub fn scroll_by_x(el: &web_sys::Element, dx: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_left(dx);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_by_with_scroll_to_options(&opts);
}

/// Jump to the top of the page (used on route changes)
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_once_while_active() {
        let mut slot = IntervalSlot::new();
        let mut started = 0;

        for _ in 0..3 {
            let stale = slot.sync(true, || {
                started += 1;
                Some(started)
            });
            assert_eq!(stale, None);
        }
        assert_eq!(started, 1);
        assert!(slot.is_running());
    }

    #[test]
    fn test_slot_hands_back_handle_on_deactivate() {
        let mut slot = IntervalSlot::new();
        slot.sync(true, || Some(7));
        assert_eq!(slot.sync(false, || panic!("must not start")), Some(7));
        assert!(!slot.is_running());
        assert_eq!(slot.sync(false, || panic!("must not start")), None);
    }

    #[test]
    fn test_slot_restart_after_stop() {
        let mut slot = IntervalSlot::new();
        slot.sync(true, || Some(1));
        slot.sync(false, || None);
        slot.sync(true, || Some(2));
        assert_eq!(slot.release(), Some(2));
        assert_eq!(slot.release(), None);
    }

    #[test]
    fn test_slot_failed_start_stays_idle() {
        let mut slot: IntervalSlot<u32> = IntervalSlot::new();
        slot.sync(true, || None);
        assert!(!slot.is_running());
    }
}
