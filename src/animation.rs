//! Animation Hooks
//!
//! Bind the pure state machines from `rajhub_content` to browser timers.

use std::time::Duration;

use leptos::prelude::*;
use leptos_viewport::use_interval;
use rajhub_content::config::{CounterConfig, HeroConfig};
use rajhub_content::{AnimatedCounter, HeroRotation, StartOutcome};

/// Count from 0 up to `target` once `trigger` turns true.
///
/// A second trigger while running is ignored and a finished counter stays
/// finished. Losing the trigger mid-run cancels the sequence.
pub fn use_animated_counter(target: u64, trigger: Signal<bool>, config: CounterConfig) -> ReadSignal<u64> {
    let counter = i64::try_from(target)
        .map_err(|_| format!("target {target} out of range"))
        .and_then(|t| AnimatedCounter::new(t, config.duration_ms, config.steps).map_err(|e| e.to_string()))
        .unwrap_or_else(|err| {
            log::warn!("counter config rejected ({}), using defaults", err);
            AnimatedCounter::with_defaults(target)
        });
    let period = counter.step_interval();
    let counter = StoredValue::new(counter);

    let (value, set_value) = signal(0u64);
    let (running, set_running) = signal(false);

    Effect::new(move |_| {
        if trigger.get() {
            match counter.try_update_value(|c| c.start()) {
                Some(StartOutcome::Started) => set_running.set(true),
                Some(outcome) => log::trace!("counter start ignored: {:?}", outcome),
                None => {}
            }
        } else if running.get_untracked() {
            counter.update_value(|c| c.cancel());
            set_running.set(false);
        }
    });

    use_interval(running.into(), period, move || {
        let step = counter.try_update_value(|c| (c.tick(), c.is_running()));
        match step {
            Some((Some(v), still_running)) => {
                set_value.set(v);
                if !still_running {
                    set_running.set(false);
                }
            }
            _ => set_running.set(false),
        }
    });

    value
}

/// Reactive handle over a [`HeroRotation`]
#[derive(Clone, Copy)]
pub struct HeroHandle {
    pub active: ReadSignal<usize>,
    pub autoplay: ReadSignal<bool>,
    rotation: StoredValue<HeroRotation>,
    set_active: WriteSignal<usize>,
    set_autoplay: WriteSignal<bool>,
}

impl HeroHandle {
    /// Jump to a slide; autoplay stops for good
    pub fn select(&self, index: usize) {
        let Some((active, autoplay)) = self.rotation.try_update_value(|r| {
            r.select(index);
            (r.active(), r.is_autoplaying())
        }) else {
            return;
        };
        self.set_active.set(active);
        self.set_autoplay.set(autoplay);
    }
}

/// Rotate through `len` slides every `rotation_ms` until the user picks one.
/// `None` when there is nothing to rotate.
pub fn use_hero_rotation(len: usize, config: HeroConfig) -> Option<HeroHandle> {
    let rotation = match HeroRotation::new(len) {
        Ok(rotation) => rotation,
        Err(err) => {
            log::error!("hero rotation disabled: {}", err);
            return None;
        }
    };
    let rotation = StoredValue::new(rotation);
    let (active, set_active) = signal(0usize);
    let (autoplay, set_autoplay) = signal(true);

    let period = Duration::from_millis(u64::from(config.rotation_ms.max(1)));
    use_interval(autoplay.into(), period, move || {
        if let Some(next) = rotation.try_update_value(|r| {
            r.advance();
            r.active()
        }) {
            set_active.set(next);
        }
    });

    Some(HeroHandle {
        active,
        autoplay,
        rotation,
        set_active,
        set_autoplay,
    })
}
