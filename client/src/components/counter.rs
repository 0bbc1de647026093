//! Animated count-up statistic.
//!
//! DESIGN
//! ======
//! `CounterAnimation` is a pure function of elapsed time so the easing can be
//! tested without a browser. The component ticks it on an interval under
//! `hydrate`; SSR renders the final value so crawlers and no-JS visitors see
//! the real number. The first client tick restarts the count from zero.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::util::format::group_thousands;

#[cfg(feature = "hydrate")]
const TICK_MS: u32 = 16;

/// Ease-out cubic count from zero to `target` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    pub target: u64,
    pub duration: Duration,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    #[must_use]
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Value shown after `elapsed`. Never exceeds `target`; reaches it
    /// exactly once the duration has passed.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if self.is_done(elapsed) {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - progress).powi(3);
        ((self.target as f64) * eased).floor().min(self.target as f64) as u64
    }
}

#[component]
pub fn Counter(
    target: u64,
    #[prop(default = 2000)] duration_ms: u64,
    #[prop(optional, into)] suffix: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    let animation = CounterAnimation::new(target, Duration::from_millis(duration_ms));
    let value = RwSignal::new(target);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        let elapsed = std::cell::Cell::new(Duration::ZERO);
        let interval = Interval::new(TICK_MS, move || {
            let now = elapsed.get() + Duration::from_millis(u64::from(TICK_MS));
            elapsed.set(now);
            if value.get_untracked() != animation.target || !animation.is_done(now) {
                value.set(animation.value_at(now));
            }
        });
        let interval = StoredValue::new_local(Some(interval));
        on_cleanup(move || {
            if let Some(interval) = interval.try_update_value(Option::take).flatten() {
                let _ = interval.cancel();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = animation;

    view! {
        <div class="counter">
            <span class="counter__value">{move || group_thousands(value.get())}{suffix}</span>
            <span class="counter__label">{label}</span>
        </div>
    }
}
