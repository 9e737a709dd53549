//! Number that counts up with an ease-out curve once it scrolls into view

use std::time::Duration;

use leptos::html::Span;
use leptos::prelude::*;

use super::scroll_reveal::use_reveal_once;
use crate::core::motion::{CounterAnimation, DEFAULT_COUNTER_DURATION, format_counter};

/// Animated statistic, e.g. `25000+`
///
/// Renders `prefix + 0 + suffix` until visible, then counts up to `target`.
/// The full value is always exposed through `aria-label`.
#[component]
pub fn AnimatedCounter(
    /// Final value
    target: u64,
    /// Text shown before the number
    #[prop(default = "")]
    prefix: &'static str,
    /// Text shown after the number
    #[prop(default = "")]
    suffix: &'static str,
    /// Run time of the count
    #[prop(default = DEFAULT_COUNTER_DURATION)]
    duration: Duration,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    #[allow(unused_variables)]
    let animation = CounterAnimation::new(target, duration);
    let node_ref = NodeRef::<Span>::new();
    #[allow(unused_variables)]
    let visible = use_reveal_once(node_ref);
    #[allow(unused_variables)]
    let (value, set_value) = signal(0_u64);

    #[cfg(feature = "hydrate")]
    {
        let task = frame_task::CounterTask::new(animation, set_value);

        Effect::new(move |_| {
            if visible.get() {
                task.start();
            }
        });

        on_cleanup(move || task.cancel());
    }

    let label = format_counter(prefix, target, suffix);

    view! {
        <span node_ref=node_ref class=class aria-label=label>
            <span aria-hidden="true">{move || format_counter(prefix, value.get(), suffix)}</span>
        </span>
    }
}

#[cfg(feature = "hydrate")]
mod frame_task {
    use leptos::logging::warn;
    use leptos::prelude::*;

    use crate::core::motion::{CounterAnimation, elapsed_between};

    /// A single cancellable run of a counter animation
    ///
    /// At most one frame request is pending at any time. A finished run clears
    /// it and schedules nothing further; `cancel` revokes it.
    #[derive(Clone, Copy)]
    pub(super) struct CounterTask {
        animation: CounterAnimation,
        set_value: WriteSignal<u64>,
        pending: StoredValue<Option<AnimationFrameRequestHandle>>,
        started: StoredValue<bool>,
    }

    impl CounterTask {
        pub(super) fn new(animation: CounterAnimation, set_value: WriteSignal<u64>) -> Self {
            Self {
                animation,
                set_value,
                pending: StoredValue::new(None),
                started: StoredValue::new(false),
            }
        }

        pub(super) fn start(self) {
            if self.started.get_value() {
                return;
            }
            self.started.set_value(true);
            self.schedule(None);
        }

        pub(super) fn cancel(self) {
            if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
                handle.cancel();
            }
        }

        fn schedule(self, first_frame_ms: Option<f64>) {
            let request = request_animation_frame_with_handle(move || {
                let now = now_ms();
                let started_ms = first_frame_ms.unwrap_or(now);
                let frame = self.animation.frame(elapsed_between(started_ms, now));

                self.set_value.set(frame.value);
                if frame.finished {
                    self.pending.set_value(None);
                } else {
                    self.schedule(Some(started_ms));
                }
            });

            match request {
                Ok(handle) => self.pending.set_value(Some(handle)),
                Err(err) => {
                    warn!("animation frame unavailable, jumping to target: {:?}", err);
                    self.pending.set_value(None);
                    self.set_value.set(self.animation.target());
                }
            }
        }
    }

    fn now_ms() -> f64 {
        window()
            .performance()
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_render_starts_at_zero_with_full_label() {
        let html = Owner::new().with(|| {
            view! { <AnimatedCounter target=25000 suffix="+" /> }.to_html()
        });

        assert!(html.contains(r#"aria-label="25000+""#));

        let shown = &html[html.find(r#"aria-hidden="true""#).unwrap()..];
        assert!(shown.contains("0+"));
        assert!(!shown.contains("25000"));
    }
}
