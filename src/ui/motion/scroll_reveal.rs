//! Viewport-triggered reveal
//!
//! `use_reveal_once` watches an element with an IntersectionObserver and flips
//! a signal the first time the element scrolls into view. The observer is
//! disconnected as soon as it fires and again when the owner is cleaned up.

use std::time::Duration;

use leptos::html::{Div, ElementType};
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::motion::css_seconds;

/// Signal that turns `true` once `target` has entered the viewport
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn use_reveal_once<E>(target: NodeRef<E>) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    #[allow(unused_variables)]
    let (revealed, set_revealed) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos::logging::warn;

        let observer = StoredValue::new_local(None::<observer::RevealObserver>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if revealed.get_untracked() || observer.with_value(Option::is_some) {
                return;
            }

            let element: web_sys::Element = element.unchecked_into();
            match observer::RevealObserver::observe(&element, set_revealed) {
                Ok(active) => observer.set_value(Some(active)),
                Err(err) => {
                    warn!("scroll reveal unavailable, showing content: {:?}", err);
                    set_revealed.set(true);
                }
            }
        });

        on_cleanup(move || {
            if let Some(active) = observer.try_update_value(Option::take).flatten() {
                active.disconnect();
            }
        });
    }

    revealed
}

#[cfg(feature = "hydrate")]
mod observer {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use crate::core::motion::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, RevealChange, RevealLatch};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    /// An observer watching a single element, plus the callback it calls into
    pub(super) struct RevealObserver {
        observer: web_sys::IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl RevealObserver {
        pub(super) fn observe(
            element: &web_sys::Element,
            set_revealed: WriteSignal<bool>,
        ) -> Result<Self, JsValue> {
            let mut latch = RevealLatch::new();

            let callback: ObserverCallback = Closure::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<web_sys::IntersectionObserverEntry>()
                            .is_intersecting()
                    });

                    if latch.observe(intersecting) == RevealChange::Revealed {
                        set_revealed.set(true);
                        observer.disconnect();
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }

        pub(super) fn disconnect(self) {
            self.observer.disconnect();
        }
    }
}

/// Fades its children up into place the first time they scroll into view
#[component]
pub fn ScrollReveal(
    /// Extra delay before the transition starts
    #[prop(default = Duration::ZERO)]
    delay: Duration,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal_once(node_ref);

    let classes = if class.is_empty() {
        "scroll-reveal".to_string()
    } else {
        format!("scroll-reveal {}", class)
    };
    let style = format!("transition-delay: {};", css_seconds(delay));

    view! {
        <div
            node_ref=node_ref
            class=classes
            class:revealed=move || revealed.get()
            style=style
        >
            {children()}
        </div>
    }
}
