use std::time::Duration;

use leptos::prelude::*;

use crate::core::motion::reveal_words;

/// Text whose words fade up one after another
#[component]
pub fn AnimatedText(
    /// Text to reveal
    #[prop(into)]
    text: String,
    /// Delay before the first word
    #[prop(default = Duration::ZERO)]
    delay: Duration,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let words = reveal_words(&text, delay);

    view! {
        <span class=class aria-label=text>
            {words
                .into_iter()
                .map(|word| {
                    let style = word.style();
                    view! {
                        <span class="word-reveal" style=style aria-hidden="true">
                            {word.text}
                        </span>
                        " "
                    }
                })
                .collect_view()}
        </span>
    }
}
