use leptos::prelude::*;

/// CSS for the landing page animations
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Word-by-word reveal */
            @keyframes word-reveal {
                from {
                    opacity: 0;
                    transform: translateY(0.5em);
                    filter: blur(4px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                    filter: blur(0);
                }
            }

            .word-reveal {
                display: inline-block;
                opacity: 0;
                animation: word-reveal 0.5s ease-out forwards;
            }

            /* Block-level fade in, timed after the headline */
            @keyframes fade-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .fade-up {
                opacity: 0;
                animation: fade-up 0.6s ease-out forwards;
            }

            /* Scroll-triggered section fade in */
            .scroll-reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .scroll-reveal.revealed {
                opacity: 1;
                transform: translateY(0);
            }

            /* Floating background blobs */
            @keyframes blob-float {
                0%, 100% { translate: 0 0; scale: 1; }
                33% { translate: 24px -32px; scale: 1.05; }
                66% { translate: -16px 16px; scale: 0.95; }
            }

            .floating-blob {
                animation: blob-float 12s ease-in-out infinite;
            }

            @media (prefers-reduced-motion: reduce) {
                .word-reveal,
                .fade-up,
                .floating-blob {
                    animation: none;
                    opacity: 1;
                }
                .scroll-reveal {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
            "#
        </style>

        // Without scripts nothing observes the viewport, so show sections as-is
        <noscript>
            <style>{NO_SCRIPT_CSS}</style>
        </noscript>
    }
}

/// Reveal state for pages rendered without a running observer
const NO_SCRIPT_CSS: &str = ".scroll-reveal { opacity: 1; transform: none; transition: none; }";

#[cfg(test)]
mod tests {
    use super::*;

    fn render_styles() -> String {
        Owner::new().with(|| view! { <MotionStyles /> }.to_html())
    }

    #[test]
    fn test_hidden_reveal_state_has_noscript_fallback() {
        let html = render_styles();
        let noscript = html
            .find("<noscript>")
            .expect("noscript fallback rendered");

        assert!(html.contains(".scroll-reveal {"));
        assert!(html[noscript..].contains(".scroll-reveal { opacity: 1;"));
    }

    #[test]
    fn test_fade_up_respects_reduced_motion() {
        let html = render_styles();
        let reduced = html
            .find("prefers-reduced-motion")
            .expect("reduced motion rules rendered");
        assert!(html[reduced..].contains(".fade-up"));
    }
}
