use leptos::prelude::*;

/// Learnbridge mark: an open book forming a bridge
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <svg class="w-8 h-8 text-brand-primary" viewBox="0 0 32 32" fill="none" aria-hidden="true">
            <rect width="32" height="32" rx="8" fill="currentColor" opacity="0.12" />
            <path
                d="M6 21c3-5 7-7 10-7s7 2 10 7"
                stroke="currentColor"
                stroke-width="2.5"
                stroke-linecap="round"
            />
            <path d="M16 9v5M10 12v5M22 12v5" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}
