//! Standalone 404 document
//!
//! Served by the axum layer for requests that never reach the router, such as
//! missing files under `/pkg`. It ships no hydration script, so the recovery
//! action is a plain link.

use leptos::prelude::*;

use crate::core::content::{
    NOT_FOUND_ACTION_HREF, NOT_FOUND_ACTION_LABEL, NOT_FOUND_CODE, NOT_FOUND_MESSAGE,
    NOT_FOUND_TITLE,
};
use crate::core::seo;

#[component]
pub fn StaticNotFoundPage() -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="robots" content="noindex" />
                <title>{seo::NOT_FOUND_TITLE}</title>
                <link rel="stylesheet" href="/pkg/learnbridge.css" />
            </head>
            <body class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
                <main class="text-center">
                    <h1 class="text-6xl font-bold text-theme-primary mb-4">{NOT_FOUND_CODE}</h1>
                    <h2 class="text-2xl font-semibold text-theme-primary mb-2">{NOT_FOUND_TITLE}</h2>
                    <p class="text-theme-secondary mb-8 max-w-md mx-auto">{NOT_FOUND_MESSAGE}</p>
                    <a href=NOT_FOUND_ACTION_HREF class="btn-base btn-primary btn-lg">
                        {NOT_FOUND_ACTION_LABEL}
                    </a>
                </main>
            </body>
        </html>
    }
}
