//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::content::{
    COPYRIGHT, NOT_FOUND_ACTION_HREF, NOT_FOUND_ACTION_LABEL, NOT_FOUND_CODE, NOT_FOUND_MESSAGE,
    NOT_FOUND_TITLE,
};
use crate::core::seo;
use crate::ui::common::{ButtonSize, LinkButton};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Router fallback responses carry a 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=seo::NOT_FOUND_TITLE />
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                    <Icon name=icons::HOME class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-theme-primary mb-4">{NOT_FOUND_CODE}</h1>
                <h2 class="text-2xl font-semibold text-theme-primary mb-2">{NOT_FOUND_TITLE}</h2>
                <p class="text-theme-secondary mb-8 max-w-md mx-auto">{NOT_FOUND_MESSAGE}</p>

                <LinkButton href=NOT_FOUND_ACTION_HREF size=ButtonSize::Large>
                    {NOT_FOUND_ACTION_LABEL}
                </LinkButton>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-theme-tertiary">{COPYRIGHT}</p>
            </div>
        </div>
    }
}
