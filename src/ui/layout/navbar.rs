//! Fixed top navigation bar with a collapsible mobile menu

use leptos::prelude::*;
use leptos_router::components::A;

use super::logo::Logo;
use crate::core::content::{BRAND_NAME, CTA_ANCHOR, NAV_CTA_LABEL, NAV_SECTIONS};
use crate::core::routes::HOME_PATH;
use crate::ui::common::{ButtonSize, LinkButton};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Navbar() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href=HOME_PATH attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">{BRAND_NAME}</span>
                    </A>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-6" aria-label="Main">
                        {NAV_SECTIONS
                            .iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.anchor()
                                        class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                    >
                                        {section.to_string()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <LinkButton href=CTA_ANCHOR size=ButtonSize::Small>
                            {NAV_CTA_LABEL}
                        </LinkButton>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-theme-secondary/40 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div class=move || {
                    if mobile_menu_open.get() {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-96"
                    } else {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-0"
                    }
                }>
                    <nav class="py-4 flex flex-col gap-2 border-t border-theme/50" aria-label="Mobile">
                        {NAV_SECTIONS
                            .iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.anchor()
                                        class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                        on:click=move |_| set_mobile_menu_open.set(false)
                                    >
                                        {section.to_string()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=CTA_ANCHOR
                            class="btn-base btn-primary mx-4 mt-2 text-center"
                            on:click=move |_| set_mobile_menu_open.set(false)
                        >
                            {NAV_CTA_LABEL}
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}
