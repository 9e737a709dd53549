use leptos::prelude::*;

use super::logo::Logo;
use crate::core::content::{BRAND_NAME, COPYRIGHT, FOOTER_COLUMNS, SUPPORT_EMAIL, TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    let mailto = format!("mailto:{}", SUPPORT_EMAIL);

    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">{BRAND_NAME}</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">{TAGLINE}</p>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="font-semibold text-theme-primary mb-4">{column.title}</h4>
                                    <ul class="space-y-2">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a
                                                            href=link.href
                                                            class="text-sm text-theme-secondary hover:text-brand-primary transition-colors"
                                                        >
                                                            {link.label}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">{COPYRIGHT}</span>
                    <a href=mailto class="text-sm text-theme-tertiary hover:text-theme-primary transition-colors">
                        {SUPPORT_EMAIL}
                    </a>
                </div>
            </div>
        </footer>
    }
}
