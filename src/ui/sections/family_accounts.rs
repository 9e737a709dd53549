use leptos::prelude::*;

use super::{CheckList, SectionHeader};
use crate::core::content::{FAMILY_ACCOUNTS, FAMILY_POINTS};
use crate::core::routes::HomeSection;
use crate::ui::motion::ScrollReveal;

/// Learners in the parent dashboard mockup: (name, subject, progress percent)
const LEARNERS: &[(&str, &str, u8)] = &[
    ("Maya", "SAT Math", 72),
    ("Leo", "AP Biology", 58),
    ("Zoe", "Grade 6 Reading", 85),
];

#[component]
pub fn FamilyAccountsSection() -> impl IntoView {
    view! {
        <section id=HomeSection::FamilyAccounts.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader copy=FAMILY_ACCOUNTS />

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <ScrollReveal>
                        <CheckList items=FAMILY_POINTS />
                    </ScrollReveal>

                    // Parent dashboard mockup
                    <ScrollReveal class="p-6 rounded-2xl border border-theme bg-theme-secondary/20 shadow-lg space-y-4">
                        <h3 class="font-semibold text-theme-primary">"Family dashboard"</h3>
                        {LEARNERS
                            .iter()
                            .map(|(name, subject, progress)| {
                                let width = format!("width: {}%;", progress);
                                view! {
                                    <div class="p-4 rounded-lg bg-theme-primary border border-theme">
                                        <div class="flex justify-between mb-2 text-sm">
                                            <span class="font-medium text-theme-primary">{*name}</span>
                                            <span class="text-theme-tertiary">{*subject}</span>
                                        </div>
                                        <div
                                            class="h-2 rounded-full bg-theme-secondary/40 overflow-hidden"
                                            role="progressbar"
                                            aria-valuemin="0"
                                            aria-valuemax="100"
                                            aria-valuenow=progress.to_string()
                                        >
                                            <div class="h-full rounded-full bg-brand-primary" style=width></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}
