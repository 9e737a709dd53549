use leptos::prelude::*;

use super::{FeatureGrid, SectionHeader};
use crate::core::content::{LIVE_CLASS_FEATURES, LIVE_CLASSES};
use crate::core::routes::HomeSection;
use crate::ui::motion::ScrollReveal;

/// Initials shown in the classroom mockup; seats beyond these stay empty
const CLASSMATES: &[&str] = &["AK", "JM", "SR", "LT", "DP", "MC"];
const SEATS: usize = 8;

#[component]
pub fn LiveClassesSection() -> impl IntoView {
    view! {
        <section id=HomeSection::LiveClasses.id() class="py-20 px-4 bg-theme-secondary/20">
            <div class="max-w-6xl mx-auto">
                <SectionHeader copy=LIVE_CLASSES />

                // Classroom mockup
                <ScrollReveal class="max-w-3xl mx-auto mb-16 rounded-2xl border border-theme bg-theme-primary overflow-hidden shadow-lg">
                    <div class="flex items-center gap-2 px-4 py-3 border-b border-theme">
                        <span class="w-2.5 h-2.5 rounded-full bg-red-500 animate-pulse"></span>
                        <span class="text-sm font-medium text-theme-primary">"LIVE · Algebra II: Quadratics"</span>
                    </div>
                    <div class="grid grid-cols-4 gap-3 p-4">
                        {(0..SEATS)
                            .map(|seat| {
                                let initials = CLASSMATES.get(seat).copied();
                                let class = if initials.is_some() {
                                    "aspect-video rounded-lg bg-brand-primary/15 flex items-center justify-center font-semibold text-theme-primary"
                                } else {
                                    "aspect-video rounded-lg border border-dashed border-theme flex items-center justify-center text-xs text-theme-tertiary"
                                };
                                view! { <div class=class>{initials.unwrap_or("Open")}</div> }
                            })
                            .collect_view()}
                    </div>
                </ScrollReveal>

                <FeatureGrid features=LIVE_CLASS_FEATURES />
            </div>
        </section>
    }
}
