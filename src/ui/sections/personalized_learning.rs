use leptos::prelude::*;

use super::{FeatureGrid, SectionHeader};
use crate::core::content::{PERSONALIZED_FEATURES, PERSONALIZED_LEARNING};
use crate::core::routes::HomeSection;
use crate::ui::motion::ScrollReveal;

/// Week of a sample study plan: (day, topic, minutes)
const SAMPLE_PLAN: &[(&str, &str, u32)] = &[
    ("Mon", "Linear equations review", 30),
    ("Wed", "Reading: evidence questions", 45),
    ("Thu", "Live session with tutor", 60),
    ("Sat", "Timed math section", 35),
];

#[component]
pub fn PersonalizedLearningSection() -> impl IntoView {
    view! {
        <section id=HomeSection::PersonalizedLearning.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader copy=PERSONALIZED_LEARNING />

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <FeatureGrid features=PERSONALIZED_FEATURES columns="grid-cols-1" />

                    // Study plan mockup
                    <ScrollReveal class="p-6 rounded-2xl border border-theme bg-theme-secondary/20 shadow-lg">
                        <div class="flex items-center justify-between mb-6">
                            <h3 class="font-semibold text-theme-primary">"This week's plan"</h3>
                            <span class="text-xs px-2 py-1 rounded-full bg-brand-accent/20 text-theme-primary">
                                "Updated after last session"
                            </span>
                        </div>
                        <ol class="space-y-3">
                            {SAMPLE_PLAN
                                .iter()
                                .map(|(day, topic, minutes)| {
                                    view! {
                                        <li class="flex items-center gap-4 p-3 rounded-lg bg-theme-primary border border-theme">
                                            <span class="w-12 text-sm font-bold text-brand-primary">{*day}</span>
                                            <span class="flex-1 text-sm text-theme-primary">{*topic}</span>
                                            <span class="text-xs text-theme-tertiary">{format!("{} min", minutes)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}
