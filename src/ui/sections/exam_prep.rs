use leptos::prelude::*;

use super::{FeatureGrid, SectionHeader, StatGrid};
use crate::core::content::{EXAM_PREP, EXAM_PREP_FEATURES, EXAM_PREP_STATS, EXAMS};
use crate::core::routes::HomeSection;
use crate::ui::motion::ScrollReveal;

#[component]
pub fn ExamPrepSection() -> impl IntoView {
    view! {
        <section id=HomeSection::ExamPrep.id() class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <SectionHeader copy=EXAM_PREP />

                // Supported exams
                <ScrollReveal class="flex flex-wrap justify-center gap-3 mb-12">
                    {EXAMS
                        .iter()
                        .map(|exam| {
                            view! {
                                <span class="px-4 py-2 rounded-full border border-theme bg-theme-primary text-sm font-semibold text-theme-primary">
                                    {*exam}
                                </span>
                            }
                        })
                        .collect_view()}
                </ScrollReveal>

                <FeatureGrid features=EXAM_PREP_FEATURES />

                <ScrollReveal class="mt-16 p-8 rounded-2xl bg-theme-primary border border-theme">
                    <StatGrid stats=EXAM_PREP_STATS />
                </ScrollReveal>
            </div>
        </section>
    }
}
