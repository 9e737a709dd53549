use leptos::prelude::*;

use super::{FeatureGrid, SectionHeader, StatGrid};
use crate::core::content::{BENEFIT_STATS, BENEFITS, BENEFITS_LIST};
use crate::core::routes::HomeSection;
use crate::ui::motion::ScrollReveal;

#[component]
pub fn BenefitsSection() -> impl IntoView {
    view! {
        <section id=HomeSection::Benefits.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader copy=BENEFITS />

                <ScrollReveal class="mb-16">
                    <StatGrid stats=BENEFIT_STATS number_class="text-4xl sm:text-5xl font-bold text-brand-primary" />
                </ScrollReveal>

                <FeatureGrid features=BENEFITS_LIST />
            </div>
        </section>
    }
}
