use leptos::prelude::*;

use super::{FeatureGrid, SectionHeader};
use crate::core::content::{SCHEDULING, SCHEDULING_FEATURES};
use crate::core::routes::HomeSection;
use crate::ui::motion::ScrollReveal;

const SLOTS: &[(&str, bool)] = &[
    ("3:00 PM", false),
    ("3:30 PM", true),
    ("4:00 PM", true),
    ("5:30 PM", false),
    ("6:00 PM", true),
    ("7:30 PM", true),
];

#[component]
pub fn SchedulingSection() -> impl IntoView {
    view! {
        <section id=HomeSection::Scheduling.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader copy=SCHEDULING />

                <div class="grid lg:grid-cols-5 gap-12 items-start">
                    // Booking mockup
                    <ScrollReveal class="lg:col-span-2 p-6 rounded-2xl border border-theme bg-theme-secondary/20 shadow-lg">
                        <h3 class="font-semibold text-theme-primary mb-1">"Thursday, with Ms. Rivera"</h3>
                        <p class="text-sm text-theme-tertiary mb-4">"Times shown in your time zone"</p>
                        <div class="grid grid-cols-2 gap-3">
                            {SLOTS
                                .iter()
                                .map(|(time, open)| {
                                    let class = if *open {
                                        "py-2 rounded-lg border border-brand-primary text-brand-primary text-sm font-medium text-center"
                                    } else {
                                        "py-2 rounded-lg border border-theme text-theme-tertiary text-sm text-center line-through"
                                    };
                                    view! { <span class=class>{*time}</span> }
                                })
                                .collect_view()}
                        </div>
                    </ScrollReveal>

                    <div class="lg:col-span-3">
                        <FeatureGrid features=SCHEDULING_FEATURES columns="grid-cols-1" />
                    </div>
                </div>
            </div>
        </section>
    }
}
