use leptos::prelude::*;

use super::{FeatureGrid, SectionHeader};
use crate::core::content::{VERIFIED_TUTORS, VETTING_STEPS};
use crate::core::routes::HomeSection;

#[component]
pub fn VerifiedTutorsSection() -> impl IntoView {
    view! {
        <section id=HomeSection::VerifiedTutors.id() class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <SectionHeader copy=VERIFIED_TUTORS />
                <FeatureGrid features=VETTING_STEPS columns="sm:grid-cols-2 lg:grid-cols-4" />
            </div>
        </section>
    }
}
