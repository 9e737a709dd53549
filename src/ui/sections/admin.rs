use leptos::prelude::*;

use super::{FeatureGrid, SectionHeader};
use crate::core::content::{ADMIN, ADMIN_FEATURES};
use crate::core::routes::HomeSection;

#[component]
pub fn AdminSection() -> impl IntoView {
    view! {
        <section id=HomeSection::Admin.id() class="py-20 px-4 bg-theme-secondary/20">
            <div class="max-w-6xl mx-auto">
                <SectionHeader copy=ADMIN />
                <FeatureGrid features=ADMIN_FEATURES />
            </div>
        </section>
    }
}
