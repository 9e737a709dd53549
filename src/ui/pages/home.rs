//! Home page
//!
//! Renders every `HomeSection` in its fixed order between the navbar and the
//! footer.

use leptos::prelude::*;

use crate::core::routes::HomeSection;
use crate::ui::layout::{Footer, Navbar};
use crate::ui::motion::MotionStyles;
use crate::ui::sections::{
    AdminSection, BenefitsSection, CallToActionSection, ExamPrepSection, FamilyAccountsSection,
    HeroSection, LiveClassesSection, PersonalizedLearningSection, SchedulingSection,
    VerifiedTutorsSection,
};
use crate::ui::seo::SeoMeta;

fn section_view(section: HomeSection) -> AnyView {
    match section {
        HomeSection::Hero => view! { <HeroSection /> }.into_any(),
        HomeSection::ExamPrep => view! { <ExamPrepSection /> }.into_any(),
        HomeSection::PersonalizedLearning => view! { <PersonalizedLearningSection /> }.into_any(),
        HomeSection::LiveClasses => view! { <LiveClassesSection /> }.into_any(),
        HomeSection::FamilyAccounts => view! { <FamilyAccountsSection /> }.into_any(),
        HomeSection::VerifiedTutors => view! { <VerifiedTutorsSection /> }.into_any(),
        HomeSection::Scheduling => view! { <SchedulingSection /> }.into_any(),
        HomeSection::Admin => view! { <AdminSection /> }.into_any(),
        HomeSection::Benefits => view! { <BenefitsSection /> }.into_any(),
        HomeSection::CallToAction => view! { <CallToActionSection /> }.into_any(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />
        <MotionStyles />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Navbar />
            <main>
                {HomeSection::ORDER.into_iter().map(section_view).collect_view()}
            </main>
            <Footer />
        </div>
    }
}
