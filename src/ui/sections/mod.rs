//! Landing page sections
//!
//! Each section renders copy from `core::content` and carries the anchor id of
//! its `HomeSection`. The shared building blocks below keep headings, feature
//! cards and statistics consistent across sections.

mod admin;
mod benefits;
mod call_to_action;
mod exam_prep;
mod family_accounts;
mod hero;
mod live_classes;
mod personalized_learning;
mod scheduling;
mod verified_tutors;

pub use admin::AdminSection;
pub use benefits::BenefitsSection;
pub use call_to_action::CallToActionSection;
pub use exam_prep::ExamPrepSection;
pub use family_accounts::FamilyAccountsSection;
pub use hero::HeroSection;
pub use live_classes::LiveClassesSection;
pub use personalized_learning::PersonalizedLearningSection;
pub use scheduling::SchedulingSection;
pub use verified_tutors::VerifiedTutorsSection;

use std::time::Duration;

use leptos::prelude::*;

use crate::core::content::{Feature, SectionCopy, Stat};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{AnimatedCounter, ScrollReveal};

/// Stagger between consecutive cards in a grid
const CARD_STAGGER: Duration = Duration::from_millis(100);

/// Eyebrow, title and description, centered above a section's content
#[component]
fn SectionHeader(copy: SectionCopy) -> impl IntoView {
    view! {
        <ScrollReveal class="text-center mb-16">
            <span class="inline-block mb-3 px-3 py-1 rounded-full text-xs font-semibold uppercase tracking-wider
                         bg-brand-primary/10 text-brand-primary">
                {copy.eyebrow}
            </span>
            <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">{copy.title}</h2>
            <p class="text-lg text-theme-secondary max-w-2xl mx-auto">{copy.description}</p>
        </ScrollReveal>
    }
}

#[component]
fn FeatureCard(
    feature: Feature,
    #[prop(default = Duration::ZERO)] delay: Duration,
) -> impl IntoView {
    view! {
        <ScrollReveal
            delay=delay
            class="bg-theme-primary p-6 rounded-xl border border-theme hover:border-brand-primary/50
                   transition-all duration-300 hover:shadow-lg hover:-translate-y-1"
        >
            <div class="w-12 h-12 rounded-lg bg-brand-primary/10 flex items-center justify-center mb-4">
                <Icon name=feature.icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{feature.title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{feature.description}</p>
        </ScrollReveal>
    }
}

/// Responsive grid of feature cards with staggered entrances
#[component]
fn FeatureGrid(
    features: &'static [Feature],
    #[prop(default = "md:grid-cols-3")] columns: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("grid gap-8 {}", columns)>
            {features
                .iter()
                .enumerate()
                .map(|(index, feature)| {
                    view! { <FeatureCard feature=*feature delay={CARD_STAGGER * index as u32} /> }
                })
                .collect_view()}
        </div>
    }
}

/// Row of animated statistics
#[component]
fn StatGrid(
    stats: &'static [Stat],
    /// Classes for each number
    #[prop(default = "text-4xl font-bold text-brand-primary")]
    number_class: &'static str,
) -> impl IntoView {
    view! {
        <dl class="grid grid-cols-2 md:grid-cols-4 gap-8 justify-items-center">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="text-center">
                            <dt class="sr-only">{stat.label}</dt>
                            <dd class="flex flex-col gap-1">
                                <AnimatedCounter
                                    target=stat.value
                                    prefix=stat.prefix
                                    suffix=stat.suffix
                                    class=number_class
                                />
                                <span class="text-sm text-theme-secondary" aria-hidden="true">
                                    {stat.label}
                                </span>
                            </dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}

/// Bulleted list with check marks
#[component]
fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="space-y-4">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start gap-3">
                            <span class="mt-0.5 w-6 h-6 shrink-0 rounded-full bg-brand-primary/10 flex items-center justify-center">
                                <Icon name=icons::CHECK class="w-4 h-4" />
                            </span>
                            <span class="text-theme-secondary">{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
