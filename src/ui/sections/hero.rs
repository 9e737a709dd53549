use std::time::Duration;

use leptos::prelude::*;

use super::StatGrid;
use crate::core::blob::{BlobAnchor, BlobColor, BlobSize};
use crate::core::content::{
    CTA_ANCHOR, HERO_HEADLINE, HERO_PRIMARY_CTA, HERO_SECONDARY_CTA, HERO_STATS, HERO_SUBHEADLINE,
};
use crate::core::motion::{WORD_STAGGER, css_seconds};
use crate::core::routes::HomeSection;
use crate::ui::common::{ButtonSize, ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{AnimatedText, FloatingBlob};

/// Time for the headline's word reveal to finish before the rest fades in
fn after_headline() -> Duration {
    let words = HERO_HEADLINE.split_whitespace().count() as u32;
    WORD_STAGGER * words
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let follow_up = after_headline();
    let follow_up_style = format!("animation-delay: {};", css_seconds(follow_up));

    view! {
        <section
            id=HomeSection::Hero.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16"
        >
            // Background decoration
            <div class="absolute inset-0 -z-10 overflow-hidden">
                <FloatingBlob size=BlobSize::ExtraLarge color=BlobColor::Primary anchor=BlobAnchor::TopLeft />
                <FloatingBlob
                    size=BlobSize::Large
                    color=BlobColor::Secondary
                    anchor=BlobAnchor::BottomRight
                    delay=Duration::from_secs(3)
                />
                <FloatingBlob
                    size=BlobSize::Medium
                    color=BlobColor::Accent
                    anchor=BlobAnchor::Center
                    delay=Duration::from_secs(6)
                />
            </div>

            <div class="text-center px-4 max-w-4xl mx-auto">
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight">
                    <AnimatedText text=HERO_HEADLINE />
                </h1>
                <p
                    class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed fade-up"
                    style=follow_up_style.clone()
                >
                    {HERO_SUBHEADLINE}
                </p>

                <div
                    class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-16 fade-up"
                    style=follow_up_style
                >
                    <LinkButton href=CTA_ANCHOR size=ButtonSize::Large icon=icons::ARROW_RIGHT>
                        {HERO_PRIMARY_CTA}
                    </LinkButton>
                    <LinkButton href=HomeSection::VerifiedTutors.anchor() variant=ButtonVariant::Secondary size=ButtonSize::Large>
                        {HERO_SECONDARY_CTA}
                    </LinkButton>
                </div>

                <StatGrid stats=HERO_STATS number_class="text-3xl font-bold text-theme-primary" />

                // Scroll indicator
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce" aria-hidden="true">
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_up_waits_for_every_headline_word() {
        let words = crate::core::motion::reveal_words(HERO_HEADLINE, Duration::ZERO);
        let last = words.last().unwrap().delay;
        assert!(after_headline() > last);
    }

    #[test]
    fn test_only_headline_words_use_word_reveal() {
        let html = Owner::new().with(|| view! { <HeroSection /> }.to_html());
        let words = HERO_HEADLINE.split_whitespace().count();

        assert_eq!(html.matches("word-reveal").count(), words);
        assert_eq!(html.matches("fade-up").count(), 2);
    }
}
