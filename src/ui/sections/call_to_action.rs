use leptos::prelude::*;

use crate::core::blob::{BlobAnchor, BlobColor, BlobSize};
use crate::core::content::{CALL_TO_ACTION, CTA_PRIMARY, CTA_SECONDARY, SUPPORT_EMAIL};
use crate::core::routes::HomeSection;
use crate::ui::common::{ButtonSize, ButtonVariant, LinkButton};
use crate::ui::motion::{FloatingBlob, ScrollReveal};

#[component]
pub fn CallToActionSection() -> impl IntoView {
    let lesson_href = format!("mailto:{}?subject=Free%20lesson", SUPPORT_EMAIL);
    let advisor_href = format!("mailto:{}", SUPPORT_EMAIL);

    view! {
        <section id=HomeSection::CallToAction.id() class="relative overflow-hidden py-24 px-4 bg-brand-primary">
            <FloatingBlob size=BlobSize::Large color=BlobColor::Accent anchor=BlobAnchor::TopRight />
            <FloatingBlob size=BlobSize::Medium color=BlobColor::Secondary anchor=BlobAnchor::BottomLeft />

            <ScrollReveal class="relative max-w-4xl mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold text-white mb-4">{CALL_TO_ACTION.title}</h2>
                <p class="text-lg text-white/80 mb-8 max-w-xl mx-auto">{CALL_TO_ACTION.description}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <LinkButton href=lesson_href variant=ButtonVariant::Inverted size=ButtonSize::Large>
                        {CTA_PRIMARY}
                    </LinkButton>
                    <LinkButton href=advisor_href variant=ButtonVariant::Ghost size=ButtonSize::Large>
                        {CTA_SECONDARY}
                    </LinkButton>
                </div>
            </ScrollReveal>
        </section>
    }
}
