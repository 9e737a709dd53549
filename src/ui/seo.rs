//! Head tags for search engines and link previews

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::BRAND_NAME;
use crate::core::seo::{
    PAGE_DESCRIPTION, PAGE_KEYWORDS, PAGE_TITLE, StructuredData, canonical_url, public_site_url,
};

/// SEO meta tags for the landing page
#[component]
pub fn SeoMeta() -> impl IntoView {
    let site_url = public_site_url();
    let canonical = canonical_url(site_url, "/");
    let structured_data = StructuredData::for_site(site_url).to_json();

    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content=PAGE_KEYWORDS />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:site_name" content=BRAND_NAME />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        // Twitter
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=PAGE_DESCRIPTION />

        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=structured_data></script>
    }
}
