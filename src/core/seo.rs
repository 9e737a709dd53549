//! Search engine metadata: page meta copy, JSON-LD, robots.txt and sitemap

use serde::Serialize;

use super::content::{BRAND_NAME, SUPPORT_EMAIL};
use super::routes::AppRoute;

pub const PAGE_TITLE: &str = "Learnbridge - Tutoring, Live Classes & Test Prep";
pub const PAGE_DESCRIPTION: &str = "Personalized tutoring and exam prep for the SAT, ACT, AP and more. Verified tutors, small live classes, family accounts and easy scheduling.";
pub const PAGE_KEYWORDS: &str = "online tutoring, test prep, SAT prep, ACT prep, AP tutoring, live classes, verified tutors, family learning";
pub const NOT_FOUND_TITLE: &str = "Page Not Found - Learnbridge";

/// Canonical site origin used when none is configured
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Site origin baked in at build time for meta tags rendered on both sides
pub fn public_site_url() -> &'static str {
    option_env!("LEARNBRIDGE_SITE_URL").unwrap_or(DEFAULT_SITE_URL)
}

/// schema.org `EducationalOrganization` description of the site
#[derive(Debug, Clone, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: String,
    pub email: &'static str,
    #[serde(rename = "knowsAbout")]
    pub knows_about: Vec<&'static str>,
}

impl StructuredData {
    pub fn for_site(site_url: &str) -> Self {
        Self {
            context: "https://schema.org",
            kind: "EducationalOrganization",
            name: BRAND_NAME,
            description: PAGE_DESCRIPTION,
            url: canonical_url(site_url, "/"),
            email: SUPPORT_EMAIL,
            knows_about: vec!["SAT", "ACT", "AP", "Test preparation", "Tutoring"],
        }
    }

    /// Serialize for an inline `application/ld+json` script
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Join a site origin and a path without doubling slashes
pub fn canonical_url(site_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        site_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// robots.txt body allowing every crawler
pub fn robots_txt(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        canonical_url(site_url, "/sitemap.xml")
    )
}

/// XML sitemap listing every routable page
pub fn sitemap_xml(site_url: &str) -> String {
    let urls: String = AppRoute::ROUTABLE
        .iter()
        .filter_map(AppRoute::path)
        .map(|path| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <changefreq>weekly</changefreq>\n  </url>\n",
                canonical_url(site_url, path)
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            canonical_url("https://learnbridge.app/", "/"),
            "https://learnbridge.app/"
        );
        assert_eq!(
            canonical_url("https://learnbridge.app", "sitemap.xml"),
            "https://learnbridge.app/sitemap.xml"
        );
    }

    #[test]
    fn test_structured_data_json() {
        let json = StructuredData::for_site("https://learnbridge.app").to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "EducationalOrganization");
        assert_eq!(value["name"], "Learnbridge");
        assert_eq!(value["url"], "https://learnbridge.app/");
        assert!(value["knowsAbout"].as_array().unwrap().len() >= 3);
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = robots_txt("https://learnbridge.app");
        assert!(robots.starts_with("User-agent: *\nAllow: /"));
        assert!(robots.contains("Sitemap: https://learnbridge.app/sitemap.xml"));
    }

    #[test]
    fn test_sitemap_lists_only_routable_pages() {
        let sitemap = sitemap_xml("https://learnbridge.app");
        assert!(sitemap.starts_with("<?xml"));
        assert_eq!(sitemap.matches("<url>").count(), AppRoute::ROUTABLE.len());
        assert!(sitemap.contains("<loc>https://learnbridge.app/</loc>"));
    }
}
