//! Routes and home-page section anchors

use derive_more::Display;

/// Path of the landing page
pub const HOME_PATH: &str = "/";

/// Routable pages of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    NotFound,
}

impl AppRoute {
    /// Every page that should appear in the sitemap
    pub const ROUTABLE: [AppRoute; 1] = [AppRoute::Home];

    /// Resolve a request path (query string and fragment allowed)
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if path.is_empty() {
            AppRoute::Home
        } else {
            AppRoute::NotFound
        }
    }

    /// Canonical path; `None` for pages that have no address of their own
    pub fn path(&self) -> Option<&'static str> {
        match self {
            AppRoute::Home => Some(HOME_PATH),
            AppRoute::NotFound => None,
        }
    }
}

/// Sections of the landing page, in render order
///
/// `Display` gives the navbar label of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum HomeSection {
    #[display("Home")]
    Hero,
    #[display("Exam Prep")]
    ExamPrep,
    #[display("Personalized Learning")]
    PersonalizedLearning,
    #[display("Live Classes")]
    LiveClasses,
    #[display("Families")]
    FamilyAccounts,
    #[display("Tutors")]
    VerifiedTutors,
    #[display("Scheduling")]
    Scheduling,
    #[display("Admin")]
    Admin,
    #[display("Why Learnbridge")]
    Benefits,
    #[display("Get Started")]
    CallToAction,
}

impl HomeSection {
    pub const ORDER: [HomeSection; 10] = [
        HomeSection::Hero,
        HomeSection::ExamPrep,
        HomeSection::PersonalizedLearning,
        HomeSection::LiveClasses,
        HomeSection::FamilyAccounts,
        HomeSection::VerifiedTutors,
        HomeSection::Scheduling,
        HomeSection::Admin,
        HomeSection::Benefits,
        HomeSection::CallToAction,
    ];

    /// DOM id used as the section's anchor target
    pub fn id(&self) -> &'static str {
        match self {
            HomeSection::Hero => "home",
            HomeSection::ExamPrep => "exam-prep",
            HomeSection::PersonalizedLearning => "personalized-learning",
            HomeSection::LiveClasses => "live-classes",
            HomeSection::FamilyAccounts => "family-accounts",
            HomeSection::VerifiedTutors => "tutors",
            HomeSection::Scheduling => "scheduling",
            HomeSection::Admin => "admin",
            HomeSection::Benefits => "benefits",
            HomeSection::CallToAction => "get-started",
        }
    }

    /// In-page link to this section, e.g. `#exam-prep`
    pub fn anchor(&self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_home() {
        assert_eq!(AppRoute::resolve("/"), AppRoute::Home);
        assert_eq!(AppRoute::resolve(""), AppRoute::Home);
        assert_eq!(AppRoute::resolve("/?ref=ad"), AppRoute::Home);
        assert_eq!(AppRoute::resolve("/#benefits"), AppRoute::Home);
    }

    #[test]
    fn test_resolve_undefined_paths() {
        for path in ["/pricing", "/tutors/42", "/index.html", "//nope/"] {
            assert_eq!(AppRoute::resolve(path), AppRoute::NotFound, "{path}");
        }
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(AppRoute::Home.path(), Some("/"));
        assert_eq!(AppRoute::NotFound.path(), None);
        for route in AppRoute::ROUTABLE {
            let path = route.path().unwrap();
            assert_eq!(AppRoute::resolve(path), route);
        }
    }

    #[test]
    fn test_section_nav_labels() {
        assert_eq!(HomeSection::ExamPrep.to_string(), "Exam Prep");
        assert_eq!(HomeSection::FamilyAccounts.to_string(), "Families");
        assert_eq!(HomeSection::Benefits.to_string(), "Why Learnbridge");
    }

    #[test]
    fn test_section_order_starts_with_hero_and_ends_with_cta() {
        assert_eq!(HomeSection::ORDER.first(), Some(&HomeSection::Hero));
        assert_eq!(HomeSection::ORDER.last(), Some(&HomeSection::CallToAction));
    }

    #[test]
    fn test_section_ids_are_unique() {
        let ids: HashSet<&str> = HomeSection::ORDER.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), HomeSection::ORDER.len());
    }

    #[test]
    fn test_anchor_targets_section_id() {
        for section in HomeSection::ORDER {
            assert_eq!(section.anchor(), format!("#{}", section.id()));
        }
    }
}
