//! Static page copy for the landing page
//!
//! All marketing text lives here so sections stay purely presentational and
//! the copy can be checked without rendering anything.

use super::routes::{HOME_PATH, HomeSection};

pub const BRAND_NAME: &str = "Learnbridge";
pub const TAGLINE: &str = "Tutoring and test prep that meets every learner where they are.";
pub const SUPPORT_EMAIL: &str = "hello@learnbridge.app";
pub const COPYRIGHT: &str = "© 2025 Learnbridge. All rights reserved.";

/// Heading block shared by every informational section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Icon, title and one-line description
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A number animated by a counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: u64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

// ============================================================================
// Navigation
// ============================================================================

/// Sections linked from the navbar, labelled by their `Display`
pub const NAV_SECTIONS: &[HomeSection] = &[
    HomeSection::ExamPrep,
    HomeSection::LiveClasses,
    HomeSection::FamilyAccounts,
    HomeSection::VerifiedTutors,
    HomeSection::Benefits,
];

pub const NAV_CTA_LABEL: &str = "Get Started";

/// In-page link to the call-to-action section
pub const CTA_ANCHOR: &str = "#get-started";

// ============================================================================
// Hero
// ============================================================================

pub const HERO_HEADLINE: &str = "Learn smarter with tutors who know the test";
pub const HERO_SUBHEADLINE: &str = "One-on-one tutoring, live group classes and adaptive exam prep for the SAT, ACT, AP and more, all in one place for students, parents and schools.";
pub const HERO_PRIMARY_CTA: &str = "Start Free Trial";
pub const HERO_SECONDARY_CTA: &str = "Meet Our Tutors";

pub const HERO_STATS: &[Stat] = &[
    Stat {
        value: 25_000,
        prefix: "",
        suffix: "+",
        label: "Students taught",
    },
    Stat {
        value: 1_200,
        prefix: "",
        suffix: "+",
        label: "Verified tutors",
    },
    Stat {
        value: 98,
        prefix: "",
        suffix: "%",
        label: "Parent satisfaction",
    },
];

// ============================================================================
// Exam prep
// ============================================================================

pub const EXAM_PREP: SectionCopy = SectionCopy {
    eyebrow: "Exam Prep",
    title: "Targeted prep for the exams that matter",
    description: "Diagnostic tests find the gaps, then every practice set, lesson and mock exam is aimed squarely at closing them.",
};

pub const EXAMS: &[&str] = &["SAT", "ACT", "PSAT", "AP", "GCSE", "IB", "GRE", "GMAT"];

pub const EXAM_PREP_FEATURES: &[Feature] = &[
    Feature {
        icon: "clipboard-check",
        title: "Full-length mock exams",
        description: "Timed practice under real test conditions with instant, section-by-section scoring.",
    },
    Feature {
        icon: "chart-bar",
        title: "Score tracking",
        description: "See projected scores rise week over week and know exactly where points are being lost.",
    },
    Feature {
        icon: "book-open",
        title: "Question bank",
        description: "Thousands of exam-style questions with worked solutions written by top scorers.",
    },
];

pub const EXAM_PREP_STATS: &[Stat] = &[
    Stat {
        value: 210,
        prefix: "+",
        suffix: "",
        label: "Average SAT point gain",
    },
    Stat {
        value: 4,
        prefix: "+",
        suffix: "",
        label: "Average ACT composite gain",
    },
    Stat {
        value: 92,
        prefix: "",
        suffix: "%",
        label: "Reach their target score",
    },
];

// ============================================================================
// Personalized learning
// ============================================================================

pub const PERSONALIZED_LEARNING: SectionCopy = SectionCopy {
    eyebrow: "Personalized Learning",
    title: "A study plan built around one student",
    description: "Every learner gets a plan that adapts after each session, so time is spent on what moves the needle.",
};

pub const PERSONALIZED_FEATURES: &[Feature] = &[
    Feature {
        icon: "sparkles",
        title: "Adaptive practice",
        description: "Question difficulty adjusts in real time to keep students challenged but never lost.",
    },
    Feature {
        icon: "target",
        title: "Goal-based plans",
        description: "Set a target score or grade and a date; the plan works backwards from there.",
    },
    Feature {
        icon: "light-bulb",
        title: "Learning-style aware",
        description: "Visual, verbal or hands-on: tutors tailor explanations to how each student learns best.",
    },
];

// ============================================================================
// Live classes
// ============================================================================

pub const LIVE_CLASSES: SectionCopy = SectionCopy {
    eyebrow: "Live Classes",
    title: "Small live classes, big results",
    description: "Interactive classes of eight students or fewer, with a shared whiteboard, breakout practice and recordings of every session.",
};

pub const LIVE_CLASS_FEATURES: &[Feature] = &[
    Feature {
        icon: "video-camera",
        title: "HD virtual classroom",
        description: "Video, screen sharing and a collaborative whiteboard in the browser. Nothing to install.",
    },
    Feature {
        icon: "users",
        title: "Eight seats max",
        description: "Every student gets called on, gets feedback and gets their questions answered.",
    },
    Feature {
        icon: "play-circle",
        title: "Recorded sessions",
        description: "Missed a class or need a refresher? Every session is available to rewatch.",
    },
];

// ============================================================================
// Family accounts
// ============================================================================

pub const FAMILY_ACCOUNTS: SectionCopy = SectionCopy {
    eyebrow: "Family Accounts",
    title: "One account for the whole family",
    description: "Manage every child's lessons, progress reports and billing from a single parent dashboard.",
};

pub const FAMILY_POINTS: &[&str] = &[
    "Add up to six learners under one subscription",
    "Weekly progress reports delivered to parents",
    "Shared calendar across siblings and tutors",
    "Single invoice with per-child breakdowns",
];

// ============================================================================
// Verified tutors
// ============================================================================

pub const VERIFIED_TUTORS: SectionCopy = SectionCopy {
    eyebrow: "Verified Tutors",
    title: "Only the top 5% of applicants teach here",
    description: "Every tutor passes subject exams, a mock lesson, reference checks and a background check before meeting a student.",
};

pub const VETTING_STEPS: &[Feature] = &[
    Feature {
        icon: "academic-cap",
        title: "Subject mastery",
        description: "Tutors score in the top percentile of the exams they teach.",
    },
    Feature {
        icon: "presentation",
        title: "Teaching audition",
        description: "A recorded mock lesson reviewed by our academic team.",
    },
    Feature {
        icon: "shield-check",
        title: "Background checked",
        description: "Identity verification and a full background check, renewed every year.",
    },
    Feature {
        icon: "star",
        title: "Rated every session",
        description: "Students and parents rate each lesson; quality is tracked continuously.",
    },
];

// ============================================================================
// Scheduling
// ============================================================================

pub const SCHEDULING: SectionCopy = SectionCopy {
    eyebrow: "Scheduling",
    title: "Book a session in under a minute",
    description: "See real-time tutor availability in your time zone, book instantly and reschedule with a tap.",
};

pub const SCHEDULING_FEATURES: &[Feature] = &[
    Feature {
        icon: "calendar",
        title: "Live availability",
        description: "Open slots update instantly so there is no back-and-forth.",
    },
    Feature {
        icon: "bell",
        title: "Smart reminders",
        description: "Email and text reminders before every lesson for students and parents.",
    },
    Feature {
        icon: "refresh",
        title: "Flexible rescheduling",
        description: "Move a lesson up to 12 hours before it starts at no cost.",
    },
];

// ============================================================================
// Admin
// ============================================================================

pub const ADMIN: SectionCopy = SectionCopy {
    eyebrow: "For Schools & Centers",
    title: "An admin console for tutoring programs",
    description: "Schools and learning centers run their whole program from one place: rosters, tutor assignments, attendance and outcomes.",
};

pub const ADMIN_FEATURES: &[Feature] = &[
    Feature {
        icon: "view-grid",
        title: "Program dashboard",
        description: "Attendance, session hours and score growth across every cohort at a glance.",
    },
    Feature {
        icon: "user-group",
        title: "Roster management",
        description: "Import students in bulk and assign tutors by subject, grade or availability.",
    },
    Feature {
        icon: "document-report",
        title: "Outcome reports",
        description: "Export progress and outcome reports for grant reporting and school boards.",
    },
];

// ============================================================================
// Benefits
// ============================================================================

pub const BENEFITS: SectionCopy = SectionCopy {
    eyebrow: "Why Learnbridge",
    title: "Results families can see",
    description: "Better grades, higher scores and more confident learners, backed by numbers we track every term.",
};

pub const BENEFIT_STATS: &[Stat] = &[
    Stat {
        value: 25_000,
        prefix: "",
        suffix: "+",
        label: "Students helped",
    },
    Stat {
        value: 350_000,
        prefix: "",
        suffix: "+",
        label: "Lessons delivered",
    },
    Stat {
        value: 1_200,
        prefix: "",
        suffix: "+",
        label: "Verified tutors",
    },
    Stat {
        value: 9,
        prefix: "4.",
        suffix: "/5",
        label: "Average lesson rating",
    },
];

pub const BENEFITS_LIST: &[Feature] = &[
    Feature {
        icon: "trending-up",
        title: "Measurable progress",
        description: "Every lesson ends with notes and a skills update parents can read.",
    },
    Feature {
        icon: "heart",
        title: "Confidence first",
        description: "Patient tutors who turn test anxiety into a plan.",
    },
    Feature {
        icon: "currency-dollar",
        title: "Fair pricing",
        description: "Pay per lesson or save with a plan. No long contracts.",
    },
];

// ============================================================================
// Call to action
// ============================================================================

pub const CALL_TO_ACTION: SectionCopy = SectionCopy {
    eyebrow: "Get Started",
    title: "Your first lesson is on us",
    description: "Take a free diagnostic, meet a tutor and get a personalized study plan. No credit card required.",
};

pub const CTA_PRIMARY: &str = "Book a Free Lesson";
pub const CTA_SECONDARY: &str = "Talk to an Advisor";

// ============================================================================
// Footer
// ============================================================================

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Learn",
        links: &[
            FooterLink {
                label: "Exam Prep",
                href: "#exam-prep",
            },
            FooterLink {
                label: "Live Classes",
                href: "#live-classes",
            },
            FooterLink {
                label: "Personalized Plans",
                href: "#personalized-learning",
            },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink {
                label: "Our Tutors",
                href: "#tutors",
            },
            FooterLink {
                label: "For Schools",
                href: "#admin",
            },
            FooterLink {
                label: "Contact",
                href: "mailto:hello@learnbridge.app",
            },
        ],
    },
];

// ============================================================================
// Not found
// ============================================================================

pub const NOT_FOUND_CODE: &str = "404";
pub const NOT_FOUND_TITLE: &str = "Page Not Found";
pub const NOT_FOUND_MESSAGE: &str =
    "The page you're looking for doesn't exist or has been moved.";
pub const NOT_FOUND_ACTION_LABEL: &str = "Back to Home";
pub const NOT_FOUND_ACTION_HREF: &str = HOME_PATH;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routes::AppRoute;

    fn all_section_ids() -> Vec<&'static str> {
        HomeSection::ORDER.iter().map(|s| s.id()).collect()
    }

    #[test]
    fn test_nav_sections_are_unique_and_skip_hero() {
        for (index, section) in NAV_SECTIONS.iter().enumerate() {
            assert_ne!(*section, HomeSection::Hero);
            assert!(!NAV_SECTIONS[index + 1..].contains(section), "{section}");
        }
    }

    #[test]
    fn test_footer_anchors_target_home_sections() {
        let ids = all_section_ids();
        for column in FOOTER_COLUMNS {
            for link in column.links {
                if let Some(id) = link.href.strip_prefix('#') {
                    assert!(ids.contains(&id), "{} -> {}", link.label, link.href);
                }
            }
        }
    }

    #[test]
    fn test_cta_anchor_matches_section() {
        assert_eq!(CTA_ANCHOR, HomeSection::CallToAction.anchor());
    }

    #[test]
    fn test_not_found_action_goes_home() {
        assert_eq!(AppRoute::Home.path(), Some(NOT_FOUND_ACTION_HREF));
        assert_eq!(AppRoute::resolve(NOT_FOUND_ACTION_HREF), AppRoute::Home);
    }

    #[test]
    fn test_stats_are_non_empty() {
        for stat in HERO_STATS
            .iter()
            .chain(EXAM_PREP_STATS)
            .chain(BENEFIT_STATS)
        {
            assert!(stat.value > 0);
            assert!(!stat.label.is_empty());
        }
    }

    #[test]
    fn test_hero_headline_reveals_word_by_word() {
        let words = crate::core::motion::reveal_words(HERO_HEADLINE, Default::default());
        assert_eq!(words.len(), HERO_HEADLINE.split_whitespace().count());
        assert!(words.len() > 1);
    }

    #[test]
    fn test_every_feature_icon_is_shipped() {
        let icons_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        let groups: [&[Feature]; 7] = [
            EXAM_PREP_FEATURES,
            PERSONALIZED_FEATURES,
            LIVE_CLASS_FEATURES,
            VETTING_STEPS,
            SCHEDULING_FEATURES,
            ADMIN_FEATURES,
            BENEFITS_LIST,
        ];

        for feature in groups.iter().flat_map(|group| group.iter()) {
            let path = icons_dir.join(format!("{}.svg", feature.icon));
            assert!(path.exists(), "missing icon {}", feature.icon);
        }
    }
}
