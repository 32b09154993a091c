//! Literal page copy for both landing page editions.
//!
//! Everything here is compiled in. Records hold `&'static` data so components
//! can take them by reference without cloning.

pub mod de;
pub mod en;

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct UseCase {
    pub number: &'static str,
    pub title: &'static str,
    pub metric: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Header link. `anchor` is the id of a section on the same page.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub eyebrow: &'static str,
    /// Three headline lines; the middle one is rendered in the accent color.
    pub headline: [&'static str; 3],
    pub lead: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub illustration_icons: &'static [&'static str],
    pub illustration_caption: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cta {
    pub title: &'static str,
    pub lead: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub brand: &'static str,
    pub tagline: &'static [&'static str],
    pub services_heading: &'static str,
    pub resources_heading: &'static str,
    pub resources: &'static [&'static str],
    pub contact_heading: &'static str,
    pub contact_placeholders: &'static [&'static str],
    pub copyright: &'static str,
    pub legal_links: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingContent {
    pub lang: &'static str,
    pub page_title: &'static str,
    pub meta_description: &'static str,
    pub brand: &'static str,
    pub nav: &'static [NavItem],
    pub header_cta: &'static str,
    /// Label of the link to the other edition.
    pub switch_label: &'static str,
    pub hero: Hero,
    pub services_heading: SectionHeading,
    pub services: &'static [Service],
    pub use_cases_heading: SectionHeading,
    pub use_cases_media: &'static str,
    pub use_cases: &'static [UseCase],
    pub process_heading: SectionHeading,
    pub process_steps: &'static [ProcessStep],
    pub tech_heading: SectionHeading,
    pub tech_stack: &'static [&'static str],
    pub cta: Cta,
    pub footer: Footer,
}

/// Element ids of the landing page sections. Components render these and
/// nav anchors link to them.
pub mod section {
    pub const HERO: &str = "hero";
    pub const SERVICES: &str = "services";
    pub const USE_CASES: &str = "use-cases";
    pub const PROCESS: &str = "process";
    pub const STACK: &str = "stack";
    pub const CONTACT: &str = "contact";
}

/// Section ids rendered by every landing page, in page order.
pub const SECTION_IDS: &[&str] = &[
    section::HERO,
    section::SERVICES,
    section::USE_CASES,
    section::PROCESS,
    section::STACK,
    section::CONTACT,
];
