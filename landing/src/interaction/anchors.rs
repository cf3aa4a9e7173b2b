//! Anchor identifiers shared by the nav links and the section elements.

use std::fmt;

/// A navigable page section. `id()` is both the `href` fragment of the nav
/// link and the `id` attribute of the section element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Solutions,
    Approach,
    CaseStudies,
    Testimonials,
}

impl Section {
    /// Nav order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Solutions,
        Section::Approach,
        Section::CaseStudies,
        Section::Testimonials,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Solutions => "solutions",
            Section::Approach => "approach",
            Section::CaseStudies => "case-studies",
            Section::Testimonials => "testimonials",
        }
    }

    /// Link text in the header and the drawer.
    pub const fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Solutions => "Solutions",
            Section::Approach => "Approach",
            Section::CaseStudies => "Case Studies",
            Section::Testimonials => "Testimonials",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_match_section_elements() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec!["about", "solutions", "approach", "case-studies", "testimonials"]
        );
    }

    #[test]
    fn href_is_fragment() {
        assert_eq!(Section::Testimonials.href(), "#testimonials");
        assert_eq!(Section::Approach.to_string(), "approach");
    }
}
