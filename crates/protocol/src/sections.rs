use serde::{Deserialize, Serialize};

/// The fixed set of page sections, in declared page order.
///
/// The order of variants is load-bearing: the scroll position monitor
/// scans sections in this order and the first match wins, and the page
/// stacks them vertically in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Experience,
    Education,
    Skills,
    Certifications,
    Achievements,
    Contact,
}

impl SectionId {
    /// Every section in declared page order.
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Certifications,
        SectionId::Achievements,
        SectionId::Contact,
    ];

    /// The subset linked from the navigation bar, in nav order.
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Stable lowercase identifier (anchor name).
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Certifications => "certifications",
            SectionId::Achievements => "achievements",
            SectionId::Contact => "contact",
        }
    }

    /// Human-readable heading shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Certifications => "Certifications",
            SectionId::Achievements => "Achievements",
            SectionId::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declared_order() {
        let mut sorted = SectionId::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionId::ALL);
    }

    #[test]
    fn nav_is_a_subset_of_all() {
        for id in SectionId::NAV {
            assert!(SectionId::ALL.contains(&id));
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for id in SectionId::ALL {
            assert!(seen.insert(id.as_str()), "duplicate id {id}");
        }
    }

    #[test]
    fn serde_uses_lowercase_anchor() {
        let json = serde_json::to_string(&SectionId::Certifications).unwrap_or_default();
        assert_eq!(json, "\"certifications\"");
        let back: SectionId = serde_json::from_str("\"hero\"").unwrap_or(SectionId::Contact);
        assert_eq!(back, SectionId::Hero);
    }
}
