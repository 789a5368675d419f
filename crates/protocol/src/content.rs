use serde::Serialize;

/// Who the page is about: name, tagline, links, contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: &'static str,
    /// Short brand string shown in the nav bar and loading screen.
    pub brand: &'static str,
    pub tagline: &'static str,
    /// Initials for the avatar fallback.
    pub initials: &'static str,
    pub location: &'static str,
    pub status: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub resume_url: &'static str,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One headline number on a project card (e.g. "users" → "1000+").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Expanded description shown in the detail dialog.
    pub long_description: &'static str,
    pub technologies: Vec<&'static str>,
    pub features: Vec<&'static str>,
    pub metrics: Vec<Metric>,
    pub github_url: &'static str,
    pub demo_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency from 0 to 100, drives the progress bar fill.
    pub level: u8,
    /// Shown on hover under the bar.
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub credential_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub category: &'static str,
    pub position: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub impact: &'static str,
}

/// One headline stat above the achievement cards ("5+ Competition Wins").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementStat {
    pub glyph: &'static str,
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceRole {
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    /// Empty when the entry has no expanded note.
    pub note: &'static str,
}

/// Everything the page renders, assembled once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    pub identity: Identity,
    pub about_paragraphs: Vec<&'static str>,
    pub about_badges: Vec<&'static str>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceRole>,
    pub education: Vec<EducationEntry>,
    pub skill_categories: Vec<SkillCategory>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub achievement_stats: Vec<AchievementStat>,
    pub contact_blurb: &'static str,
    pub footer: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_serializes_to_json() {
        let m = Metric {
            label: "users",
            value: "1000+",
        };
        let json = serde_json::to_string(&m).unwrap_or_default();
        assert!(json.contains("1000+"));
    }
}
