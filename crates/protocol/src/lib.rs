pub mod content;
pub mod sections;
pub mod theme;

pub use content::{
    Achievement, AchievementStat, Certification, EducationEntry, ExperienceRole, Identity, Metric,
    Portfolio, Project, Skill, SkillCategory, SocialLink,
};
pub use sections::SectionId;
pub use theme::ThemeToken;
