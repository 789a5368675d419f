//! The page's hardcoded content. One file per section domain; `portfolio`
//! assembles the whole data set once at startup.

mod achievements;
mod certifications;
mod education;
mod experience;
mod projects;
mod skills;

use verdant_protocol::{Identity, Portfolio, SocialLink};

pub fn portfolio() -> Portfolio {
    Portfolio {
        identity: identity(),
        about_paragraphs: vec![
            "I'm a passionate student pursuing Bachelor of Technology in Computer Science and AI \
             at Rungta College of Engineering and Technology. My journey in software development \
             spans across blockchain technology, AI-ML, and full-stack web development.",
            "With hands-on experience from my internship at Hewlett Packard Enterprise and active \
             contributions to open-source projects through GirlScript Summer of Code and a \
             research internship at ISA, I'm constantly pushing the boundaries of what's \
             possible with code.",
        ],
        about_badges: vec![
            "AI-ML Enthusiast",
            "Blockchain Developer",
            "Full-Stack Developer",
            "Open Source Contributor",
        ],
        projects: projects::entries(),
        experience: experience::entries(),
        education: education::entries(),
        skill_categories: skills::categories(),
        certifications: certifications::entries(),
        achievements: achievements::entries(),
        achievement_stats: achievements::stats(),
        contact_blurb: "I'm always interested in new opportunities and collaborations. Whether \
                        you have a project in mind or just want to connect, feel free to reach \
                        out!",
        footer: "© 2024 Gourav Kumar Ojha.",
    }
}

fn identity() -> Identity {
    Identity {
        name: "Gourav Kumar Ojha",
        brand: "Gourav.dev",
        tagline: "Aspiring Software Developer | BTech CSE with AI | AI-ML Researcher",
        initials: "GKO",
        location: "Raipur, Chhattisgarh, India",
        status: "CSE AI Student",
        email: "kumargouravojha@gmail.com",
        phone: "+91 6207001498",
        resume_url: "/resume.pdf",
        socials: vec![
            SocialLink {
                label: "GitHub",
                url: "https://github.com/RazzGourav",
            },
            SocialLink {
                label: "LinkedIn",
                url: "https://www.linkedin.com/in/gourav-kumar-ojha-13853b290",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_protocol::SectionId;

    #[test]
    fn every_tracked_section_has_content() {
        let p = portfolio();
        for id in SectionId::ALL {
            let populated = match id {
                SectionId::Hero => !p.identity.name.is_empty(),
                SectionId::About => !p.about_paragraphs.is_empty(),
                SectionId::Projects => !p.projects.is_empty(),
                SectionId::Experience => !p.experience.is_empty(),
                SectionId::Education => !p.education.is_empty(),
                SectionId::Skills => !p.skill_categories.is_empty(),
                SectionId::Certifications => !p.certifications.is_empty(),
                SectionId::Achievements => !p.achievements.is_empty(),
                SectionId::Contact => !p.contact_blurb.is_empty(),
            };
            assert!(populated, "section {id} has no content");
        }
    }

    #[test]
    fn projects_are_fully_described() {
        for project in portfolio().projects {
            assert!(!project.technologies.is_empty(), "{}", project.title);
            assert!(!project.features.is_empty(), "{}", project.title);
            assert_eq!(project.metrics.len(), 3, "{}", project.title);
            assert!(project.github_url.starts_with("https://"));
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in portfolio().skill_categories {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100, "{}", skill.name);
            }
        }
    }

    #[test]
    fn identity_links_are_absolute() {
        for social in portfolio().identity.socials {
            assert!(social.url.starts_with("https://"), "{}", social.label);
        }
    }
}
