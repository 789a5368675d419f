use verdant_protocol::ExperienceRole;

pub(super) fn entries() -> Vec<ExperienceRole> {
    vec![
        ExperienceRole {
            title: "Software Developer Intern",
            organization: "Hewlett Packard Enterprise",
            location: "Remote",
            period: "Oct 2024 - Nov 2024",
            highlights: vec![
                "Developed comprehensive proposal for RESTful web services reducing API \
                 response times by 30% and integration costs by 20%",
                "Engineered 4+ RESTful web services improving data processing speeds by 40% and \
                 reducing operational errors by 25%",
                "Created and executed 50+ unit tests achieving 95% code coverage and decreasing \
                 production issues by 35%",
            ],
        },
        ExperienceRole {
            title: "Open Source Contributor",
            organization: "GirlScript Summer of Code",
            location: "Remote",
            period: "Oct 2024 - Nov 2024",
            highlights: vec![
                "Contributed to open-source projects under the GSSoC 2024 program",
                "Partnered with cross-functional team of 8+ developers to refine project \
                 features",
            ],
        },
        ExperienceRole {
            title: "Research Intern",
            organization: "India Space Week",
            location: "Remote",
            period: "Jun 2025 - Jul 2025",
            highlights: vec![
                "Led an in-depth research project focused on analyzing Type Ia Supernovae \
                 datasets to estimate key cosmological parameters",
                "Worked hands-on with real astronomical data from the Hubble Space Telescope \
                 and James Webb Space Telescope",
            ],
        },
    ]
}
