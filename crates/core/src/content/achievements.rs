use verdant_protocol::{Achievement, AchievementStat};

pub(super) fn entries() -> Vec<Achievement> {
    vec![
        Achievement {
            title: "Project Showcase",
            category: "College Competition",
            position: "Best Innovation & Project",
            description: "Blockchain based voter-id creation & decentralised voting system.",
            date: "May 2025",
            impact: "400+ competing projects",
        },
        Achievement {
            title: "Flash Hack Hackathon 2025",
            category: "College Hackathon",
            position: "Runner Up",
            description: "The Centralized Digital Notice Board, a platform designed to \
                          streamline communication by centralizing all important notices in one \
                          place.",
            date: "Jan 2025",
            impact: "Recognized by GDGRCET",
        },
        Achievement {
            title: "Shaastrarth25",
            category: "10th International Conference",
            position: "Top 10 Papers",
            description: "Our paper, \"Blockchain-based Voter Identity and Voting System\", \
                          explores how decentralized tech can revolutionize election security, \
                          transparency, and accessibility.",
            date: "June 2025",
            impact: "Among 500+ papers",
        },
        Achievement {
            title: "Best Research Project",
            category: "Research Intern at India Space Academy",
            position: "Best Research Project",
            description: "Led the Supernova Cosmology Project in Data-Driven Astronomy, \
                          analyzing Hubble/JWST satellite data to probe cosmic expansion.",
            date: "July 2025",
            impact: "Among 200 research projects",
        },
    ]
}

pub(super) fn stats() -> Vec<AchievementStat> {
    vec![
        AchievementStat {
            glyph: "🏆",
            number: "5+",
            label: "Competition Wins",
        },
        AchievementStat {
            glyph: "👥",
            number: "100+",
            label: "Participants Competed",
        },
        AchievementStat {
            glyph: "🔧",
            number: "5+",
            label: "Open Source PRs",
        },
        AchievementStat {
            glyph: "✨",
            number: "100%",
            label: "Project Success Rate",
        },
    ]
}
