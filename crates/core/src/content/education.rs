use verdant_protocol::EducationEntry;

pub(super) fn entries() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            degree: "Bachelor of Technology",
            field: "Computer Science in AI",
            institution: "Rungta College of Engineering and Technology, Bhilai, CG",
            period: "Aug 2023 - Present",
            note: "Currently pursuing a specialized degree in Computer Science with a focus on \
                   Artificial Intelligence. Coursework includes machine learning, data \
                   structures, algorithms, software engineering, and AI ethics.",
        },
        EducationEntry {
            degree: "Higher Secondary",
            field: "Science Stream",
            institution: "Sunrise Dwarka Academy, Deoghar, JH",
            period: "Jul 2021 - Jun 2023",
            note: "",
        },
        EducationEntry {
            degree: "Secondary Education",
            field: "CBSE Board",
            institution: "St. Xavier's High School, Deoghar, JH",
            period: "Mar 2013 - Jul 2021",
            note: "",
        },
    ]
}
