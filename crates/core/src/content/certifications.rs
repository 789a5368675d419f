use verdant_protocol::Certification;

pub(super) fn entries() -> Vec<Certification> {
    vec![
        Certification {
            name: "Azure Fundamentals",
            issuer: "Microsoft",
            year: "2023",
            description: "Cloud computing fundamentals and Azure services",
            credential_id: "",
        },
        Certification {
            name: "Postman API Fundamentals",
            issuer: "Postman",
            year: "2024",
            description: "API testing, documentation, and automation",
            credential_id: "API-FUND-2024",
        },
        Certification {
            name: "Data Structures and Algorithms",
            issuer: "DevTown",
            year: "2024",
            description: "Advanced DSA concepts and problem-solving techniques",
            credential_id: "DSA-2024",
        },
        Certification {
            name: "Open Source Contributor",
            issuer: "GirlScript Summer of Code",
            year: "2024",
            description: "Recognized contributor to open-source projects",
            credential_id: "GSSOC-2024",
        },
        Certification {
            name: "Full-Stack Development",
            issuer: "DevTown",
            year: "2024",
            description: "Complete web development stack mastery",
            credential_id: "FULLSTACK-2024",
        },
        Certification {
            name: "Data Science AI-ML",
            issuer: "Coding Spoon",
            year: "2025",
            description: "AI-ML Intermediate Level",
            credential_id: "AI-ML-2025",
        },
        Certification {
            name: "Google Cloud Skills Boost",
            issuer: "Google",
            year: "2024",
            description: "Cloud platform services and API integration",
            credential_id: "GCP-2024",
        },
    ]
}
