use verdant_protocol::{Metric, Project};

pub(super) fn entries() -> Vec<Project> {
    vec![
        Project {
            title: "Matdata Mitra",
            description: "Comprehensive blockchain-based voting platform with facial recognition \
                          and decentralized voting system",
            long_description: "A revolutionary end-to-end platform designed to transform the \
                               voting process through blockchain technology. Features secure \
                               voter ID card creation, advanced facial recognition for \
                               authentication, and a fully decentralized voting system ensuring \
                               transparency and tamper-proof elections.",
            technologies: vec![
                "React", "Python", "Node.js", "Express.js", "Ethereum", "OpenCV", "IPFS",
                "MongoDB", "MySQL",
            ],
            features: vec![
                "Blockchain Voter Cards",
                "Facial Recognition",
                "Decentralized Voting",
                "Smart Contracts",
                "IPFS Storage",
                "Secure Authentication",
            ],
            metrics: vec![
                Metric {
                    label: "users",
                    value: "1000+",
                },
                Metric {
                    label: "accuracy",
                    value: "99.2%",
                },
                Metric {
                    label: "transactions",
                    value: "5000+",
                },
            ],
            github_url: "https://github.com/RazzGourav/matdata-mitra",
            demo_url: "https://matdata-mitra-demo.vercel.app",
        },
        Project {
            title: "RogiRadar",
            description: "ML-powered web application analyzing 18 symptoms to predict potential \
                          diseases with 85% accuracy",
            long_description: "A comprehensive machine learning-powered healthcare application \
                               that analyzes 18 common symptoms to predict potential diseases \
                               and guide users toward timely medical consultation. Features \
                               real-time predictions with responsible use disclaimers.",
            technologies: vec![
                "React",
                "Python",
                "Flask",
                "Scikit-learn",
                "Pandas",
                "REST API",
                "HTML/CSS",
                "JavaScript",
                "MongoDB",
            ],
            features: vec![
                "Symptom Analysis",
                "Disease Prediction",
                "Real-time API",
                "Scalable Architecture",
                "Medical Guidance",
                "85% Accuracy",
            ],
            metrics: vec![
                Metric {
                    label: "accuracy",
                    value: "85%",
                },
                Metric {
                    label: "symptoms",
                    value: "18+",
                },
                Metric {
                    label: "response",
                    value: "<2s",
                },
            ],
            github_url: "https://github.com/RazzGourav/RogiRadar",
            demo_url: "https://rogiradar.onrender.com/",
        },
        Project {
            title: "RungtAI – Campus Companion",
            description: "AI agent for virtual campus tours with 24/7 chatbot and event \
                          management",
            long_description: "An intelligent campus companion powered by Google's Gemini API, \
                               providing students with virtual tours, real-time assistance, and \
                               comprehensive event management. Built with modern web technologies \
                               for optimal performance.",
            technologies: vec!["Gemini API", "Next.js", "TypeScript", "Tailwind CSS"],
            features: vec![
                "Virtual Tours",
                "24/7 Chatbot",
                "Event Display",
                "Smart Recommendations",
                "Campus Navigation",
            ],
            metrics: vec![
                Metric {
                    label: "queries",
                    value: "10000+",
                },
                Metric {
                    label: "satisfaction",
                    value: "95%",
                },
                Metric {
                    label: "uptime",
                    value: "99.9%",
                },
            ],
            github_url: "https://github.com/RazzGourav/RungtAI",
            demo_url: "https://rungt-ai.vercel.app",
        },
        Project {
            title: "GSRA BANKS",
            description: "Simulated online banking portal with secure fund transfers, JWT \
                          authentication, and real-time transactions",
            long_description: "A full-featured banking simulation platform with enterprise-grade \
                               security, real-time transactions, and comprehensive account \
                               management. Features secure user authentication, account \
                               management, and real-time balance inquiries.",
            technologies: vec![
                "HTML",
                "CSS",
                "JavaScript",
                "Node.js",
                "Express.js",
                "MongoDB",
                "JWT",
            ],
            features: vec![
                "Fund Transfers",
                "Secure Authentication",
                "Account Management",
                "Transaction History",
                "Real-time Balance",
                "Profile Management",
            ],
            metrics: vec![
                Metric {
                    label: "transactions",
                    value: "50000+",
                },
                Metric {
                    label: "security",
                    value: "Bank-grade",
                },
                Metric {
                    label: "users",
                    value: "2500+",
                },
            ],
            github_url: "https://github.com/RazzGourav/GSRABank",
            demo_url: "https://gsra-banks.herokuapp.com",
        },
    ]
}
