use verdant_protocol::{Skill, SkillCategory};

pub(super) fn categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            name: "Programming Languages",
            skills: vec![
                Skill {
                    name: "Python",
                    level: 90,
                    description: "Web development, ML, computer vision, and automation scripting",
                },
                Skill {
                    name: "C/C++",
                    level: 85,
                    description: "Data structures, algorithms, and system programming",
                },
                Skill {
                    name: "Java",
                    level: 80,
                    description: "Object-oriented programming and enterprise applications",
                },
                Skill {
                    name: "JavaScript",
                    level: 88,
                    description: "Full-stack web development and modern ES6+ features",
                },
            ],
        },
        SkillCategory {
            name: "Web Development",
            skills: vec![
                Skill {
                    name: "React",
                    level: 90,
                    description: "Advanced component architecture and state management",
                },
                Skill {
                    name: "Node.js",
                    level: 85,
                    description: "Server-side JavaScript with Express.js framework",
                },
                Skill {
                    name: "Next.js",
                    level: 88,
                    description: "Full-stack React framework with SSR/SSG",
                },
                Skill {
                    name: "TypeScript",
                    level: 85,
                    description: "Type-safe development with modern features",
                },
            ],
        },
        SkillCategory {
            name: "AI & Machine Learning",
            skills: vec![
                Skill {
                    name: "OpenCV",
                    level: 85,
                    description: "Computer vision and image processing applications",
                },
                Skill {
                    name: "PyTorch",
                    level: 80,
                    description: "Deep learning and neural network development",
                },
                Skill {
                    name: "TensorFlow",
                    level: 78,
                    description: "Machine learning model development and deployment",
                },
                Skill {
                    name: "Scikit-learn",
                    level: 85,
                    description: "Traditional ML algorithms and data analysis",
                },
            ],
        },
        SkillCategory {
            name: "Blockchain & Database",
            skills: vec![
                Skill {
                    name: "Ethereum",
                    level: 80,
                    description: "Smart contract development and DApp creation",
                },
                Skill {
                    name: "Solidity",
                    level: 75,
                    description: "Smart contract programming language",
                },
                Skill {
                    name: "MongoDB",
                    level: 85,
                    description: "NoSQL database design and optimization",
                },
                Skill {
                    name: "MySQL",
                    level: 80,
                    description: "Relational database management and queries",
                },
            ],
        },
    ]
}
