use std::{collections::HashSet, fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLinks {
    pub linkedin: Option<&'static str>,
    pub github: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub instagram: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub bio: &'static str,
    pub profile_image: &'static str,
    pub resume_url: &'static str,
    pub social: SocialLinks,
}

impl PersonalInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Initials used as the site logo, e.g. "BS".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
    pub github: Option<&'static str>,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub id: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.duration.contains("Present")
    }
}

/// Icons a skill card can show. Closed set; unknown names fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkillIcon {
    Brain,
    Code,
    Cloud,
    LineChart,
    Database,
}

impl SkillIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Brain => "🧠",
            Self::Code => "💻",
            Self::Cloud => "☁️",
            Self::LineChart => "📈",
            Self::Database => "🗄️",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Brain => "Brain",
            Self::Code => "Code2",
            Self::Cloud => "Cloud",
            Self::LineChart => "LineChart",
            Self::Database => "Database",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown skill icon: {0}")]
pub struct UnknownIcon(pub String);

impl FromStr for SkillIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Brain" => Ok(Self::Brain),
            "Code2" => Ok(Self::Code),
            "Cloud" => Ok(Self::Cloud),
            "LineChart" => Ok(Self::LineChart),
            "Database" => Ok(Self::Database),
            other => Err(UnknownIcon(other.to_string())),
        }
    }
}

impl fmt::Display for SkillIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skill {
    pub category: &'static str,
    pub icon: SkillIcon,
    pub progress: u8,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Certification {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub credential_url: Option<&'static str>,
}

impl Certification {
    /// Badges shown under "Skills Validated", keyed off words in the title.
    pub fn validated_skills(&self) -> Vec<&'static str> {
        let title = self.title.to_lowercase();
        let mut skills = Vec::new();
        if title.contains("aws") {
            skills.extend(["Cloud Computing", "AWS Services"]);
        }
        if title.contains("machine learning") {
            skills.extend(["ML Ops", "Model Deployment"]);
        }
        if title.contains("python") {
            skills.push("Python");
        }
        if title.contains("nlp") || title.contains("natural language") {
            skills.push("NLP");
        }
        if title.contains("sql") {
            skills.extend(["SQL", "Big Data"]);
        }
        skills
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub og_image: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HighlightStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Balvendra Singh",
    title: "Data Scientist & AI Engineer",
    location: "Hyderabad, India",
    email: "Balvendarsingh111@gmail.com",
    bio: "I am a skilled Data Scientist Engineer with nearly 2+ years of experience in designing and deploying innovative, data-driven solutions that drive business impact. My expertise includes data modeling, algorithm development, machine learning, deep learning, and Generative AI. With hands-on experience in big data technologies, cloud platforms, and programming, I excel at delivering transformative solutions. I am committed to continuous learning, leveraging emerging technologies to align with organizational goals and industry advancements.",
    profile_image: "/images/profile.jpeg",
    resume_url: "/resume.pdf",
    social: SocialLinks {
        linkedin: Some("https://www.linkedin.com/in/balvendra-singh-6834931a7/"),
        github: Some("https://github.com/balvendar111"),
        twitter: Some("https://twitter.com/balvendrasingh8"),
        instagram: Some("https://www.instagram.com/balvendra_111/"),
    },
};

pub static SITE_CONFIG: SiteConfig = SiteConfig {
    name: "Balvendra Singh",
    description: "Professional portfolio of Balvendra Singh, Data Scientist & AI Engineer specializing in Machine Learning, Deep Learning, and Generative AI solutions.",
    url: "https://balvendrasingh-portfolio.vercel.app",
    og_image: "/images/profile.jpeg",
    keywords: &[
        "Data Scientist",
        "Machine Learning",
        "AI Engineer",
        "Python",
        "Deep Learning",
        "Generative AI",
        "Cloud Computing",
        "LLM",
    ],
};

pub static HERO_ROLES: &[&str] = &[
    "Data Scientist",
    "AI Engineer",
    "Machine Learning Expert",
    "Python Developer",
    "Deep Learning Specialist",
    "Generative AI Expert",
];

pub static HIGHLIGHT_STATS: &[HighlightStat] = &[
    HighlightStat {
        value: "2+",
        label: "Years Experience",
    },
    HighlightStat {
        value: "15+",
        label: "Projects Completed",
    },
    HighlightStat {
        value: "100%",
        label: "Client Satisfaction",
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "cloud-optimizer",
        title: "Cloud Optimizer (AWS, Azure, GCP)",
        description: "Provides a software toolkit for Cloud Probe, Data, Inventory Management, and Cost Reduction Services on AWS, GCP, and Azure. Designed real-time cloud monitoring tools and integrated AI-driven cost-reduction strategies.",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=500&h=300&fit=crop",
        technologies: &["AWS", "Azure", "GCP", "Python", "Terraform", "AI/ML"],
        link: None,
        github: None,
        featured: true,
    },
    Project {
        id: "rd-project",
        title: "R&D Image Augmentation Project",
        description: "Developed image augmentation pipelines using Generative AI for synthetic data creation. Built and evaluated ML models, data pipelines, and exploratory analysis techniques.",
        image: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=500&h=300&fit=crop",
        technologies: &["Python", "TensorFlow", "Generative AI", "Computer Vision"],
        link: None,
        github: None,
        featured: false,
    },
    Project {
        id: "power-llm-bi",
        title: "Power LLM_BI Project",
        description: "Designed architecture integrating user interfaces, decision-making agents, and secure DB management. Utilized NLP and Vector DB for secure and optimized natural language query processing.",
        image: "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=500&h=300&fit=crop",
        technologies: &["LLM", "NLP", "Vector DB", "Python", "React"],
        link: None,
        github: None,
        featured: false,
    },
    Project {
        id: "financial-docs",
        title: "Financial Documentation Assistant",
        description: "Implemented a Financial Assistant system using GPT-4 Vision for document analysis. Utilized Vector DB for secure data retrieval and built scalable document pipelines.",
        image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=500&h=300&fit=crop",
        technologies: &["GPT-4", "Vector DB", "Python", "Document Processing"],
        link: None,
        github: None,
        featured: false,
    },
    Project {
        id: "activity-dosing",
        title: "Activity-Based Dosing System",
        description: "Developed a personalized dosing system based on user activity patterns and health metrics using machine learning algorithms.",
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=500&h=300&fit=crop",
        technologies: &["Python", "ML", "Healthcare Analytics", "IoT"],
        link: None,
        github: None,
        featured: false,
    },
    Project {
        id: "sorting-visualizer",
        title: "Sorting Visualizer Website",
        description: "Interactive web application that visualizes various sorting algorithms in real-time. Built with JavaScript to help understand algorithm complexity and performance.",
        image: "https://images.unsplash.com/photo-1516110833967-0b5716ca1387?w=500&h=300&fit=crop",
        technologies: &["JavaScript", "HTML", "CSS", "Algorithm Visualization"],
        link: None,
        github: Some("https://github.com/balvendar111/Sorting-Visualizer-website"),
        featured: false,
    },
    Project {
        id: "stock-market",
        title: "Stock Market Analysis",
        description: "Comprehensive stock market analysis using machine learning techniques and data visualization. Implemented predictive models for market trends.",
        image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=500&h=300&fit=crop",
        technologies: &["Python", "Jupyter Notebook", "Data Analysis", "ML"],
        link: None,
        github: Some("https://github.com/balvendar111/stock_market"),
        featured: false,
    },
    Project {
        id: "cyber-bullying-detection",
        title: "Cyber Bullying Detection System",
        description: "Machine learning-based system to detect and classify cyber bullying in text data using natural language processing techniques.",
        image: "https://images.unsplash.com/photo-1563206767-5b18f218e8de?w=500&h=300&fit=crop",
        technologies: &["Python", "NLP", "Machine Learning", "Text Classification"],
        link: None,
        github: Some(
            "https://github.com/balvendar111/Cyber-Bullying-Detection-Using-ML-Algorithims-main-",
        ),
        featured: false,
    },
    Project {
        id: "smart-hire",
        title: "SmartHire System",
        description: "AI-powered recruitment system that streamlines the hiring process using machine learning algorithms for candidate matching and assessment.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=500&h=300&fit=crop",
        technologies: &["AI/ML", "Python", "HR Tech", "Automation"],
        link: None,
        github: Some("https://github.com/balvendar111/SmartHire"),
        featured: false,
    },
];

pub static EXPERIENCES: &[Experience] = &[Experience {
    id: "current-role",
    company: "Grid_Dynamics",
    position: "Data Scientist Engineer",
    duration: "2022 - Present",
    location: "Hyderabad, India",
    responsibilities: &[
        "Designed and deployed innovative data-driven solutions driving significant business impact",
        "Developed machine learning and deep learning models for various business applications",
        "Implemented Generative AI solutions for process automation and optimization",
        "Led cross-functional teams in delivering transformative technology solutions",
        "Specialized in cloud optimization and cost reduction strategies across AWS, GCP, and Azure",
        "Built image augmentation pipelines using Generative AI for synthetic data creation",
    ],
    technologies: &[
        "Python",
        "TensorFlow",
        "AWS",
        "Azure",
        "GCP",
        "Docker",
        "Kubernetes",
        "Generative AI",
    ],
}];

pub static SKILLS: &[Skill] = &[
    Skill {
        category: "Machine Learning Frameworks",
        icon: SkillIcon::Brain,
        progress: 90,
        items: &["Scikit-learn", "TensorFlow", "Keras", "PyTorch"],
    },
    Skill {
        category: "Large Language Models",
        icon: SkillIcon::Code,
        progress: 85,
        items: &[
            "OpenAI GPT Models",
            "Claude AI",
            "LangChain",
            "Chainlit",
            "Retrieval-Augmented Generation (RAG)",
            "Prompt Engineering",
        ],
    },
    Skill {
        category: "Programming Languages",
        icon: SkillIcon::Code,
        progress: 95,
        items: &["Python", "C++", "JavaScript", "TypeScript"],
    },
    Skill {
        category: "Cloud Platforms",
        icon: SkillIcon::Cloud,
        progress: 80,
        items: &[
            "AWS (EC2, Lambda, SageMaker)",
            "Azure ML",
            "Google Cloud Platform",
        ],
    },
    Skill {
        category: "Data Analysis & Visualization",
        icon: SkillIcon::LineChart,
        progress: 85,
        items: &["Pandas", "NumPy", "Matplotlib", "Seaborn", "Plotly", "Tableau"],
    },
    Skill {
        category: "Vector Databases",
        icon: SkillIcon::Database,
        progress: 75,
        items: &["FAISS", "ChromaDB", "Pinecone", "Weaviate"],
    },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: "aws-cloud-practitioner",
        title: "AWS Cloud Practitioner",
        issuer: "Amazon Web Services",
        date: "2023",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=300&h=300&fit=crop",
        credential_url: Some(
            "https://cp.certmetrics.com/amazon/en/public/verify/credential/1G0FJCS1VMRQQE5D",
        ),
    },
    Certification {
        id: "aws-developer-associate",
        title: "AWS Developer Associate",
        issuer: "Amazon Web Services",
        date: "2024",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=300&h=300&fit=crop",
        credential_url: Some(
            "https://cp.certmetrics.com/amazon/en/public/verify/credential/a08b87c65acd41a09ee0d0cb8363048a",
        ),
    },
    Certification {
        id: "deeplearning-ai",
        title: "Deep Learning Specialization",
        issuer: "DeepLearning.AI",
        date: "2023",
        image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?w=300&h=300&fit=crop",
        credential_url: None,
    },
    Certification {
        id: "machine-learning-production",
        title: "Machine Learning in Production",
        issuer: "DeepLearning.AI",
        date: "2024",
        image: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=300&h=300&fit=crop",
        credential_url: None,
    },
    Certification {
        id: "big-data-hadoop",
        title: "SQL, NoSQL, Big Data and Hadoop",
        issuer: "Database Technologies",
        date: "2024",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=300&h=300&fit=crop",
        credential_url: None,
    },
    Certification {
        id: "computer-vision",
        title: "Python for Computer Vision with OpenCV and Deep Learning",
        issuer: "Computer Vision Institute",
        date: "2024",
        image: "https://images.unsplash.com/photo-1507146426996-ef05306b995a?w=300&h=300&fit=crop",
        credential_url: None,
    },
    Certification {
        id: "nlp-classification",
        title: "Natural Language Processing with Classification and Vector Spaces",
        issuer: "NLP Academy",
        date: "2024",
        image: "https://images.unsplash.com/photo-1516110833967-0b5716ca1387?w=300&h=300&fit=crop",
        credential_url: None,
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("duplicate {collection} id: {id}")]
    DuplicateId {
        collection: &'static str,
        id: &'static str,
    },
    #[error("skill {category} has progress {progress}, expected 0-100")]
    ProgressOutOfRange { category: &'static str, progress: u8 },
}

fn unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = &'static str>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

/// Checks the hand-authored tables: unique ids and skill progress in range.
pub fn check_invariants() -> Result<(), DataError> {
    unique_ids("project", PROJECTS.iter().map(|p| p.id))?;
    unique_ids("experience", EXPERIENCES.iter().map(|e| e.id))?;
    unique_ids("certification", CERTIFICATIONS.iter().map(|c| c.id))?;
    if let Some(skill) = SKILLS.iter().find(|s| s.progress > 100) {
        return Err(DataError::ProgressOutOfRange {
            category: skill.category,
            progress: skill.progress,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_hold_invariants() {
        assert_eq!(check_invariants(), Ok(()));
        assert_eq!(PROJECTS.len(), 9);
        assert_eq!(CERTIFICATIONS.len(), 7);
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let res = unique_ids("project", ["a", "b", "a"].into_iter());
        assert_eq!(
            res,
            Err(DataError::DuplicateId {
                collection: "project",
                id: "a"
            })
        );
    }

    #[test]
    fn test_skill_icon_lookup() {
        assert_eq!("Brain".parse::<SkillIcon>(), Ok(SkillIcon::Brain));
        assert_eq!("Code2".parse::<SkillIcon>(), Ok(SkillIcon::Code));
        assert_eq!(
            "Rocket".parse::<SkillIcon>(),
            Err(UnknownIcon("Rocket".to_string()))
        );
        for skill in SKILLS {
            assert_eq!(skill.icon.name().parse::<SkillIcon>(), Ok(skill.icon));
        }
    }

    #[test]
    fn test_personal_info_helpers() {
        assert_eq!(PERSONAL_INFO.initials(), "BS");
        assert_eq!(PERSONAL_INFO.mailto(), "mailto:Balvendarsingh111@gmail.com");
    }

    #[test]
    fn test_current_experience() {
        assert!(EXPERIENCES[0].is_current());
    }

    #[test]
    fn test_validated_skills_from_title() {
        let aws = &CERTIFICATIONS[0];
        assert_eq!(aws.validated_skills(), vec!["Cloud Computing", "AWS Services"]);
        let sql = CERTIFICATIONS
            .iter()
            .find(|c| c.id == "big-data-hadoop")
            .unwrap();
        assert_eq!(sql.validated_skills(), vec!["SQL", "Big Data"]);
        let dl = CERTIFICATIONS
            .iter()
            .find(|c| c.id == "deeplearning-ai")
            .unwrap();
        assert!(dl.validated_skills().is_empty());
    }
}
