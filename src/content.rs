use crate::counters::{MetricKind, METRICS_REGION};
use crate::reveal::RegionId;

pub const OWNER_NAME: &str = "Lohith Kokkanti";
pub const OWNER_FULL_NAME: &str = "Venkata Lohith Kokkanti";
pub const AVAILABILITY: &str = "Available for SWE1/2 Opportunities";
pub const COPYRIGHT_YEAR: u16 = 2026;

pub const EXPERIENCE_TITLE_REGION: &str = "exp-title";
pub const SKILLS_TITLE_REGION: &str = "skills-title";
pub const PROJECTS_TITLE_REGION: &str = "projects-title";
pub const EDUCATION_TITLE_REGION: &str = "education-title";
pub const CONTACT_TITLE_REGION: &str = "contact-title";

pub const ACHIEVEMENT_PREFIX: &str = "achievement";
pub const SKILL_PREFIX: &str = "skill";
pub const PROJECT_PREFIX: &str = "project";
pub const EDUCATION_PREFIX: &str = "edu";
pub const CONTACT_PREFIX: &str = "contact";

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub static NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Experience",
        anchor: "#experience",
    },
    NavLink {
        label: "Projects",
        anchor: "#projects",
    },
    NavLink {
        label: "Contact",
        anchor: "#contact",
    },
];

pub enum Highlight {
    Counter(MetricKind),
    Static(&'static str),
}

pub struct HighlightCard {
    pub highlight: Highlight,
    pub caption: &'static str,
    pub detail: &'static str,
    pub accent: &'static str,
}

pub struct Role {
    pub region: &'static str,
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub summary: Option<&'static str>,
    pub highlight: HighlightCard,
}

pub struct MetricCard {
    pub kind: MetricKind,
    pub caption: &'static str,
    pub detail: &'static str,
    pub accent: &'static str,
}

pub static FEATURED_ROLE: Role = Role {
    region: "accenture",
    period: "2021 - 2024",
    title: "Software Engineer",
    company: "Accenture",
    location: "Bangalore, India",
    summary: None,
    highlight: HighlightCard {
        highlight: Highlight::Counter(MetricKind::Success),
        caption: "Job Success Rate",
        detail: "5,000+ stores • 50K+ daily events",
        accent: "blue",
    },
};

pub static METRIC_CARDS: [MetricCard; 3] = [
    MetricCard {
        kind: MetricKind::Latency,
        caption: "Latency Reduction",
        detail: "Redis optimization",
        accent: "cyan",
    },
    MetricCard {
        kind: MetricKind::Traffic,
        caption: "Traffic Handling",
        detail: "Kafka processing",
        accent: "purple",
    },
    MetricCard {
        kind: MetricKind::Mttr,
        caption: "MTTR Achieved",
        detail: "Enhanced observability",
        accent: "pink",
    },
];

pub static ACHIEVEMENTS: [&str; 3] = [
    "Owned backend services for distributed retail platform serving 5,000+ stores with Spring Boot, Kafka, Redis, and MySQL",
    "Engineered scalable event processing with idempotent, retry-safe workflows and DLQ-based recovery",
    "Fixed high-impact business correctness issues by implementing atomic DB updates and concurrency-safe logic",
];

pub static OTHER_ROLES: [Role; 2] = [
    Role {
        region: "baillie",
        period: "May 2025 - Aug 2025",
        title: "Software Engineering Intern",
        company: "Baillie Lumber (UB TCIE)",
        location: "Hamburg, NY",
        summary: Some(
            "Built production-grade FastAPI backend with Node.js validation UI, implementing schema validation and audit logging that reduced manual correction cycles by 80% while optimizing Spark SQL queries on 50M+ records.",
        ),
        highlight: HighlightCard {
            highlight: Highlight::Counter(MetricKind::Cycle),
            caption: "Cycle Reduction",
            detail: "Production workflow",
            accent: "green",
        },
    },
    Role {
        region: "chloros",
        period: "Jun 2019 - Aug 2019",
        title: "Software Developer Intern",
        company: "Chloros Technologies",
        location: "Bangalore, India",
        summary: Some(
            "Configured Nginx routing and Kubernetes health checks behind AWS ALB for safer deployments, automated infrastructure provisioning with Terraform and Jenkins, and implemented CloudWatch and Grafana monitoring.",
        ),
        highlight: HighlightCard {
            highlight: Highlight::Static("DevOps"),
            caption: "Infrastructure Focus",
            detail: "Terraform • K8s • AWS",
            accent: "orange",
        },
    },
];

pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
    pub icon: &'static str,
}

pub static SKILLS: [SkillGroup; 5] = [
    SkillGroup {
        category: "Languages",
        items: &["Java", "C++", "Python", "SQL", "JavaScript"],
        icon: "💻",
    },
    SkillGroup {
        category: "Backend",
        items: &["Spring Boot", "FastAPI", "Kafka", "Redis", "REST APIs"],
        icon: "⚙️",
    },
    SkillGroup {
        category: "Systems",
        items: &["Distributed Systems", "Concurrency", "Multithreading", "Linux"],
        icon: "🔧",
    },
    SkillGroup {
        category: "Data",
        items: &["MySQL", "PostgreSQL", "MongoDB", "DynamoDB", "BigQuery"],
        icon: "💾",
    },
    SkillGroup {
        category: "Cloud",
        items: &["AWS", "Azure", "GCP", "Docker", "Kubernetes"],
        icon: "☁️",
    },
];

pub struct Project {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub tech: &'static str,
    pub link: &'static str,
    pub gradient: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        name: "Lite KV Store",
        tagline: "Redis-compatible storage engine",
        description: "Built in C++17 with multi-threaded TCP server, supporting 25+ commands with crash-safe recovery.",
        impact: "Validated correctness under concurrent load tests",
        tech: "C++17 • TCP/IP • Multithreading",
        link: "#",
        gradient: "blue-purple",
    },
    Project {
        name: "Taco-DB",
        tagline: "Relational database system",
        description: "Complete DBMS implementation with storage management, buffer pool, and query optimization.",
        impact: "Improved query execution efficiency",
        tech: "C++17 • Query Optimization • Buffer Pool",
        link: "#",
        gradient: "purple-pink",
    },
    Project {
        name: "PINTOS OS",
        tagline: "Operating system kernel",
        description: "Enhanced Unix-like kernel with priority donation and MLFQ scheduling.",
        impact: "30% faster multithreaded performance",
        tech: "C • x86 Assembly • OS Internals",
        link: "#",
        gradient: "pink-red",
    },
    Project {
        name: "GopherGauge",
        tagline: "Database benchmarking tool",
        description: "Distributed framework with modular drivers for SQL and NoSQL databases.",
        impact: "<10ms p95 latency at 100k requests",
        tech: "Go • Goroutines • Performance Testing",
        link: "#",
        gradient: "cyan-blue",
    },
];

pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
}

pub static EDUCATION: [Education; 2] = [
    Education {
        school: "University at Buffalo",
        degree: "Master of Science, Data Science",
        years: "2024 - 2026",
    },
    Education {
        school: "Presidency University",
        degree: "Bachelor of Technology, Computer Science",
        years: "2017 - 2021",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactIcon {
    Mail,
    Phone,
    Linkedin,
    Github,
}

impl ContactIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Mail => "✉",
            Self::Phone => "☎",
            Self::Linkedin => "in",
            Self::Github => "⌥",
        }
    }
}

pub struct Contact {
    pub icon: ContactIcon,
    pub label: &'static str,
    pub href: &'static str,
}

impl Contact {
    /// Web links open in a new tab; `mailto:` and `tel:` stay in place.
    pub fn opens_new_tab(&self) -> bool {
        url::Url::parse(self.href)
            .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

pub static CONTACTS: [Contact; 4] = [
    Contact {
        icon: ContactIcon::Mail,
        label: "Email",
        href: "mailto:venkatalohithk.9@gmail.com",
    },
    Contact {
        icon: ContactIcon::Phone,
        label: "Phone",
        href: "tel:+17165335494",
    },
    Contact {
        icon: ContactIcon::Linkedin,
        label: "LinkedIn",
        href: "https://linkedin.com/in/yourprofile",
    },
    Contact {
        icon: ContactIcon::Github,
        label: "GitHub",
        href: "https://github.com/yourusername",
    },
];

// Document order.
pub fn tracked_regions() -> Vec<RegionId> {
    let mut regions = vec![
        RegionId::from(EXPERIENCE_TITLE_REGION),
        RegionId::from(FEATURED_ROLE.region),
        RegionId::from(METRICS_REGION),
    ];
    regions.extend((0..ACHIEVEMENTS.len()).map(|index| RegionId::indexed(ACHIEVEMENT_PREFIX, index)));
    regions.extend(OTHER_ROLES.iter().map(|role| RegionId::from(role.region)));

    regions.push(RegionId::from(SKILLS_TITLE_REGION));
    regions.extend((0..SKILLS.len()).map(|index| RegionId::indexed(SKILL_PREFIX, index)));

    regions.push(RegionId::from(PROJECTS_TITLE_REGION));
    regions.extend((0..PROJECTS.len()).map(|index| RegionId::indexed(PROJECT_PREFIX, index)));

    regions.push(RegionId::from(EDUCATION_TITLE_REGION));
    regions.extend((0..EDUCATION.len()).map(|index| RegionId::indexed(EDUCATION_PREFIX, index)));

    regions.push(RegionId::from(CONTACT_TITLE_REGION));
    regions.extend((0..CONTACTS.len()).map(|index| RegionId::indexed(CONTACT_PREFIX, index)));

    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tracked_regions_are_unique() {
        let regions = tracked_regions();
        let unique: HashSet<&str> = regions.iter().map(RegionId::as_str).collect();

        assert_eq!(unique.len(), regions.len());
        assert_eq!(regions.len(), 3 + 3 + 2 + 1 + 5 + 1 + 4 + 1 + 2 + 1 + 4);
    }

    #[test]
    fn tracked_regions_cover_every_list_entry() {
        let regions = tracked_regions();
        let has = |id: &str| regions.iter().any(|region| region.as_str() == id);

        assert!(has(METRICS_REGION));
        assert!(has("achievement-2"));
        assert!(has("skill-4"));
        assert!(has("project-3"));
        assert!(has("edu-1"));
        assert!(has("contact-3"));
        assert!(!has("contact-4"));
    }

    #[test]
    fn only_web_contacts_open_new_tab() {
        let new_tab: Vec<&str> = CONTACTS
            .iter()
            .filter(|contact| contact.opens_new_tab())
            .map(|contact| contact.label)
            .collect();

        assert_eq!(new_tab, vec!["LinkedIn", "GitHub"]);
    }

    #[test]
    fn every_counter_is_shown_exactly_once() {
        let mut shown: Vec<MetricKind> = METRIC_CARDS.iter().map(|card| card.kind).collect();
        for role in std::iter::once(&FEATURED_ROLE).chain(OTHER_ROLES.iter()) {
            if let Highlight::Counter(kind) = role.highlight.highlight {
                shown.push(kind);
            }
        }

        for kind in MetricKind::ALL {
            assert_eq!(shown.iter().filter(|candidate| **candidate == kind).count(), 1);
        }
    }
}
