use super::{Link, MetaCard, Profile, ProfileLink, Project, SkillGroup, TimelineEntry};

pub const PROFILE: Profile = Profile {
    name: "Tyler Wood",
    brand_mark: "TW",
    brand_suffix: ".CS",
    brand_title: "T-wood Development",
    brand_subtitle: "Software Engineering \u{2022} Computer Science",
    email: "twood.cs@gmail.com",
    description: "Portfolio of Tyler Wood: cross-platform apps, backend systems, and data-driven tools.",
};

pub static PROJECTS: &[Project] = &[
    Project {
        title: "DropSwift",
        tagline: "Cross-platform retail monitor desktop app (Rust + Tauri + React)",
        bullets: &[
            "Built a desktop app that monitors multiple retail sites and notifies users when products appear or change.",
            "Designed a secure activation key system and account flow backed by Supabase (RLS + Edge Functions).",
            "Shipped multi-platform builds (Windows, macOS, Linux) via CI and release automation.",
        ],
        stack: &["Rust", "Tauri", "React", "TypeScript", "Vite", "Supabase"],
        links: Some(&[
            Link { label: "GitHub", href: "#" },
            Link { label: "Demo", href: "#" },
        ]),
    },
    Project {
        title: "Lambda & Generics Research",
        tagline: "Java AST analysis across open-source repositories",
        bullets: &[
            "Built analysis tooling to track lambda expression usage and removals across large Java codebases.",
            "Collected comparative metrics across multiple projects and summarized results for an ACM-style paper.",
            "Implemented visitors and tokenization scripts to extract structured findings.",
        ],
        stack: &["Java", "Eclipse JDT", "Python", "Data Analysis"],
        links: Some(&[Link { label: "Paper", href: "#" }]),
    },
    Project {
        title: "DNS Proxy Server",
        tagline: "Recursive resolver with caching over UDP",
        bullets: &[
            "Implemented a UDP DNS proxy that performs recursive resolution and caches results for faster responses.",
            "Added safe parsing and timeouts, plus cache invalidation based on TTL behavior.",
        ],
        stack: &["Python", "Networking", "UDP", "Caching"],
        links: Some(&[Link { label: "GitHub", href: "#" }]),
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        label: "Languages",
        items: &["Rust", "TypeScript", "Java", "Python", "SQL", "C++"],
    },
    SkillGroup {
        label: "Frontend",
        items: &["React", "Vite", "HTML", "CSS", "UI/UX"],
    },
    SkillGroup {
        label: "Backend",
        items: &["Supabase", "PostgreSQL", "Edge Functions", "APIs"],
    },
    SkillGroup {
        label: "DevOps",
        items: &["GitHub Actions", "Release pipelines", "Linux packaging"],
    },
    SkillGroup {
        label: "Concepts",
        items: &["Concurrency", "Networking", "Data Structures", "Security basics"],
    },
];

pub static META_CARDS: &[MetaCard] = &[
    MetaCard {
        label: "Focus",
        value: "Desktop apps, tooling, automation",
    },
    MetaCard {
        label: "Stack",
        value: "Rust \u{2022} React \u{2022} TypeScript",
    },
    MetaCard {
        label: "Availability",
        value: "Open to SWE roles",
    },
];

pub static HIGHLIGHTS: &[&str] = &[
    "Cross-platform desktop app development (Tauri)",
    "Secure key and account flows (Supabase + RLS)",
    "Automation and CI for multi-OS releases",
    "Networking fundamentals and server tooling",
];

// The email card of the link grid is built from `PROFILE.email`.
pub static PROFILE_LINKS: &[ProfileLink] = &[
    ProfileLink {
        title: "GitHub",
        subtitle: "Projects and code",
        href: "#",
        external: true,
    },
    ProfileLink {
        title: "LinkedIn",
        subtitle: "Work history",
        href: "#",
        external: true,
    },
    ProfileLink {
        title: "Resume PDF",
        subtitle: "Download",
        href: "#",
        external: true,
    },
];

pub static LOOKING_FOR: &[&str] = &[
    "Software Engineering roles (backend, full-stack, tooling, or desktop)",
    "Teams that ship, measure, and iterate",
    "Projects with real users and real constraints",
];

pub static EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        role: "Software Project Lead",
        meta: "DropSwift \u{2022} 2025",
        bullets: &[
            "Designed system architecture and core monitoring pipeline.",
            "Built secure activation key verification with backend enforcement.",
            "Automated multi-platform packaging and release delivery.",
        ],
    },
    TimelineEntry {
        role: "Research Project Contributor",
        meta: "Java AST Analysis \u{2022} 2025",
        bullets: &[
            "Developed tooling to extract and compare lambda usage metrics across repositories.",
            "Wrote findings for an academic-style report with tables and evaluation text.",
        ],
    },
];

pub const SCHOOL: &str = "Arkansas State University";

pub static EDUCATION: &[TimelineEntry] = &[TimelineEntry {
    role: "B.A. Computer Science",
    meta: "2025",
    bullets: &[
        "Focus: software engineering, systems, networking, databases",
        "Capstone-style work: cross-platform desktop application + backend",
    ],
}];

pub const MINOR: TimelineEntry = TimelineEntry {
    role: "Minor in General Business",
    meta: "",
    bullets: &[],
};
