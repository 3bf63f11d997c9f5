use std::path::PathBuf;

use anyhow::{ensure, Result};

/// One biographical/career record shown on the journey timeline.
/// The dataset is fixed at startup; nothing creates or destroys entries
/// at runtime.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Education,
    Work,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub images: &'static [&'static str],
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// None means the work is private, the card shows a lock instead.
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub name: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub resume: &'static str,
    pub avatar: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Maya Calder",
    initials: "MC",
    tagline: "Building enterprise solutions for professional development",
    blurb: "Full stack developer specializing in enterprise grade web & mobile apps",
    email: "maya.calder@example.com",
    github: "https://github.com/mayacalder",
    resume: "resume.pdf",
    avatar: "me.jpg",
};

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        id: "bsc-start",
        title: "BSc Computer Science",
        organization: "University",
        period: "2019 - 2023",
        category: Category::Education,
        description: "Started a Bachelor of Science in Computer Science with a focus \
                      on software engineering, algorithms, and web technologies.",
        skills: &[
            "Data Structures",
            "Algorithms",
            "Software Engineering",
            "Databases",
            "Web Development",
        ],
    },
    TimelineEntry {
        id: "placement",
        title: "Placement Year",
        organization: "Axon Digital",
        period: "2021 - 2022",
        category: Category::Work,
        description: "Developed web applications for professional development \
                      platforms. Hands-on experience with client work end to end.",
        skills: &["React", "JavaScript", "Node.js", "Git", "Agile", "REST APIs"],
    },
    TimelineEntry {
        id: "graduated",
        title: "Graduated",
        organization: "BSc Computer Science",
        period: "2023",
        category: Category::Education,
        description: "Graduated with first-class honours and the departmental prize \
                      for outstanding achievement during the placement year.",
        skills: &["Award", "First-class"],
    },
    TimelineEntry {
        id: "developer",
        title: "Software Developer",
        organization: "Axon Digital",
        period: "2022 - Present",
        category: Category::Work,
        description: "Building enterprise-grade CPD platforms. Leading development \
                      of multiple projects with cloud deployments.",
        skills: &["React", "TypeScript", "Flutter", "Node.js", "AWS", "Docker"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "HTTP server from scratch",
        images: &["http_server.png"],
        description: "HTTP/1.1 server built from the socket up: message parsing off \
                      a byte stream, chunked transfer encoding, connection reuse.",
        tags: &["RFC 9110", "State Machines", "Byte Parsing", "Chunked Encoding"],
        link: Some("https://github.com/mayacalder/http-from-scratch"),
    },
    Project {
        title: "E-assessment platform",
        images: &["assess_home.png", "assess_review.png"],
        description: "Web apps with role-based access letting trainees in \
                      professional practice submit and validate their work.",
        tags: &["jQuery", "XSLT", "XML", "C# .NET", "AWS"],
        link: None,
    },
    Project {
        title: "Mobile app for practice partners",
        images: &["microskills.png"],
        description: "Designed, developed and shipped a mobile app in daily use by \
                      partner organizations in the health sector.",
        tags: &["Flutter", "WebViews", "Encrypted Storage", "MVC"],
        link: None,
    },
    Project {
        title: "Task manager",
        images: &["tasks_board.png", "tasks_create.png"],
        description: "Task management for caseworkers: interactive kanban board \
                      with live updates and an audited change history.",
        tags: &["React", "Express.js", "SQL", "Unit Testing", "Kanban"],
        link: Some("https://github.com/mayacalder/taskmanager"),
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "frontend",
        title: "Frontend",
        icon: "video-display-symbolic",
        skills: &["React", "Angular", "TypeScript", "Tailwind CSS", "XSLT/XML", "HTML/CSS"],
    },
    SkillGroup {
        name: "backend",
        title: "Backend",
        icon: "network-server-symbolic",
        skills: &["Node.js", "Express", "REST APIs", "SQL", "Python", "C#/C++"],
    },
    SkillGroup {
        name: "tools",
        title: "Tools",
        icon: "applications-utilities-symbolic",
        skills: &["Git", "Postman", "Unit Testing", "AWS", "Azure DevOps", "Docker"],
    },
];

/// Resolves a bundled asset (avatar, project screenshots, resume) to a path
/// on disk. `FOLIO_ASSET_DIR` overrides the default `assets/` directory next
/// to the manifest.
pub fn asset_path(name: &str) -> Result<PathBuf> {
    let base = std::env::var_os("FOLIO_ASSET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"));
    let path = base.join(name);
    ensure!(path.is_file(), "asset {name} not found under {}", base.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_ids_are_unique() {
        for (i, a) in TIMELINE.iter().enumerate() {
            for b in TIMELINE.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn missing_asset_is_an_error() {
        assert!(asset_path("definitely-not-bundled.bin").is_err());
    }
}
