//! Canonical seed dataset for the portfolio.
//!
//! # Responsibility
//! - Hold the authored project list and profile record in one place.
//!
//! # Invariants
//! - Every seeded project passes `Project::validate()` and ids are
//!   unique (covered by tests, enforced again by repository `new`).

use crate::model::profile::{ProfileInfo, SocialLink};
use crate::model::project::{Project, ProjectCategory};

/// The authored profile record.
pub fn default_profile() -> ProfileInfo {
    ProfileInfo {
        name: "Scott Moore".to_string(),
        role: "Full-stack Developer".to_string(),
        bio: "I craft elegant, scalable web applications with a focus on \
              clean architecture and exceptional user experiences. With \
              expertise spanning frontend frameworks, backend systems, and \
              cloud infrastructure, I bring ideas to life through \
              thoughtful engineering."
            .to_string(),
        email: "scott@geno.gg".to_string(),
        location: Some("United Kingdom".to_string()),
        available_for_work: true,
        social_links: vec![
            social("GitHub", "https://github.com/genobear", "github"),
            social("LinkedIn", "https://linkedin.com/in/yourusername", "linkedin"),
            social("Twitter", "https://twitter.com/yourusername", "twitter"),
        ],
    }
}

/// The authored project list, in display order.
pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Andrew Memoirs",
            "A personal memoir website for Andrew, showcasing his life \
             stories and experiences in a beautifully designed format.",
            &["HTML", "GitHub Pages", "CSS"],
            ProjectCategory::Web,
            "https://github.com/genobear/Andrew-memoirs",
            Some("https://genobear.github.io/Andrew-memoirs/"),
            None,
            true,
            2026,
        ),
        project(
            "2",
            "API Forge",
            "A robust REST API starter kit with authentication, rate \
             limiting, and comprehensive documentation built-in.",
            &["Python", "FastAPI", "PostgreSQL", "Docker", "OpenAPI"],
            ProjectCategory::Api,
            "https://github.com/yourusername/api-forge",
            None,
            Some("/assets/screenshots/image.png"),
            true,
            2024,
        ),
        project(
            "3",
            "Minimal Portfolio",
            "An elegant, performance-focused portfolio template with dark \
             mode and smooth animations.",
            &["Angular", "SCSS", "TypeScript"],
            ProjectCategory::Web,
            "https://github.com/yourusername/minimal-portfolio",
            Some("https://portfolio.example.com"),
            None,
            false,
            2024,
        ),
        project(
            "4",
            "TaskFlow",
            "A collaborative task management application with real-time \
             updates, Kanban boards, and team analytics.",
            &["React", "Node.js", "MongoDB", "Socket.io", "Chart.js"],
            ProjectCategory::Fullstack,
            "https://github.com/yourusername/taskflow",
            Some("https://taskflow.example.com"),
            None,
            true,
            2023,
        ),
        project(
            "5",
            "DevCLI",
            "A powerful command-line tool for automating development \
             workflows, scaffolding, and code generation.",
            &["Rust", "CLI", "TOML"],
            ProjectCategory::Other,
            "https://github.com/yourusername/devcli",
            None,
            None,
            false,
            2023,
        ),
        project(
            "6",
            "WeatherNow",
            "A beautiful weather application with location-based \
             forecasts, radar maps, and severe weather alerts.",
            &["Flutter", "Dart", "OpenWeather API"],
            ProjectCategory::Mobile,
            "https://github.com/yourusername/weathernow",
            None,
            None,
            false,
            2023,
        ),
    ]
}

fn social(name: &str, url: &str, icon: &str) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    category: ProjectCategory,
    repo_url: &str,
    live_url: Option<&str>,
    image_url: Option<&str>,
    featured: bool,
    year: i32,
) -> Project {
    let mut record = Project::new(id, title, description, category, repo_url, year);
    record.technologies = technologies.iter().map(|t| t.to_string()).collect();
    record.live_url = live_url.map(str::to_string);
    record.image_url = image_url.map(str::to_string);
    record.featured = featured;
    record
}
