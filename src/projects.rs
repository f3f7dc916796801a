//! Project records shown in the gallery.
//!
//! There is no backend yet: the list is a fixed set of mock projects that
//! the gallery "loads" after a short simulated delay.

use serde::{Deserialize, Serialize};

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            thumbnail_url: thumbnail_url.into(),
            demo_url: None,
        }
    }

    pub fn with_demo(mut self, url: impl Into<String>) -> Self {
        self.demo_url = Some(url.into());
        self
    }
}

/// The sample projects served in place of an API response.
pub fn mock_projects() -> Vec<Project> {
    vec![
        Project::new(
            "1",
            "E-Commerce Website",
            "A fully responsive e-commerce platform built with React and Node.js",
            &["React", "Node.js", "MongoDB", "Express"],
            "/project1.jpg",
        )
        .with_demo("https://example.com/demo1"),
        Project::new(
            "2",
            "Portfolio Website",
            "A modern portfolio website showcasing my skills and projects",
            &["Next.js", "Tailwind CSS", "Framer Motion"],
            "/project2.jpg",
        ),
        Project::new(
            "3",
            "Task Management App",
            "A task management application with drag and drop functionality",
            &["React", "TypeScript", "Firebase"],
            "/project3.jpg",
        )
        .with_demo("https://example.com/demo3"),
    ]
}

/// Loading state of the project list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProjectsLoad {
    #[default]
    Loading,
    Loaded(Vec<Project>),
    Failed(String),
}

impl ProjectsLoad {
    /// Settle a fetch result into a load state.
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<Project>, E>) -> Self {
        match result {
            Ok(projects) => Self::Loaded(projects),
            Err(e) => {
                tracing::error!("Failed to fetch projects: {}", e);
                Self::Failed("Failed to fetch projects".to_string())
            }
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded projects, empty while loading or after a failure.
    pub fn projects(&self) -> &[Project] {
        match self {
            Self::Loaded(projects) => projects,
            _ => &[],
        }
    }

    /// Whether the slider is shown. Until then the loading line or the
    /// error text takes its place.
    pub fn shows_slider(&self) -> bool {
        !self.is_loading() && self.error().is_none()
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
