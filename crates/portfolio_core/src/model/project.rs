//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record shown in the gallery.
//! - Provide the category-or-technology filter predicate.
//!
//! # Invariants
//! - `category` is always a member of the closed enumeration.
//! - `technologies` keeps authored order and casing; deduplication is
//!   a display concern handled by derived views, not by the record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed category enumeration for gallery grouping.
///
/// An unrecognized value in source data is a data-entry error and is
/// rejected at the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Api,
    Fullstack,
    Mobile,
    Other,
}

impl ProjectCategory {
    /// Returns the wire/display name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
            Self::Fullstack => "fullstack",
            Self::Mobile => "mobile",
            Self::Other => "other",
        }
    }

    /// Parses a category name, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "web" => Some(Self::Web),
            "api" => Some(Self::Api),
            "fullstack" => Some(Self::Fullstack),
            "mobile" => Some(Self::Mobile),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Display for ProjectCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for project records entering the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyId,
    EmptyTitle { id: String },
    EmptyRepoUrl { id: String },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id cannot be empty"),
            Self::EmptyTitle { id } => write!(f, "project `{id}` has an empty title"),
            Self::EmptyRepoUrl { id } => write!(f, "project `{id}` has an empty repo url"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical project record for the gallery and its derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable unique ID used for card identity and modal routing.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Extended body shown in the project modal, when authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Ordered technology tags; order is meaningful for display.
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub repo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub featured: bool,
    pub year: i32,
}

impl Project {
    /// Creates a minimal project with only required fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: ProjectCategory,
        repo_url: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            long_description: None,
            technologies: Vec::new(),
            category,
            repo_url: repo_url.into(),
            live_url: None,
            image_url: None,
            featured: false,
            year,
        }
    }

    /// Checks required fields before the record enters a repository.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        if self.repo_url.trim().is_empty() {
            return Err(ProjectValidationError::EmptyRepoUrl {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Single-value filter predicate spanning two dimensions.
    ///
    /// # Contract
    /// - Matches when `filter` equals the category name exactly.
    /// - Otherwise matches when any technology tag equals `filter`
    ///   under ASCII case-insensitive comparison.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if self.category.as_str() == filter {
            return true;
        }
        self.technologies
            .iter()
            .any(|tech| tech.eq_ignore_ascii_case(filter))
    }
}
