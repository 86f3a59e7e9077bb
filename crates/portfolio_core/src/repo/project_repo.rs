//! Project repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable read APIs over the canonical project list and
//!   the singleton profile.
//! - Enforce record validation and id uniqueness at load time.
//!
//! # Invariants
//! - Insertion order of the project list is preserved; derived views
//!   depend on it.
//! - There is no write path after construction.

use crate::model::profile::ProfileInfo;
use crate::model::project::{Project, ProjectValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors raised while loading a project dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ProjectValidationError),
    DuplicateId(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<ProjectValidationError> for RepoError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-only repository interface over portfolio source data.
pub trait ProjectRepository {
    /// All projects in insertion order.
    fn projects(&self) -> &[Project];
    /// The singleton profile record.
    fn profile(&self) -> &ProfileInfo;
}

/// Validated, immutable in-memory dataset holder.
#[derive(Debug)]
pub struct InMemoryProjectRepository {
    projects: Vec<Project>,
    profile: ProfileInfo,
}

impl InMemoryProjectRepository {
    /// Builds a repository after validating every project record.
    ///
    /// # Errors
    /// - `RepoError::Validation` when a record has blank required
    ///   fields.
    /// - `RepoError::DuplicateId` when two records share an id.
    pub fn new(projects: Vec<Project>, profile: ProfileInfo) -> RepoResult<Self> {
        let mut seen_ids = HashSet::new();
        for project in &projects {
            project.validate()?;
            if !seen_ids.insert(project.id.as_str()) {
                return Err(RepoError::DuplicateId(project.id.clone()));
            }
        }
        Ok(Self { projects, profile })
    }

    /// Builds a repository seeded with the canonical dataset.
    ///
    /// The seed is authored in-crate; a dedicated test keeps it in
    /// line with `new()` validation, so no fallible path is exposed.
    pub fn with_default_dataset() -> Self {
        Self {
            projects: crate::repo::dataset::default_projects(),
            profile: crate::repo::dataset::default_profile(),
        }
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn profile(&self) -> &ProfileInfo {
        &self.profile
    }
}
