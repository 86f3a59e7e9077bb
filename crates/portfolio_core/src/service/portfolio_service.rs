//! Portfolio store with memoized derived views.
//!
//! # Responsibility
//! - Own the repository handle and the single active filter value.
//! - Expose the filtered/category/technology/featured views as lazy,
//!   cached derivations of source data.
//!
//! # Invariants
//! - Derived views are pure functions of (project list, filter);
//!   caches are invalidated on mutation, never patched in place.
//! - View reads borrow the store immutably while `set_filter` takes
//!   `&mut self`, so a reader always observes one consistent
//!   snapshot of filter and projects.

use crate::model::profile::ProfileInfo;
use crate::model::project::{Project, ProjectCategory};
use crate::repo::project_repo::ProjectRepository;
use once_cell::sync::OnceCell;

/// Sentinel filter value meaning "show all", alongside `None`.
const ALL_SENTINEL: &str = "all";

/// Process-wide portfolio store.
///
/// Each derived view is a `OnceCell` memo, recomputed lazily after
/// the inputs it depends on change.
pub struct PortfolioService<R: ProjectRepository> {
    repo: R,
    active_filter: Option<String>,
    filtered_cache: OnceCell<Vec<Project>>,
    categories_cache: OnceCell<Vec<ProjectCategory>>,
    technologies_cache: OnceCell<Vec<String>>,
    featured_cache: OnceCell<Vec<Project>>,
}

impl<R: ProjectRepository> PortfolioService<R> {
    /// Creates a store over the given repository with no active
    /// filter.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            active_filter: None,
            filtered_cache: OnceCell::new(),
            categories_cache: OnceCell::new(),
            technologies_cache: OnceCell::new(),
            featured_cache: OnceCell::new(),
        }
    }

    /// Replaces the active filter.
    ///
    /// # Contract
    /// - Accepts any string; nothing is an error. A value matching no
    ///   project simply yields an empty filtered view.
    /// - `None` and the literal `"all"` sentinel (ASCII
    ///   case-insensitive) both mean "show all".
    /// - Only the filtered view depends on the filter, so only its
    ///   cache is dropped.
    pub fn set_filter(&mut self, filter: Option<&str>) {
        self.active_filter = filter
            .filter(|value| !value.eq_ignore_ascii_case(ALL_SENTINEL))
            .map(str::to_string);
        self.filtered_cache = OnceCell::new();
    }

    /// The currently active filter, `None` meaning "show all".
    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    /// All projects in insertion order, unfiltered.
    pub fn projects(&self) -> &[Project] {
        self.repo.projects()
    }

    /// The singleton profile record.
    pub fn profile(&self) -> &ProfileInfo {
        self.repo.profile()
    }

    /// Projects matching the active filter, source order preserved.
    ///
    /// With no filter this is the full list. Otherwise a project is
    /// kept when the filter equals its category name or,
    /// case-insensitively, one of its technology tags.
    pub fn filtered_projects(&self) -> &[Project] {
        self.filtered_cache.get_or_init(|| {
            let all = self.repo.projects();
            match self.active_filter.as_deref() {
                None => all.to_vec(),
                Some(filter) => all
                    .iter()
                    .filter(|p| p.matches_filter(filter))
                    .cloned()
                    .collect(),
            }
        })
    }

    /// Distinct categories present across all projects, in
    /// first-occurrence order (stable per call for unchanged input).
    pub fn categories(&self) -> &[ProjectCategory] {
        self.categories_cache.get_or_init(|| {
            let mut seen = Vec::new();
            for project in self.repo.projects() {
                if !seen.contains(&project.category) {
                    seen.push(project.category);
                }
            }
            seen
        })
    }

    /// Distinct technology tags, lexicographically sorted.
    ///
    /// Display keeps authored casing even though filtering folds
    /// case; distinctness is exact-string, by the same asymmetry.
    pub fn all_technologies(&self) -> &[String] {
        self.technologies_cache.get_or_init(|| {
            let mut techs: Vec<String> = self
                .repo
                .projects()
                .iter()
                .flat_map(|p| p.technologies.iter().cloned())
                .collect();
            techs.sort();
            techs.dedup();
            techs
        })
    }

    /// Featured projects only, source order preserved.
    pub fn featured_projects(&self) -> &[Project] {
        self.featured_cache.get_or_init(|| {
            self.repo
                .projects()
                .iter()
                .filter(|p| p.featured)
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PortfolioService;
    use crate::model::profile::ProfileInfo;
    use crate::model::project::{Project, ProjectCategory};
    use crate::repo::project_repo::InMemoryProjectRepository;

    fn store_with(projects: Vec<Project>) -> PortfolioService<InMemoryProjectRepository> {
        let profile = ProfileInfo {
            name: "Test".to_string(),
            role: "Dev".to_string(),
            bio: String::new(),
            email: "t@example.com".to_string(),
            location: None,
            available_for_work: false,
            social_links: Vec::new(),
        };
        PortfolioService::new(InMemoryProjectRepository::new(projects, profile).unwrap())
    }

    fn tagged(id: &str, category: ProjectCategory, techs: &[&str]) -> Project {
        let mut p = Project::new(id, id, "desc", category, "https://example.com", 2024);
        p.technologies = techs.iter().map(|t| t.to_string()).collect();
        p
    }

    #[test]
    fn all_sentinel_string_behaves_like_none() {
        let mut store = store_with(vec![
            tagged("1", ProjectCategory::Web, &["Angular"]),
            tagged("2", ProjectCategory::Api, &["Python"]),
        ]);

        store.set_filter(Some("All"));
        assert_eq!(store.active_filter(), None);
        assert_eq!(store.filtered_projects().len(), 2);
    }

    #[test]
    fn filtered_view_recomputes_after_filter_change() {
        let mut store = store_with(vec![
            tagged("1", ProjectCategory::Web, &["Angular"]),
            tagged("2", ProjectCategory::Api, &["Python"]),
        ]);

        store.set_filter(Some("web"));
        assert_eq!(store.filtered_projects().len(), 1);
        // Read twice; memoized result must be stable.
        assert_eq!(store.filtered_projects()[0].id, "1");

        store.set_filter(Some("python"));
        assert_eq!(store.filtered_projects().len(), 1);
        assert_eq!(store.filtered_projects()[0].id, "2");

        store.set_filter(None);
        assert_eq!(store.filtered_projects().len(), 2);
    }

    #[test]
    fn categories_keep_first_occurrence_order() {
        let store = store_with(vec![
            tagged("1", ProjectCategory::Mobile, &[]),
            tagged("2", ProjectCategory::Web, &[]),
            tagged("3", ProjectCategory::Mobile, &[]),
        ]);

        assert_eq!(
            store.categories(),
            &[ProjectCategory::Mobile, ProjectCategory::Web]
        );
    }

    #[test]
    fn technologies_are_sorted_and_distinct_with_authored_casing() {
        let store = store_with(vec![
            tagged("1", ProjectCategory::Web, &["SCSS", "Angular"]),
            tagged("2", ProjectCategory::Api, &["Angular", "Python"]),
        ]);

        assert_eq!(store.all_technologies(), &["Angular", "Python", "SCSS"]);
    }
}
