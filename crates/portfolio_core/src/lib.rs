//! Core domain logic for the portfolio site.
//! This crate is the single source of truth for gallery filtering and
//! contribution-calendar aggregation.

pub mod fetch;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use fetch::activity::{
    decode_contributions, ActivityFetcher, FetchError, FetchResult, StaticActivityFetcher,
};
pub use fetch::panel::{ContributionPanel, ContributionState};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contribution::{
    ContributionDay, ContributionWeek, GitHubContributions, DAYS_PER_WEEK, MAX_INTENSITY_LEVEL,
};
pub use model::profile::{ProfileInfo, SocialLink};
pub use model::project::{Project, ProjectCategory, ProjectValidationError};
pub use repo::project_repo::{
    InMemoryProjectRepository, ProjectRepository, RepoError, RepoResult,
};
pub use service::contribution_service::{
    aggregate, aggregate_at, format_account_age, intensity_level, RawActivityDay,
    RawActivitySeries,
};
pub use service::portfolio_service::PortfolioService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
