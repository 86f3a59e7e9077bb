//! Contribution calendar model.
//!
//! # Responsibility
//! - Define the week-bucketed activity shapes shared by the
//!   aggregator and the fetch boundary.
//! - Keep the wire shape aligned with the frontend payload
//!   (camelCase fields, zero-defaults for absent numbers).
//!
//! # Invariants
//! - A well-formed `ContributionWeek` holds exactly
//!   [`DAYS_PER_WEEK`] days, Sunday first.
//! - `level` stays within `0..=MAX_INTENSITY_LEVEL`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days per calendar bucket; weeks are never short in the interior.
pub const DAYS_PER_WEEK: usize = 7;

/// Top intensity bucket; the color scale is keyed 1:1 to levels.
pub const MAX_INTENSITY_LEVEL: u8 = 4;

/// One calendar day with its raw count and derived intensity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
    /// Discrete bucket in `0..=MAX_INTENSITY_LEVEL`; 0 means no
    /// activity.
    pub level: u8,
}

impl ContributionDay {
    /// A zero-activity placeholder used for week alignment padding.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            count: 0,
            level: 0,
        }
    }
}

/// Seven consecutive days, Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

/// Fully summarized activity record: totals plus the calendar view.
///
/// All numeric fields default to zero when absent from the wire
/// payload; missing data is valid data, not a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubContributions {
    #[serde(default)]
    pub total_contributions: u32,
    #[serde(default)]
    pub commits: u32,
    #[serde(default)]
    pub pull_requests: u32,
    #[serde(default)]
    pub issues: u32,
    #[serde(default)]
    pub repositories_contributed_to: u32,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
    /// Opaque human-readable string, passed through from upstream.
    #[serde(default)]
    pub account_age: String,
}

impl GitHubContributions {
    /// The canonical zero-state: all counts zero and no weeks.
    pub fn empty() -> Self {
        Self::default()
    }
}
