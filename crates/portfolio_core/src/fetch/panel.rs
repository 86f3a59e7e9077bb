//! Contribution panel fetch lifecycle.
//!
//! # Responsibility
//! - Track the three display states of the asynchronous fetch:
//!   loading, error, ready.
//!
//! # Invariants
//! - `Loading` is the initial state.
//! - `Error` is terminal until `retry()`; there is no automatic
//!   retry and no ready-to-loading refresh.

use crate::fetch::activity::ActivityFetcher;
use crate::model::contribution::GitHubContributions;
use log::{info, warn};

/// Display state of the contribution panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionState {
    /// Initial state; the fetch has not completed.
    Loading,
    /// The fetch failed; stays here until an explicit retry.
    Error,
    /// The aggregate is available for rendering.
    Ready(GitHubContributions),
}

/// State machine driving the calendar heat-map panel.
pub struct ContributionPanel {
    state: ContributionState,
}

impl ContributionPanel {
    /// Starts in `Loading`.
    pub fn new() -> Self {
        Self {
            state: ContributionState::Loading,
        }
    }

    pub fn state(&self) -> &ContributionState {
        &self.state
    }

    /// The aggregate, when the panel is ready.
    pub fn contributions(&self) -> Option<&GitHubContributions> {
        match &self.state {
            ContributionState::Ready(contributions) => Some(contributions),
            _ => None,
        }
    }

    /// Runs one fetch attempt and transitions out of `Loading`.
    ///
    /// # Contract
    /// - `Loading` -> `Ready` on success, `Loading` -> `Error` on
    ///   failure.
    /// - Calls outside `Loading` are ignored; a ready panel never
    ///   refreshes itself and a failed one waits for `retry()`.
    pub fn load(&mut self, fetcher: &dyn ActivityFetcher) {
        if self.state != ContributionState::Loading {
            return;
        }
        match fetcher.fetch_contributions() {
            Ok(contributions) => {
                info!(
                    "event=contributions_loaded module=fetch status=ok total={}",
                    contributions.total_contributions
                );
                self.state = ContributionState::Ready(contributions);
            }
            Err(err) => {
                warn!("event=contributions_failed module=fetch status=error reason={err}");
                self.state = ContributionState::Error;
            }
        }
    }

    /// Re-arms a failed panel back to `Loading`.
    ///
    /// No-op outside `Error`; a ready panel is never re-armed.
    pub fn retry(&mut self) {
        if self.state == ContributionState::Error {
            self.state = ContributionState::Loading;
        }
    }
}

impl Default for ContributionPanel {
    fn default() -> Self {
        Self::new()
    }
}
