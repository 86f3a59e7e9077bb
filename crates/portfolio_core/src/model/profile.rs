//! Profile domain model.
//!
//! # Responsibility
//! - Define the singleton profile record rendered by the hero and
//!   contact sections.
//!
//! # Invariants
//! - Exactly one `ProfileInfo` exists per store; it is immutable
//!   after repository construction.

use serde::{Deserialize, Serialize};

/// One external profile link rendered in the contact footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Icon key resolved by the presentation layer.
    pub icon: String,
}

/// Singleton profile record for the whole site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub available_for_work: bool,
    /// Ordered as authored; order is meaningful for display.
    pub social_links: Vec<SocialLink>,
}
