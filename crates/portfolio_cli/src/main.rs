//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `portfolio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use portfolio_core::{InMemoryProjectRepository, PortfolioService};

fn main() {
    let store = PortfolioService::new(InMemoryProjectRepository::with_default_dataset());

    println!("portfolio_core version={}", portfolio_core::core_version());
    println!("projects={}", store.projects().len());
    println!("featured={}", store.featured_projects().len());
    println!("technologies={}", store.all_technologies().len());
}
