//! Canonical domain model for the portfolio core.
//!
//! # Responsibility
//! - Define the data structures shared by the store, the aggregator
//!   and the fetch boundary.
//! - Keep wire field naming stable for the frontend payload shape.
//!
//! # Invariants
//! - `ProjectCategory` is a closed enumeration; unknown values fail
//!   deserialization instead of becoming runtime state.
//! - `ContributionWeek` always carries exactly seven days.

pub mod contribution;
pub mod profile;
pub mod project;
