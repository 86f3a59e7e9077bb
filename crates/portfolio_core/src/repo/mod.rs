//! Repository layer for the portfolio data.
//!
//! # Responsibility
//! - Define read-only access contracts over the project list and the
//!   profile record.
//! - Keep dataset loading/validation details away from the service
//!   layer.
//!
//! # Invariants
//! - Repository construction validates every record; once built, a
//!   repository never mutates.
//! - The profile record is a singleton per repository.

pub mod dataset;
pub mod project_repo;
