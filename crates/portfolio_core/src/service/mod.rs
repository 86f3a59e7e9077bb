//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository data into the derived views the UI
//!   consumes.
//! - Turn raw activity series into the week-bucketed calendar
//!   aggregate.
//!
//! # Invariants
//! - Services hold no I/O; every operation is a total, synchronous
//!   computation over in-memory data.

pub mod contribution_service;
pub mod portfolio_service;
