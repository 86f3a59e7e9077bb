//! Activity fetch boundary.
//!
//! # Responsibility
//! - Define the contract for retrieving the shaped contribution
//!   aggregate from an external source.
//! - Model the loading/error/ready lifecycle the consuming panel
//!   renders.
//!
//! # Invariants
//! - Transport details stay outside the core; implementations of the
//!   fetcher trait are collaborator concerns.
//! - A failed fetch is terminal until explicitly retried; there is
//!   no automatic refresh.

pub mod activity;
pub mod panel;
