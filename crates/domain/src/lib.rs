//! # mergington-domain
//!
//! Pure domain model for the Mergington High activity directory.
//!
//! ## Responsibilities
//! - Define **Activities** (named offerings with a schedule, a capacity,
//!   and an ordered participant roster)
//! - Define the **Catalog** (the insertion-ordered, name-keyed collection
//!   of activities that is the sole state of the system)
//! - Contain all invariant enforcement: activity-name uniqueness, the
//!   one-activity-per-student rule, and roster ordering
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod activity;
pub mod catalog;
pub mod error;
