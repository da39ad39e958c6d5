//! # mergington-app
//!
//! Application layer for the activity directory.
//!
//! ## Responsibilities
//! - Own the shared [`Catalog`](mergington_domain::catalog::Catalog) behind
//!   a lock so concurrent HTTP requests cannot interleave a check with a
//!   mutation
//! - Expose the three directory use-cases: list, enroll, withdraw
//! - Provide the fixed catalog the school seeds at startup
//!
//! ## Dependency rule
//! Depends only on `mergington-domain`. Adapters depend on this crate,
//! never the other way around.

pub mod seed;
pub mod services;
