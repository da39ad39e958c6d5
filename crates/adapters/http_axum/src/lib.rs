//! # mergington-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/activities`, signup, unregister)
//! - Redirect `/` to the static landing page and serve the pre-built
//!   assets under `/static` (the UI itself is an external collaborator)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map directory errors into status codes with JSON error bodies
//!   carrying a `detail` field
//!
//! ## Dependency rule
//! Depends on `mergington-app` (for the directory service) and
//! `mergington-domain` (for types used in response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
