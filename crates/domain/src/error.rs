//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DirectoryError`] via `#[from]` — no `String` variants.
//!
//! The `Display` strings on the leaf errors are part of the HTTP contract:
//! the adapter returns them verbatim as the `detail` field of error bodies.

/// Top-level error for directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Input failed a domain invariant check.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced activity or participant does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The operation would violate the one-activity-per-student rule.
    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

/// Domain invariant violations on input data.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Activity name must not be empty")]
    EmptyName,
    #[error("Email must not be empty")]
    EmptyEmail,
    #[error("Activity capacity must be positive")]
    ZeroCapacity,
    #[error("Activity already exists in the catalog")]
    DuplicateActivity,
}

/// Lookup failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("Activity not found")]
    Activity,
    #[error("Student is not signed up for this activity")]
    Participant,
}

/// Membership conflicts.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("Student already signed up for an activity")]
    AlreadyEnrolled,
}
