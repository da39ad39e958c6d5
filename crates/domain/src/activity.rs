//! Activity — a named extracurricular offering with a schedule, a capacity,
//! and an ordered participant roster.

use serde::Serialize;

use crate::error::{DirectoryError, ValidationError};

/// A single extracurricular activity.
///
/// The `name` is the catalog key and is skipped during serialization:
/// the catalog serializes activities as a JSON object keyed by name, and
/// the record body carries only the remaining fields.
///
/// `participants` preserves signup order; `max_participants` is recorded
/// and reported but enrollment is not rejected when the roster is full.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    #[serde(skip_serializing)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    /// Create a builder for constructing an [`Activity`].
    #[must_use]
    pub fn builder() -> ActivityBuilder {
        ActivityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when `name` is empty or
    /// `max_participants` is zero.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.max_participants == 0 {
            return Err(ValidationError::ZeroCapacity.into());
        }
        Ok(())
    }

    /// Whether `email` is currently on this activity's roster.
    #[must_use]
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Step-by-step builder for [`Activity`].
#[derive(Debug, Default)]
pub struct ActivityBuilder {
    name: Option<String>,
    description: Option<String>,
    schedule: Option<String>,
    max_participants: Option<usize>,
    participants: Vec<String>,
}

impl ActivityBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    #[must_use]
    pub fn max_participants(mut self, max_participants: usize) -> Self {
        self.max_participants = Some(max_participants);
        self
    }

    #[must_use]
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Consume the builder, validate, and return an [`Activity`].
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if `name` is missing or empty,
    /// or if `max_participants` is missing or zero.
    pub fn build(self) -> Result<Activity, DirectoryError> {
        let activity = Activity {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            schedule: self.schedule.unwrap_or_default(),
            max_participants: self.max_participants.unwrap_or_default(),
            participants: self.participants,
        };
        activity.validate()?;
        Ok(activity)
    }
}
