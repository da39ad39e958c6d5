//! Catalog — the complete set of activities and their current rosters.
//!
//! The catalog is keyed by activity name with iteration order equal to
//! insertion order, which makes the cross-catalog uniqueness scan in
//! [`Catalog::enroll`] well-defined. It serializes to a JSON object mapping
//! each activity name to its record, in that same order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::activity::Activity;
use crate::error::{ConflictError, DirectoryError, NotFoundError, ValidationError};

/// Insertion-ordered, name-keyed collection of activities.
///
/// Activity names are unique and fixed once seeding is done; the only
/// mutations afterwards are [`Catalog::enroll`] and [`Catalog::withdraw`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of activities in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the catalog holds no activities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Iterate over activities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Look up an activity by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Name of the activity `email` is enrolled in, if any.
    #[must_use]
    pub fn enrollment_of(&self, email: &str) -> Option<&str> {
        self.activities
            .iter()
            .find(|a| a.has_participant(email))
            .map(|a| a.name.as_str())
    }

    /// Add an activity during seeding.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if the activity fails its own
    /// invariants or an activity with the same name already exists.
    pub fn insert(&mut self, activity: Activity) -> Result<(), DirectoryError> {
        activity.validate()?;
        if self.get(&activity.name).is_some() {
            return Err(ValidationError::DuplicateActivity.into());
        }
        self.activities.push(activity);
        Ok(())
    }

    /// Sign `email` up for the activity named `name`.
    ///
    /// The existence check runs before the uniqueness scan, so an unknown
    /// activity reports `NotFound` even for an already-enrolled student.
    /// The scan covers the whole catalog: a student may be enrolled in at
    /// most one activity at a time. Capacity is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when `name` is unknown and
    /// [`DirectoryError::Conflict`] when `email` is already enrolled
    /// anywhere in the catalog.
    pub fn enroll(&mut self, name: &str, email: &str) -> Result<(), DirectoryError> {
        let index = self
            .activities
            .iter()
            .position(|a| a.name == name)
            .ok_or(NotFoundError::Activity)?;
        if self.enrollment_of(email).is_some() {
            return Err(ConflictError::AlreadyEnrolled.into());
        }
        self.activities[index].participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster of the activity named `name`,
    /// preserving the relative order of the remaining participants.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when `name` is unknown or when
    /// `email` is not on that activity's roster.
    pub fn withdraw(&mut self, name: &str, email: &str) -> Result<(), DirectoryError> {
        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(NotFoundError::Activity)?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(NotFoundError::Participant)?;
        activity.participants.remove(position);
        Ok(())
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}
