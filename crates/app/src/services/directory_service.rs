//! Directory service — use-cases for listing activities and managing
//! sign-ups.

use tokio::sync::RwLock;

use mergington_domain::catalog::Catalog;
use mergington_domain::error::{DirectoryError, ValidationError};

/// Application service guarding the shared activity catalog.
///
/// The catalog lives behind a [`RwLock`] so every enroll/withdraw runs its
/// check-then-mutate sequence atomically under the write lock, preserving
/// the one-activity-per-student invariant across concurrent requests.
/// The lock is never held across IO.
pub struct DirectoryService {
    catalog: RwLock<Catalog>,
}

impl DirectoryService {
    /// Create a new service owning the given catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Snapshot of the full catalog.
    pub async fn list_activities(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    /// Sign a student up for an activity.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when `email` is empty,
    /// [`DirectoryError::NotFound`] when the activity is unknown, and
    /// [`DirectoryError::Conflict`] when the student is already enrolled
    /// in any activity.
    pub async fn enroll(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }
        self.catalog.write().await.enroll(activity_name, email)?;
        tracing::info!(activity = activity_name, email, "student signed up");
        Ok(())
    }

    /// Remove a student from an activity's roster.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when `email` is empty and
    /// [`DirectoryError::NotFound`] when the activity is unknown or the
    /// student is not on its roster.
    pub async fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }
        self.catalog.write().await.withdraw(activity_name, email)?;
        tracing::info!(activity = activity_name, email, "student unregistered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergington_domain::activity::Activity;
    use mergington_domain::error::{ConflictError, NotFoundError};

    fn make_service() -> DirectoryService {
        let mut catalog = Catalog::new();
        catalog
            .insert(
                Activity::builder()
                    .name("Chess Club")
                    .schedule("Fridays, 3:30 PM - 5:00 PM")
                    .max_participants(12)
                    .participant("michael@mergington.edu")
                    .build()
                    .unwrap(),
            )
            .unwrap();
        catalog
            .insert(
                Activity::builder()
                    .name("Math Club")
                    .schedule("Mondays, 3:30 PM - 4:30 PM")
                    .max_participants(20)
                    .participant("zoe@mergington.edu")
                    .build()
                    .unwrap(),
            )
            .unwrap();
        DirectoryService::new(catalog)
    }

    #[tokio::test]
    async fn should_list_seeded_catalog() {
        let svc = make_service();
        let catalog = svc.list_activities().await;
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Chess Club").is_some());
    }

    #[tokio::test]
    async fn should_enroll_then_show_in_listing() {
        let svc = make_service();
        svc.enroll("Chess Club", "tester@example.com").await.unwrap();

        let catalog = svc.list_activities().await;
        assert!(
            catalog
                .get("Chess Club")
                .unwrap()
                .has_participant("tester@example.com")
        );
    }

    #[tokio::test]
    async fn should_reject_second_enroll_anywhere_in_catalog() {
        let svc = make_service();
        svc.enroll("Chess Club", "tester@example.com").await.unwrap();

        let result = svc.enroll("Math Club", "tester@example.com").await;
        assert!(matches!(
            result,
            Err(DirectoryError::Conflict(ConflictError::AlreadyEnrolled))
        ));
    }

    #[tokio::test]
    async fn should_reject_enroll_for_unknown_activity() {
        let svc = make_service();
        let result = svc.enroll("Nonexistent", "a@b.com").await;
        assert!(matches!(
            result,
            Err(DirectoryError::NotFound(NotFoundError::Activity))
        ));
    }

    #[tokio::test]
    async fn should_reject_empty_email() {
        let svc = make_service();
        let result = svc.enroll("Chess Club", "").await;
        assert!(matches!(
            result,
            Err(DirectoryError::Validation(ValidationError::EmptyEmail))
        ));
    }

    #[tokio::test]
    async fn should_restore_roster_after_round_trip() {
        let svc = make_service();
        let before = svc
            .list_activities()
            .await
            .get("Chess Club")
            .unwrap()
            .participants
            .clone();

        svc.enroll("Chess Club", "tester@example.com").await.unwrap();
        svc.withdraw("Chess Club", "tester@example.com")
            .await
            .unwrap();

        let after = svc
            .list_activities()
            .await
            .get("Chess Club")
            .unwrap()
            .participants
            .clone();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn should_reject_repeated_withdraw() {
        let svc = make_service();
        svc.enroll("Chess Club", "tester@example.com").await.unwrap();
        svc.withdraw("Chess Club", "tester@example.com")
            .await
            .unwrap();

        let result = svc.withdraw("Chess Club", "tester@example.com").await;
        assert!(matches!(
            result,
            Err(DirectoryError::NotFound(NotFoundError::Participant))
        ));
    }

    #[tokio::test]
    async fn should_allow_reenroll_after_withdraw() {
        let svc = make_service();
        svc.enroll("Chess Club", "tester@example.com").await.unwrap();
        svc.withdraw("Chess Club", "tester@example.com")
            .await
            .unwrap();

        svc.enroll("Math Club", "tester@example.com").await.unwrap();
        let catalog = svc.list_activities().await;
        assert!(
            catalog
                .get("Math Club")
                .unwrap()
                .has_participant("tester@example.com")
        );
    }
}
