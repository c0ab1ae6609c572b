//! In-memory user repository.
//!
//! Enforces the unique-email constraint and surfaces it as a typed
//! [`UserPersistenceError::DuplicateEmail`] instead of a text message.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Duration;
use mockable::Clock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, RecordId, User};

/// User storage backed by a locked vector.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserRepository {
    /// Create an empty repository reading timestamps from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Create a repository preloaded with the reference user collection.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let repo = Self::new(clock);
        {
            let now = repo.clock.utc();
            let mut users = repo
                .users
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            users.extend(Self::seed_users(now));
        }
        repo
    }

    fn seed_users(now: chrono::DateTime<chrono::Utc>) -> Vec<User> {
        let seed_email = |raw: &str| {
            EmailAddress::new(raw)
                .unwrap_or_else(|err| panic!("seed email {raw} must be valid: {err}"))
        };
        // The reference data set stamps seed users as if they were edited
        // five days after creation.
        let edited = now + Duration::days(5);
        vec![
            User {
                id: RecordId::FIRST,
                name: "Alice".into(),
                email: seed_email("alice@example.com"),
                age: 42,
                created_at: now,
                updated_at: edited,
            },
            User {
                id: RecordId::FIRST.next(),
                name: "Robert".into(),
                email: seed_email("Robert@example.com"),
                age: 21,
                created_at: now,
                updated_at: edited,
            },
        ]
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users
            .read()
            .map_err(|_| UserPersistenceError::query("user collection lock poisoned"))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users
            .write()
            .map_err(|_| UserPersistenceError::query("user collection lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.read_guard()?.clone())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.read_guard()?.iter().find(|user| user.id == id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserPersistenceError> {
        // Single write guard covers the uniqueness check, id assignment, and
        // insertion, so no other create can interleave.
        let mut users = self.write_guard()?;
        if users
            .iter()
            .any(|user| user.email.matches_ignore_case(&new_user.email))
        {
            return Err(UserPersistenceError::duplicate_email(
                new_user.email.as_ref(),
            ));
        }
        let id = users
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(RecordId::FIRST, RecordId::next);
        let now = self.clock.utc();
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            age: new_user.age,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, UserPersistenceError> {
        let mut users = self.write_guard()?;
        let before = users.len();
        users.retain(|user| user.id != id);
        Ok(users.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockable::MockClock;
    use rstest::rstest;

    fn fixed_clock() -> Arc<dyn Clock> {
        let stamp = Utc
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let mut clock = MockClock::new();
        clock.expect_utc().return_const(stamp);
        Arc::new(clock)
    }

    fn new_user(name: &str, email: &str, age: u32) -> NewUser {
        NewUser {
            name: name.into(),
            email: EmailAddress::new(email).expect("valid email"),
            age,
        }
    }

    #[tokio::test]
    async fn create_on_empty_collection_assigns_id_one() {
        let repo = InMemoryUserRepository::new(fixed_clock());
        let user = repo
            .create(new_user("John Doe", "john@example.com", 30))
            .await
            .expect("created");
        assert_eq!(user.id.get(), 1);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn create_assigns_one_past_the_maximum_id() {
        let repo = InMemoryUserRepository::seeded(fixed_clock());
        let user = repo
            .create(new_user("John Doe", "john@example.com", 30))
            .await
            .expect("created");
        assert_eq!(user.id.get(), 3);
    }

    #[rstest]
    #[case("alice@example.com")]
    #[case("ALICE@EXAMPLE.COM")]
    #[case("robert@example.com")]
    #[tokio::test]
    async fn create_rejects_duplicate_email_ignoring_case(#[case] email: &str) {
        let repo = InMemoryUserRepository::seeded(fixed_clock());
        let error = repo
            .create(new_user("John Doe", email, 30))
            .await
            .expect_err("duplicate email");
        assert!(matches!(
            error,
            UserPersistenceError::DuplicateEmail { .. }
        ));
        let users = repo.list().await.expect("list succeeds");
        assert_eq!(users.len(), 2, "failed create must not grow the collection");
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let repo = InMemoryUserRepository::seeded(fixed_clock());
        let deleted = repo
            .delete_by_id(RecordId::FIRST)
            .await
            .expect("delete succeeds");
        assert!(deleted);
        assert_eq!(repo.list().await.expect("list succeeds").len(), 1);
    }

    #[tokio::test]
    async fn delete_of_absent_id_reports_false_and_keeps_size() {
        let repo = InMemoryUserRepository::seeded(fixed_clock());
        let deleted = repo
            .delete_by_id(RecordId::new(99).expect("valid id"))
            .await
            .expect("delete succeeds");
        assert!(!deleted);
        assert_eq!(repo.list().await.expect("list succeeds").len(), 2);
    }

    #[tokio::test]
    async fn second_delete_of_same_id_reports_false() {
        let repo = InMemoryUserRepository::seeded(fixed_clock());
        assert!(repo
            .delete_by_id(RecordId::FIRST)
            .await
            .expect("delete succeeds"));
        assert!(!repo
            .delete_by_id(RecordId::FIRST)
            .await
            .expect("delete succeeds"));
    }

    #[tokio::test]
    async fn id_of_deleted_record_can_be_reassigned() {
        let repo = InMemoryUserRepository::seeded(fixed_clock());
        assert!(repo
            .delete_by_id(RecordId::FIRST.next())
            .await
            .expect("delete succeeds"));
        let user = repo
            .create(new_user("John Doe", "john@example.com", 30))
            .await
            .expect("created");
        // Max id dropped back to 1, so the next assignment is 2 again.
        assert_eq!(user.id.get(), 2);
    }
}
