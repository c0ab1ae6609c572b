//! In-memory lofty view repository.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::{ViewPersistenceError, ViewRepository};
use crate::domain::{LoftyView, NewLoftyView, RecordId};

/// View storage backed by a locked vector.
pub struct InMemoryViewRepository {
    views: RwLock<Vec<LoftyView>>,
    clock: Arc<dyn Clock>,
}

fn seed_stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_else(|| panic!("seed timestamp {year}-{month}-{day} must be valid"))
}

impl InMemoryViewRepository {
    /// Create an empty repository reading timestamps from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            views: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Create a repository preloaded with the reference view collection.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let repo = Self::new(clock);
        {
            let mut views = repo
                .views
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            views.extend(Self::seed_views());
        }
        repo
    }

    fn seed_views() -> Vec<LoftyView> {
        vec![
            LoftyView {
                id: RecordId::FIRST,
                name: "Golden Gate Bridge".into(),
                description: Some("Iconic suspension bridge in San Francisco".into()),
                location: Some("San Francisco, CA".into()),
                hearts: 42,
                created_at: seed_stamp(2024, 1, 15, 10, 30),
                updated_at: seed_stamp(2024, 1, 15, 10, 30),
            },
            LoftyView {
                id: RecordId::FIRST.next(),
                name: "Grand Canyon Sunrise".into(),
                description: Some("Breathtaking sunrise view from the South Rim".into()),
                location: Some("Grand Canyon National Park, AZ".into()),
                hearts: 87,
                created_at: seed_stamp(2024, 2, 20, 6, 15),
                updated_at: seed_stamp(2024, 2, 20, 6, 15),
            },
            LoftyView {
                id: RecordId::FIRST.next().next(),
                name: "Mount Fuji".into(),
                description: None,
                location: Some("Honshu, Japan".into()),
                hearts: 156,
                created_at: seed_stamp(2024, 3, 10, 14, 45),
                updated_at: seed_stamp(2024, 3, 10, 14, 45),
            },
        ]
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<LoftyView>>, ViewPersistenceError> {
        self.views
            .read()
            .map_err(|_| ViewPersistenceError::query("view collection lock poisoned"))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<LoftyView>>, ViewPersistenceError> {
        self.views
            .write()
            .map_err(|_| ViewPersistenceError::query("view collection lock poisoned"))
    }
}

#[async_trait]
impl ViewRepository for InMemoryViewRepository {
    async fn list(&self) -> Result<Vec<LoftyView>, ViewPersistenceError> {
        Ok(self.read_guard()?.clone())
    }

    async fn find_by_id(
        &self,
        id: RecordId,
    ) -> Result<Option<LoftyView>, ViewPersistenceError> {
        Ok(self.read_guard()?.iter().find(|view| view.id == id).cloned())
    }

    async fn create(&self, new_view: NewLoftyView) -> Result<LoftyView, ViewPersistenceError> {
        // Single write guard covers id assignment and insertion.
        let mut views = self.write_guard()?;
        let id = views
            .iter()
            .map(|view| view.id)
            .max()
            .map_or(RecordId::FIRST, RecordId::next);
        let now = self.clock.utc();
        let view = LoftyView {
            id,
            name: new_view.name,
            description: new_view.description,
            location: new_view.location,
            hearts: 0,
            created_at: now,
            updated_at: now,
        };
        views.push(view.clone());
        Ok(view)
    }
}
