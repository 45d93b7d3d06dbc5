// ============================================================================
// Groups Infrastructure - In-Memory Group Repository
// File: crates/groups-infrastructure/src/database/memory/group_repo_impl.rs
// ============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use groups_core::domain::{Group, NewGroup};
use groups_core::error::DomainError;
use groups_core::repositories::GroupRepository;
use groups_shared::GroupId;

/// Process-local store with the same constraints as the `groups` table:
/// ids are never reused and names are unique.
pub struct InMemoryGroupRepository {
    state: RwLock<MemoryState>,
}

struct MemoryState {
    next_id: GroupId,
    // keyed by id, so iteration order is insertion order
    groups: BTreeMap<GroupId, Group>,
}

impl MemoryState {
    fn name_taken(&self, name: &str, excluding: Option<GroupId>) -> bool {
        self.groups
            .values()
            .any(|g| g.name == name && Some(g.id) != excluding)
    }
}

impl InMemoryGroupRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                groups: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryGroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn find_by_id(&self, id: GroupId) -> Result<Option<Group>, DomainError> {
        Ok(self.state.read().await.groups.get(&id).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.state.read().await.name_taken(name, None))
    }

    async fn exists_by_name_excluding_id(&self, name: &str, id: GroupId) -> Result<bool, DomainError> {
        Ok(self.state.read().await.name_taken(name, Some(id)))
    }

    async fn find_all(&self) -> Result<Vec<Group>, DomainError> {
        Ok(self.state.read().await.groups.values().cloned().collect())
    }

    async fn create(&self, group: &NewGroup) -> Result<Group, DomainError> {
        let mut state = self.state.write().await;
        if state.name_taken(&group.name, None) {
            return Err(DomainError::GroupNameAlreadyExists(group.name.clone()));
        }

        let id = state.next_id;
        state.next_id += 1;
        let created = Group::from_new(id, group);
        state.groups.insert(id, created.clone());

        info!("Group created in memory: {}", id);
        Ok(created)
    }

    async fn update(&self, group: &Group) -> Result<Group, DomainError> {
        let mut state = self.state.write().await;
        if state.name_taken(&group.name, Some(group.id)) {
            return Err(DomainError::GroupNameAlreadyExists(group.name.clone()));
        }

        let stored = state
            .groups
            .get_mut(&group.id)
            .ok_or(DomainError::GroupNotFound(group.id))?;
        // created_at is write-once
        stored.name = group.name.clone();
        stored.is_active = group.is_active;
        stored.updated_at = group.updated_at;

        Ok(stored.clone())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
