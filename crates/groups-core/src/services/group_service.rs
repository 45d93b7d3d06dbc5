// ============================================================================
// Groups Core - Group Service
// File: crates/groups-core/src/services/group_service.rs
// ============================================================================
//! Group lifecycle: create, list, fetch, rename, soft delete, and status toggle

use std::sync::Arc;
use tracing::{info, warn};

use groups_shared::GroupId;

use crate::domain::{normalize_name, validate_group_name, Group, NewGroup};
use crate::error::DomainError;
use crate::repositories::GroupRepository;

/// Group service enforcing name uniqueness and status transitions.
///
/// Every operation performs at most one write through the repository.
pub struct GroupService<R: GroupRepository + ?Sized> {
    group_repo: Arc<R>,
}

impl<R: GroupRepository + ?Sized> GroupService<R> {
    pub fn new(group_repo: Arc<R>) -> Self {
        Self { group_repo }
    }

    /// Create a new, active group
    pub async fn create(&self, name: &str) -> Result<Group, DomainError> {
        let new_group = NewGroup::new(name)?;

        if self.group_repo.exists_by_name(&new_group.name).await? {
            warn!("Group creation rejected: name already exists: {}", new_group.name);
            return Err(DomainError::GroupNameAlreadyExists(new_group.name));
        }

        let group = self.group_repo.create(&new_group).await?;

        info!("Group created: id={} name={}", group.id, group.name);
        Ok(group)
    }

    /// All groups, active and inactive
    pub async fn get_all(&self) -> Result<Vec<Group>, DomainError> {
        self.group_repo.find_all().await
    }

    pub async fn get_by_id(&self, id: GroupId) -> Result<Group, DomainError> {
        self.require(id).await
    }

    /// Rename a group. The active flag is left untouched.
    pub async fn update(&self, id: GroupId, new_name: &str) -> Result<Group, DomainError> {
        let name = normalize_name(new_name);
        validate_group_name(&name).map_err(|e| {
            DomainError::ValidationError(
                e.message.map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string()),
            )
        })?;

        let mut group = self.require(id).await?;

        if self.group_repo.exists_by_name_excluding_id(&name, id).await? {
            warn!("Group update rejected: name already exists: {}", name);
            return Err(DomainError::GroupNameAlreadyExists(name));
        }

        group.rename(name);
        let updated = self.group_repo.update(&group).await?;

        info!("Group updated: id={} name={}", updated.id, updated.name);
        Ok(updated)
    }

    /// Soft delete: marks the group inactive. Fails if it already is.
    pub async fn soft_delete(&self, id: GroupId) -> Result<(), DomainError> {
        let mut group = self.require(id).await?;

        if let Err(e) = group.deactivate() {
            warn!("Group deletion rejected: {}", e);
            return Err(e);
        }
        self.group_repo.update(&group).await?;

        info!("Group deactivated: id={}", id);
        Ok(())
    }

    /// Flip the active flag regardless of its current value
    pub async fn toggle_status(&self, id: GroupId) -> Result<Group, DomainError> {
        let mut group = self.require(id).await?;

        group.toggle_status();
        let updated = self.group_repo.update(&group).await?;

        info!("Group status toggled: id={} is_active={}", updated.id, updated.is_active);
        Ok(updated)
    }

    /// Check the backing store is reachable
    pub async fn health_check(&self) -> Result<(), DomainError> {
        self.group_repo.ping().await
    }

    async fn require(&self, id: GroupId) -> Result<Group, DomainError> {
        self.group_repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("Group not found: {}", id);
            DomainError::GroupNotFound(id)
        })
    }
}
